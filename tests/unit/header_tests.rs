use aqs_seed::transport::effective_headers;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};

fn default_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(AUTHORIZATION, HeaderValue::from_static("token sekrit"));
    headers
}

#[test]
fn defaults_apply_when_no_override_is_given() {
    let headers = effective_headers(&default_headers(), None);
    assert_eq!(
        headers.get(CONTENT_TYPE),
        Some(&HeaderValue::from_static("application/json"))
    );
    assert_eq!(
        headers.get(AUTHORIZATION),
        Some(&HeaderValue::from_static("token sekrit"))
    );
}

#[test]
fn override_replaces_the_defaults_wholesale() {
    let mut overrides = HeaderMap::new();
    overrides.insert(ACCEPT, HeaderValue::from_static("text/csv"));

    let headers = effective_headers(&default_headers(), Some(overrides));

    assert_eq!(headers.get(ACCEPT), Some(&HeaderValue::from_static("text/csv")));
    // Replacement, not a merge: defaults absent from the override are gone.
    assert!(headers.get(AUTHORIZATION).is_none());
    assert!(headers.get(CONTENT_TYPE).is_none());
}

#[test]
fn empty_override_still_replaces() {
    let headers = effective_headers(&default_headers(), Some(HeaderMap::new()));
    assert!(headers.is_empty());
}
