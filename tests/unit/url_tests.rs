use std::sync::Arc;

use aqs_seed::client::{build_url, url_join, SamplesClient};
use aqs_seed::transport::{ApiResponse, FileUpload, HttpMethod, Transport};
use aqs_seed::{AppError, Result};
use reqwest::header::HeaderMap;
use serde_json::Value;

/// Transport that refuses every call; enough to exercise URL building.
struct NullTransport;

#[async_trait::async_trait]
impl Transport for NullTransport {
    async fn send(
        &self,
        _method: HttpMethod,
        _url: &str,
        _body: Option<Value>,
        _headers: Option<HeaderMap>,
    ) -> Result<ApiResponse> {
        Err(AppError::Http("null transport".into()))
    }

    async fn upload(&self, _url: &str, _upload: FileUpload) -> Result<ApiResponse> {
        Err(AppError::Http("null transport".into()))
    }
}

fn client() -> SamplesClient {
    SamplesClient::with_transport(Arc::new(NullTransport), "https://host/api/", "sekrit")
}

#[test]
fn url_join_inserts_single_slashes() {
    assert_eq!(
        url_join("https://host/api/", &["v1", "samplinglocations"]),
        "https://host/api/v1/samplinglocations"
    );
    assert_eq!(
        url_join("https://host/api", &["v1", "samplinglocations"]),
        "https://host/api/v1/samplinglocations"
    );
}

#[test]
fn build_url_with_id_and_params() {
    let url = build_url(
        "https://host/api/",
        "v1",
        "samplinglocations",
        Some("X"),
        &[("a", "b")],
    );
    assert_eq!(url, "https://host/api/v1/samplinglocations/X?a=b");
}

#[test]
fn build_url_without_params_has_no_query_string() {
    let url = build_url("https://host/api/", "v1", "fieldvisits", None, &[]);
    assert_eq!(url, "https://host/api/v1/fieldvisits");
}

#[test]
fn build_url_encodes_query_values() {
    let url = build_url(
        "https://host/api/",
        "v1",
        "observedproperties",
        None,
        &[("customId", "DO (Concentration)")],
    );
    assert_eq!(
        url,
        "https://host/api/v1/observedproperties?customId=DO+%28Concentration%29"
    );
}

#[test]
fn resource_url_appends_token_first_when_requested() {
    let url = client().resource_url(
        "services/import/observations",
        None,
        &[("fileType", "SIMPLE_CSV")],
        true,
    );
    assert_eq!(
        url,
        "https://host/api/v1/services/import/observations?token=sekrit&fileType=SIMPLE_CSV"
    );
}

#[test]
fn resource_url_without_token_omits_it() {
    let url = client().resource_url("samplinglocations", Some("abc"), &[], false);
    assert_eq!(url, "https://host/api/v1/samplinglocations/abc");
    assert!(!url.contains("token"));
}
