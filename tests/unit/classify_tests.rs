use aqs_seed::transport::classify_response;
use aqs_seed::AppError;

#[test]
fn success_statuses_pass() {
    classify_response(200, Some("OK"), "{}").expect("200 passes");
    classify_response(201, Some("Created"), r#"{"id":"x"}"#).expect("201 passes");
    classify_response(299, None, "").expect("edge of 2xx passes");
}

#[test]
fn conflict_without_error_code_is_benign() {
    // Import endpoints answer 409 for data that is already present.
    classify_response(409, Some("Conflict"), r#"{"summary":"already imported"}"#)
        .expect("409 without errorCode is success");
}

#[test]
fn conflict_with_non_json_body_is_benign() {
    classify_response(409, Some("Conflict"), "duplicate").expect("unparsable body has no errorCode");
}

#[test]
fn conflict_with_error_code_fails() {
    let err = classify_response(
        409,
        Some("Conflict"),
        r#"{"errorCode":"DuplicateCustomId","message":"customId already in use"}"#,
    )
    .expect_err("409 with errorCode is an error");
    let msg = err.to_string();
    assert!(msg.contains("DuplicateCustomId"), "got: {msg}");
    assert!(msg.contains("customId already in use"), "got: {msg}");
}

#[test]
fn structured_error_carries_code_and_message() {
    let err = classify_response(
        500,
        Some("Internal Server Error"),
        r#"{"errorCode":"ServerFault","message":"boom","stackTrace":"at line 1"}"#,
    )
    .expect_err("500 is an error");
    match err {
        AppError::Api {
            status,
            code,
            message,
        } => {
            assert_eq!(status, 500);
            assert_eq!(code.as_deref(), Some("ServerFault"));
            assert_eq!(message, "boom");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[test]
fn unstructured_error_falls_back_to_reason_phrase() {
    let err = classify_response(404, Some("Not Found"), "<html>gone</html>")
        .expect_err("404 is an error");
    let msg = err.to_string();
    assert!(msg.contains("Not Found"), "got: {msg}");
}

#[test]
fn unstructured_error_without_reason_still_reports_status() {
    let err = classify_response(599, None, "").expect_err("599 is an error");
    let msg = err.to_string();
    assert!(msg.contains("599"), "got: {msg}");
}
