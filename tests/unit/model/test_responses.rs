use buyback_client::error::AppError;
use buyback_client::model::responses::ApiResponse;
use reqwest::StatusCode;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use serde_json::{Value, json};

fn response(status: u16, content_type: Option<&str>, body: &str) -> ApiResponse {
    let mut headers = HeaderMap::new();
    if let Some(ct) = content_type {
        headers.insert(CONTENT_TYPE, HeaderValue::from_str(ct).unwrap());
    }
    ApiResponse::new(StatusCode::from_u16(status).unwrap(), headers, body)
}

#[test]
fn json_body_is_decoded() {
    let resp = response(200, Some("application/json"), r#"{"results": [], "count": 0}"#);
    let body: Value = resp.json().unwrap();
    assert_eq!(body, json!({"results": [], "count": 0}));
    assert!(resp.is_json());
    assert!(!resp.looks_like_html());
}

#[test]
fn headers_are_case_insensitive() {
    let resp = response(200, Some("application/json"), "{}");
    assert_eq!(resp.header("Content-Type"), Some("application/json"));
    assert_eq!(resp.header("CONTENT-TYPE"), Some("application/json"));
    assert_eq!(resp.header("x-missing"), None);
}

#[test]
fn missing_content_type_is_empty() {
    let resp = response(200, None, "{}");
    assert_eq!(resp.content_type(), "");
    assert!(!resp.is_json());
}

#[test]
fn html_is_detected_by_content_type_or_body() {
    assert!(response(200, Some("text/html; charset=UTF-8"), "oops").looks_like_html());
    assert!(response(200, Some("application/json"), "  <html></html>").looks_like_html());
    assert!(!response(200, Some("application/json"), "[]").looks_like_html());
}

#[test]
fn json_object_rejects_html() {
    let err = response(200, Some("text/html"), "<html></html>")
        .json_object()
        .unwrap_err();
    match err {
        AppError::UnexpectedContent {
            status,
            content_type,
        } => {
            assert_eq!(status, StatusCode::OK);
            assert_eq!(content_type, "text/html");
        }
        other => panic!("Unexpected error: {:?}", other),
    }
}

#[test]
fn json_object_rejects_non_objects() {
    let err = response(200, Some("application/json"), "[1, 2]")
        .json_object()
        .unwrap_err();
    assert!(matches!(err, AppError::UnexpectedContent { .. }));
}

#[test]
fn invalid_json_is_a_json_error() {
    let err = response(200, Some("application/json"), "not json")
        .json::<Value>()
        .unwrap_err();
    assert!(matches!(err, AppError::Json(_)));
}

#[test]
fn problem_json_counts_as_json() {
    let resp = response(404, Some("application/problem+json"), r#"{"title":"Not Found"}"#);
    assert!(resp.is_json());
    assert!(resp.is_error());
}

#[test]
fn error_for_status_keeps_success() {
    let resp = response(204, None, "").error_for_status().unwrap();
    assert_eq!(resp.status_code(), 204);
}

#[test]
fn error_for_status_carries_status_and_body() {
    let err = response(403, Some("application/problem+json"), r#"{"title":"Forbidden"}"#)
        .error_for_status()
        .unwrap_err();
    match err {
        AppError::Http { status, body } => {
            assert_eq!(status, StatusCode::FORBIDDEN);
            assert_eq!(body, r#"{"title":"Forbidden"}"#);
        }
        other => panic!("Unexpected error: {:?}", other),
    }
}

#[test]
fn redirects_are_not_errors() {
    assert!(!response(302, None, "").is_error());
}
