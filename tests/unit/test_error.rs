use buyback_client::error::AppError;
use reqwest::StatusCode;

#[test]
fn test_app_error_display_http() {
    let error = AppError::Http {
        status: StatusCode::NOT_FOUND,
        body: r#"{"title":"Not Found"}"#.to_string(),
    };
    assert_eq!(
        error.to_string(),
        r#"http error 404 Not Found: {"title":"Not Found"}"#
    );
}

#[test]
fn test_app_error_display_http_without_body() {
    let error = AppError::Http {
        status: StatusCode::UNAUTHORIZED,
        body: String::new(),
    };
    assert_eq!(error.to_string(), "http error 401 Unauthorized");
}

#[test]
fn test_app_error_display_unexpected_content() {
    let error = AppError::UnexpectedContent {
        status: StatusCode::OK,
        content_type: "text/html".to_string(),
    };
    assert_eq!(
        error.to_string(),
        "unexpected content type 'text/html' (status 200 OK)"
    );
}

#[test]
fn test_app_error_display_invalid_input() {
    let error = AppError::InvalidInput("bad token".to_string());
    assert_eq!(error.to_string(), "invalid input: bad token");
}

#[test]
fn test_app_error_status() {
    let http = AppError::Http {
        status: StatusCode::FORBIDDEN,
        body: String::new(),
    };
    assert_eq!(http.status(), Some(StatusCode::FORBIDDEN));
    assert!(!http.is_transport());
    assert!(!http.is_timeout());

    let invalid = AppError::InvalidInput("x".to_string());
    assert_eq!(invalid.status(), None);
}

#[test]
fn test_app_error_from_serde() {
    let serde_error =
        serde_json::from_str::<serde_json::Value>(r#"{"invalid": json}"#).unwrap_err();
    let app_error: AppError = serde_error.into();

    match app_error {
        AppError::Json(_) => (),
        _ => panic!("Expected Json error"),
    }
}

#[test]
fn test_app_error_from_reqwest_builder_is_invalid_input() {
    let builder_error = reqwest::Client::new()
        .get("not a url")
        .build()
        .unwrap_err();
    let app_error: AppError = builder_error.into();

    assert!(matches!(app_error, AppError::InvalidInput(_)));
    assert!(!app_error.is_transport());
    assert_eq!(app_error.status(), None);
}

#[test]
fn test_app_error_from_invalid_header() {
    let header_error = reqwest::header::HeaderValue::from_str("a\nb").unwrap_err();
    let app_error: AppError = header_error.into();
    assert!(matches!(app_error, AppError::InvalidInput(_)));
}
