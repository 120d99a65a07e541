/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/
use crate::error::AppError;
use reqwest::StatusCode;
use reqwest::header::{CONTENT_TYPE, HeaderMap};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Raw response returned by the buyback API
///
/// The body is kept as text. Nothing is decoded until the caller asks for it,
/// because a nominal 200 may still carry an HTML page.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: String,
}

impl ApiResponse {
    /// Creates a response from its parts
    pub fn new(status: StatusCode, headers: HeaderMap, body: impl Into<String>) -> Self {
        Self {
            status,
            headers,
            body: body.into(),
        }
    }

    /// Reads the whole body of a `reqwest` response
    pub async fn from_reqwest(response: reqwest::Response) -> Result<Self, AppError> {
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.text().await?;
        Ok(Self::new(status, headers, body))
    }

    /// Status code
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Status code as a number
    pub fn status_code(&self) -> u16 {
        self.status.as_u16()
    }

    /// Response headers, looked up case-insensitively
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Value of a header, if present and valid UTF-8
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// `Content-Type` header, empty when absent
    pub fn content_type(&self) -> &str {
        self.headers
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
    }

    /// Raw body text
    pub fn text(&self) -> &str {
        &self.body
    }

    /// Consumes the response and returns its body
    pub fn into_text(self) -> String {
        self.body
    }

    /// Whether the status is 2xx
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Whether the status is 4xx or 5xx
    pub fn is_error(&self) -> bool {
        self.status.is_client_error() || self.status.is_server_error()
    }

    /// Whether the content type announces JSON, problem documents included
    pub fn is_json(&self) -> bool {
        let content_type = self.content_type().to_ascii_lowercase();
        content_type.contains("application/json") || content_type.contains("+json")
    }

    /// Whether the body is an HTML page rather than an API document
    ///
    /// Either the content type says `text/html` or the body starts with `<`.
    pub fn looks_like_html(&self) -> bool {
        self.content_type().to_ascii_lowercase().contains("text/html")
            || self.body.trim_start().starts_with('<')
    }

    /// Decodes the body as JSON into `T`
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, AppError> {
        Ok(serde_json::from_str(&self.body)?)
    }

    /// Decodes the body as a JSON object
    ///
    /// HTML bodies and JSON values that are not objects are reported as
    /// [`AppError::UnexpectedContent`].
    pub fn json_object(&self) -> Result<Map<String, Value>, AppError> {
        if self.looks_like_html() {
            return Err(self.unexpected_content());
        }
        match self.json::<Value>()? {
            Value::Object(map) => Ok(map),
            _ => Err(self.unexpected_content()),
        }
    }

    /// Turns a 4xx/5xx response into [`AppError::Http`], passing anything else through
    pub fn error_for_status(self) -> Result<Self, AppError> {
        if self.is_error() {
            return Err(AppError::Http {
                status: self.status,
                body: self.body,
            });
        }
        Ok(self)
    }

    fn unexpected_content(&self) -> AppError {
        AppError::UnexpectedContent {
            status: self.status,
            content_type: self.content_type().to_string(),
        }
    }
}
