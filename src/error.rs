/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/

//! Error type shared by every client operation.
//!
//! Transport failures and HTTP error statuses are kept apart: the former never
//! carry a status code, the latter always do.

use reqwest::StatusCode;
use std::fmt;

/// Main error type for the library
#[derive(Debug)]
pub enum AppError {
    /// The request never produced an HTTP response (DNS, TLS, refused connection, timeout)
    /// or its body could not be read
    Network(reqwest::Error),
    /// The server answered with a 4xx or 5xx status
    Http {
        /// Status code returned by the server
        status: StatusCode,
        /// Raw response body, usually an `application/problem+json` document
        body: String,
    },
    /// The body could not be decoded as the requested JSON type
    Json(serde_json::Error),
    /// The body was not JSON where JSON was required, typically an HTML page
    UnexpectedContent {
        /// Status code of the offending response
        status: StatusCode,
        /// `Content-Type` header of the offending response, empty when absent
        content_type: String,
    },
    /// A value supplied by the caller cannot be used to build a request
    InvalidInput(String),
}

impl AppError {
    /// HTTP status attached to the error, if the server answered at all
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::Http { status, .. } | AppError::UnexpectedContent { status, .. } => {
                Some(*status)
            }
            AppError::Network(e) => e.status(),
            _ => None,
        }
    }

    /// Whether the failure happened below HTTP, before any response was received
    pub fn is_transport(&self) -> bool {
        matches!(self, AppError::Network(_))
    }

    /// Whether the failure was a request timeout
    pub fn is_timeout(&self) -> bool {
        matches!(self, AppError::Network(e) if e.is_timeout())
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Http { status, body } => {
                if body.is_empty() {
                    write!(f, "http error {status}")
                } else {
                    write!(f, "http error {status}: {body}")
                }
            }
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::UnexpectedContent {
                status,
                content_type,
            } => write!(
                f,
                "unexpected content type '{content_type}' (status {status})"
            ),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Json(e) => Some(e),
            _ => None,
        }
    }
}

/// Builder errors (an unparseable URL, for instance) never reach the network
impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() {
            AppError::InvalidInput(format!("invalid request: {err}"))
        } else {
            AppError::Network(err)
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Json(err)
    }
}

impl From<reqwest::header::InvalidHeaderValue> for AppError {
    fn from(err: reqwest::header::InvalidHeaderValue) -> Self {
        AppError::InvalidInput(format!("invalid header value: {err}"))
    }
}
