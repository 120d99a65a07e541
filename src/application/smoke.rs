/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/

//! Smoke checks for a buyback API deployment
//!
//! Each check issues one or two requests through an [`OrderService`] and
//! compares the status code and content type with what a healthy server
//! returns for a valid token. The suite never panics: a transport error is
//! just another failed check.
//!
//! # Example
//! ```ignore
//! let client = Client::new(config.clone())?;
//! let invalid = Client::new(config.with_credentials("invalid_token_12345"))?;
//! let report = SmokeSuite::new(client, invalid).run().await;
//! println!("{report}");
//! ```

use crate::application::interfaces::order::OrderService;
use crate::error::AppError;
use crate::model::responses::ApiResponse;
use reqwest::StatusCode;
use serde_json::Value;
use std::fmt;
use tracing::{error, info};

/// Order id that no server should know about
pub const UNKNOWN_ORDER_ID: &str = "invalid-order-id-12345";
/// Token used for the deliberately unauthenticated client
pub const INVALID_TOKEN: &str = "invalid_token_12345";
/// Page size requested by [`SmokeCheck::OrdersWithLimit`]
pub const SMOKE_PAGE_LIMIT: u32 = 10;

/// One smoke check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SmokeCheck {
    /// First page of orders is a non-empty JSON object
    OrdersPage1,
    /// First page with an explicit limit is a JSON object
    OrdersWithLimit,
    /// Unknown order id answers 404
    OrderNotFound,
    /// Empty order id answers 200, 400 or 404
    OrderEmptyId,
    /// Invalid token is refused while the valid one is accepted
    AuthenticationRequired,
    /// Successful listing announces a JSON content type
    ContentTypeJson,
    /// Endpoint is reachable and usable with the configured token
    EndpointAvailability,
}

impl SmokeCheck {
    /// Every check, in execution order
    pub const ALL: [SmokeCheck; 7] = [
        SmokeCheck::OrdersPage1,
        SmokeCheck::OrdersWithLimit,
        SmokeCheck::OrderNotFound,
        SmokeCheck::OrderEmptyId,
        SmokeCheck::AuthenticationRequired,
        SmokeCheck::ContentTypeJson,
        SmokeCheck::EndpointAvailability,
    ];

    /// Stable identifier of the check
    pub fn name(&self) -> &'static str {
        match self {
            SmokeCheck::OrdersPage1 => "orders_page_1",
            SmokeCheck::OrdersWithLimit => "orders_with_limit",
            SmokeCheck::OrderNotFound => "order_not_found",
            SmokeCheck::OrderEmptyId => "order_empty_id",
            SmokeCheck::AuthenticationRequired => "authentication_required",
            SmokeCheck::ContentTypeJson => "content_type_json",
            SmokeCheck::EndpointAvailability => "endpoint_availability",
        }
    }
}

impl fmt::Display for SmokeCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of a single check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    /// Check that ran
    pub check: SmokeCheck,
    /// `Err` holds the diagnostic message
    pub result: Result<(), String>,
}

impl CheckOutcome {
    /// Whether the check passed
    pub fn passed(&self) -> bool {
        self.result.is_ok()
    }

    /// Diagnostic message of a failed check
    pub fn failure(&self) -> Option<&str> {
        self.result.as_ref().err().map(String::as_str)
    }
}

/// Outcomes of a suite run, in execution order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SmokeReport {
    /// One entry per executed check
    pub outcomes: Vec<CheckOutcome>,
}

impl SmokeReport {
    /// Whether every check passed
    pub fn passed(&self) -> bool {
        self.outcomes.iter().all(CheckOutcome::passed)
    }

    /// Failed checks only
    pub fn failures(&self) -> Vec<&CheckOutcome> {
        self.outcomes.iter().filter(|o| !o.passed()).collect()
    }

    /// Outcome of a given check, if it ran
    pub fn outcome(&self, check: SmokeCheck) -> Option<&CheckOutcome> {
        self.outcomes.iter().find(|o| o.check == check)
    }
}

impl fmt::Display for SmokeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for outcome in &self.outcomes {
            match &outcome.result {
                Ok(()) => writeln!(f, "PASS {}", outcome.check)?,
                Err(msg) => writeln!(f, "FAIL {}: {}", outcome.check, msg)?,
            }
        }
        let failed = self.failures().len();
        write!(
            f,
            "{} passed, {} failed",
            self.outcomes.len() - failed,
            failed
        )
    }
}

type CheckResult = Result<(), String>;

/// Runs the smoke checks against a pair of clients
///
/// `client` carries the credentials under test, `invalid_client` the same
/// server with a token that must be rejected.
pub struct SmokeSuite<S> {
    client: S,
    invalid_client: S,
}

impl<S: OrderService> SmokeSuite<S> {
    /// Creates a suite
    pub fn new(client: S, invalid_client: S) -> Self {
        Self {
            client,
            invalid_client,
        }
    }

    /// Runs every check in [`SmokeCheck::ALL`] order
    pub async fn run(&self) -> SmokeReport {
        let mut outcomes = Vec::with_capacity(SmokeCheck::ALL.len());
        for check in SmokeCheck::ALL {
            outcomes.push(self.run_check(check).await);
        }
        SmokeReport { outcomes }
    }

    /// Runs a single check
    pub async fn run_check(&self, check: SmokeCheck) -> CheckOutcome {
        let result = match check {
            SmokeCheck::OrdersPage1 => self.orders_page_1().await,
            SmokeCheck::OrdersWithLimit => self.orders_with_limit().await,
            SmokeCheck::OrderNotFound => self.order_not_found().await,
            SmokeCheck::OrderEmptyId => self.order_empty_id().await,
            SmokeCheck::AuthenticationRequired => self.authentication_required().await,
            SmokeCheck::ContentTypeJson => self.content_type_json().await,
            SmokeCheck::EndpointAvailability => self.endpoint_availability().await,
        };
        match &result {
            Ok(()) => info!("{check}: passed"),
            Err(msg) => error!("{check}: {msg}"),
        }
        CheckOutcome { check, result }
    }

    async fn orders_page_1(&self) -> CheckResult {
        let response = self.client.list_orders_raw(1, None).await.map_err(request_failed)?;
        expect_status(&response, &[StatusCode::OK])?;
        let data = expect_json_object(&response)?;
        if data.is_empty() {
            return Err("Response should contain data".to_string());
        }
        Ok(())
    }

    async fn orders_with_limit(&self) -> CheckResult {
        let response = self
            .client
            .list_orders_raw(1, Some(SMOKE_PAGE_LIMIT))
            .await
            .map_err(request_failed)?;
        expect_status(&response, &[StatusCode::OK])?;
        expect_json_object(&response).map(|_| ())
    }

    async fn order_not_found(&self) -> CheckResult {
        let response = self
            .client
            .get_order_raw(UNKNOWN_ORDER_ID)
            .await
            .map_err(request_failed)?;
        if response.status() != StatusCode::NOT_FOUND {
            return Err(format!(
                "Failed with {}. Expected 404 for non-existent order.",
                response.status_code()
            ));
        }
        Ok(())
    }

    async fn order_empty_id(&self) -> CheckResult {
        let response = self.client.get_order_raw("").await.map_err(request_failed)?;
        match response.status() {
            StatusCode::OK | StatusCode::BAD_REQUEST | StatusCode::NOT_FOUND => Ok(()),
            other => Err(format!(
                "Failed with {}. Expected 200, 400, or 404 for invalid order ID format.",
                other.as_u16()
            )),
        }
    }

    async fn authentication_required(&self) -> CheckResult {
        let response = self
            .invalid_client
            .list_orders_raw(1, None)
            .await
            .map_err(request_failed)?;
        match response.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {}
            other => {
                return Err(format!(
                    "Failed with {}. Expected 401 or 403 for invalid authentication token.",
                    other.as_u16()
                ));
            }
        }

        let valid = self.client.list_orders_raw(1, None).await.map_err(request_failed)?;
        if valid.status() != StatusCode::OK {
            return Err(format!(
                "Failed with {0}. Valid token should return 200, not {0}.",
                valid.status_code()
            ));
        }
        Ok(())
    }

    async fn content_type_json(&self) -> CheckResult {
        let response = self.client.list_orders_raw(1, None).await.map_err(request_failed)?;
        if response.status() != StatusCode::OK {
            return Ok(());
        }
        let content_type = response.content_type().to_ascii_lowercase();
        if !content_type.contains("application/json") {
            return Err(format!(
                "Failed: Expected JSON content type, got '{}' (status {})",
                content_type,
                response.status_code()
            ));
        }
        Ok(())
    }

    async fn endpoint_availability(&self) -> CheckResult {
        let response = self.client.list_orders_raw(1, None).await.map_err(request_failed)?;
        match response.status() {
            StatusCode::INTERNAL_SERVER_ERROR => Err(
                "Failed with 500: Internal Server Error. Back Market API may be experiencing issues."
                    .to_string(),
            ),
            StatusCode::SERVICE_UNAVAILABLE => Err(
                "Failed with 503: Service Unavailable. Back Market API may be down for maintenance."
                    .to_string(),
            ),
            status if status.is_server_error() => Err(format!(
                "Failed with {}: Server error. API endpoint may be unavailable.",
                status.as_u16()
            )),
            StatusCode::UNAUTHORIZED => {
                Err("Failed with 401: Unauthorized. Check authentication token.".to_string())
            }
            StatusCode::FORBIDDEN => Err(
                "Failed with 403: Forbidden. Token may not have required permissions.".to_string(),
            ),
            StatusCode::NOT_FOUND => {
                Err("Failed with 404: Not Found. Endpoint path may be incorrect.".to_string())
            }
            _ => Ok(()),
        }
    }
}

fn request_failed(err: AppError) -> String {
    format!("Failed: request did not complete: {err}")
}

fn expect_status(response: &ApiResponse, expected: &[StatusCode]) -> CheckResult {
    if expected.contains(&response.status()) {
        return Ok(());
    }
    let expected = expected
        .iter()
        .map(|s| s.as_u16().to_string())
        .collect::<Vec<_>>()
        .join(" or ");
    Err(format!(
        "Failed with {}. Expected {}.",
        response.status_code(),
        expected
    ))
}

fn expect_json_object(response: &ApiResponse) -> Result<serde_json::Map<String, Value>, String> {
    if response.looks_like_html() {
        return Err(format!(
            "Failed: Received HTML instead of JSON (status {}). \
             This may indicate invalid endpoint path or authentication issue.",
            response.status_code()
        ));
    }
    match response.json::<Value>() {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err("Response should be a JSON object".to_string()),
        Err(e) => Err(format!("Failed: response body is not valid JSON: {e}")),
    }
}
