/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/

//! Request descriptors for the buyback endpoints.
//!
//! An [`ApiRequest`] only exists for the duration of one call. The typed
//! request structs build one for their endpoint.

use crate::constants::DEFAULT_PAGE;
use crate::error::AppError;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single HTTP request against the buyback API, relative to the API sub-path
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// HTTP method
    pub method: Method,
    /// Endpoint path below the API sub-path, e.g. `/orders/abc/status`
    pub path: String,
    /// Query parameters, in the order they are sent
    pub query: Vec<(String, String)>,
    /// Optional JSON body
    pub body: Option<Value>,
}

impl ApiRequest {
    /// Creates a request without query parameters or body
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    /// Creates a GET request
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// Creates a PUT request
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    /// Appends a query parameter
    #[must_use]
    pub fn with_query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    /// Sets the JSON body
    pub fn with_json<B: Serialize>(mut self, body: &B) -> Result<Self, AppError> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    /// Value of a query parameter, if present
    pub fn query_param(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Path of a single order. The id is inserted verbatim, an empty id included.
pub fn order_path(order_id: &str) -> String {
    format!("/orders/{order_id}")
}

/// Path of the status sub-resource of an order
pub fn order_status_path(order_id: &str) -> String {
    format!("/orders/{order_id}/status")
}

/// Parameters for `GET /orders`
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct ListOrdersRequest {
    /// Page number, always sent
    pub page: u32,
    /// Number of results per page. `None` and `Some(0)` are both left out of the query.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl ListOrdersRequest {
    /// Creates a request for `page` with the given optional `limit`
    pub fn new(page: u32, limit: Option<u32>) -> Self {
        Self { page, limit }
    }

    /// Limit that will actually be sent, zero counting as absent
    pub fn effective_limit(&self) -> Option<u32> {
        self.limit.filter(|&limit| limit > 0)
    }
}

impl Default for ListOrdersRequest {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE, None)
    }
}

impl From<ListOrdersRequest> for ApiRequest {
    fn from(params: ListOrdersRequest) -> Self {
        let request = ApiRequest::get("/orders").with_query("page", params.page);
        match params.effective_limit() {
            Some(limit) => request.with_query("limit", limit),
            None => request,
        }
    }
}

/// Body of `PUT /orders/{id}/status`
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct UpdateOrderStatusRequest {
    /// New status, passed through without interpretation
    pub status: String,
}

impl UpdateOrderStatusRequest {
    /// Creates the body for the given status
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
        }
    }

    /// Builds the full request for `order_id`
    pub fn into_request(self, order_id: &str) -> Result<ApiRequest, AppError> {
        ApiRequest::put(order_status_path(order_id)).with_json(&self)
    }
}
