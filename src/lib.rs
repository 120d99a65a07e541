//! # buyback-client
//!
//! Client and smoke-test harness for the Back Market buyback REST API.
//!
//! The crate wraps the three buyback order endpoints (`GET /orders`,
//! `GET /orders/{id}` and `PUT /orders/{id}/status`) behind a small async
//! client. It also ships the checks used to validate a set of credentials
//! against the preproduction server.
//!
//! ## Quick start
//!
//! ```ignore
//! use buyback_client::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     setup_logger();
//!     let client = Client::new(Config::new())?;
//!
//!     let response = client.list_orders(1, Some(10)).await?;
//!     let orders: serde_json::Value = response.json()?;
//!     info!("orders: {orders}");
//!     Ok(())
//! }
//! ```
//!
//! ## Raising and raw calls
//!
//! Every operation comes in two forms. `list_orders`, `get_order` and
//! `update_order_status` turn any 4xx/5xx answer into [`error::AppError::Http`].
//! Their `*_raw` counterparts hand back the response whatever its status, and
//! only fail on transport errors (DNS, TLS, connection refused, timeout).
//!
//! ## Configuration
//!
//! [`application::config::Config::new`] reads the following variables, after
//! loading an optional `.env` file:
//!
//! | Variable               | Default                          |
//! |------------------------|----------------------------------|
//! | `BUYBACK_AUTH_TOKEN`   | none, an error is logged         |
//! | `BUYBACK_BASE_URL`     | `https://preprod.backmarket.fr`  |
//! | `BUYBACK_API_PATH`     | `/ws/buyback/v1`                 |
//! | `BUYBACK_REST_TIMEOUT` | `30` (seconds)                   |
//! | `LOGLEVEL`             | `INFO`                           |

/// Application layer: configuration, client, service traits and the smoke suite
pub mod application;

/// Library-wide constants
pub mod constants;

/// Error types
pub mod error;

/// HTTP transport and request/response models
pub mod model;

/// Commonly used re-exports
pub mod prelude;

/// Utility functions
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
pub fn version() -> &'static str {
    VERSION
}
