/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/

//! # Buyback Client Prelude
//!
//! Commonly used types and traits in one import.
//!
//! ```ignore
//! use buyback_client::prelude::*;
//!
//! let client = Client::new(Config::new())?;
//! let response = client.list_orders(DEFAULT_PAGE, None).await?;
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the buyback API client
pub use crate::application::config::{Config, Credentials, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// CLIENT AND SERVICES
// ============================================================================

/// Buyback API client
pub use crate::application::client::Client;

/// Order service trait
pub use crate::application::interfaces::order::OrderService;

/// Smoke suite
pub use crate::application::smoke::{CheckOutcome, SmokeCheck, SmokeReport, SmokeSuite};

// ============================================================================
// TRANSPORT AND MODELS
// ============================================================================

/// HTTP transport
pub use crate::model::http::HttpClient;

/// Request descriptors
pub use crate::model::requests::{ApiRequest, ListOrdersRequest, UpdateOrderStatusRequest};

/// Raw responses
pub use crate::model::responses::ApiResponse;

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use async_trait::async_trait;
pub use reqwest::{Method, StatusCode};
pub use serde::{Deserialize, Serialize};
pub use std::sync::Arc;
pub use tokio;
pub use tracing::{debug, error, info, warn};
