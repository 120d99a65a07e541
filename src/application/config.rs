/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/
use crate::constants::{BUYBACK_BASE_PATH, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::utils::config::{get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize, Serializer};
use std::time::Duration;
use tracing::{debug, error};

/// Placeholder used when `BUYBACK_AUTH_TOKEN` is not set
const DEFAULT_TOKEN: &str = "default_auth_token";

fn redact<S: Serializer>(_token: &str, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str("***")
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Authentication credentials for the buyback API
pub struct Credentials {
    /// Base64 token sent as `Authorization: Basic <token>`, forwarded verbatim
    #[serde(serialize_with = "redact")]
    pub token: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Origin of the server, e.g. `https://preprod.backmarket.fr`
    pub base_url: String,
    /// Versioned sub-path prepended to every endpoint, e.g. `/ws/buyback/v1`
    pub api_path: String,
    /// Timeout in seconds for a single request round trip
    pub timeout: u64,
}

impl RestApiConfig {
    /// Builds the absolute URL of an endpoint
    ///
    /// `path` is appended as given after the sub-path, so an empty order id in
    /// `/orders/` stays an empty segment.
    pub fn endpoint(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let api_path = self.api_path.trim_matches('/');
        let path = path.trim_start_matches('/');
        if api_path.is_empty() {
            format!("{base}/{path}")
        } else {
            format!("{base}/{api_path}/{path}")
        }
    }

    /// Timeout as a [`Duration`]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

impl Default for RestApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_path: BUYBACK_BASE_PATH.to_string(),
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Main configuration for the buyback API client
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a configuration from the environment
    ///
    /// Loads an optional `.env` file first, then reads `BUYBACK_AUTH_TOKEN`,
    /// `BUYBACK_BASE_URL`, `BUYBACK_API_PATH` and `BUYBACK_REST_TIMEOUT`.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let token = get_env_or_none::<String>("BUYBACK_AUTH_TOKEN").unwrap_or_else(|| {
            error!("BUYBACK_AUTH_TOKEN not found in environment variables or .env file");
            String::from(DEFAULT_TOKEN)
        });

        Config {
            credentials: Credentials { token },
            rest_api: RestApiConfig {
                base_url: get_env_or_default("BUYBACK_BASE_URL", DEFAULT_BASE_URL.to_string()),
                api_path: get_env_or_default("BUYBACK_API_PATH", BUYBACK_BASE_PATH.to_string()),
                timeout: get_env_or_default("BUYBACK_REST_TIMEOUT", DEFAULT_TIMEOUT_SECS),
            },
        }
    }

    /// Creates the default preproduction configuration for an explicit token
    ///
    /// The environment is not consulted.
    pub fn with_token(token: impl Into<String>) -> Self {
        Config {
            credentials: Credentials {
                token: token.into(),
            },
            rest_api: RestApiConfig::default(),
        }
    }

    /// Returns a copy of this configuration pointing at another origin
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.rest_api.base_url = base_url.into();
        self
    }

    /// Returns a copy of this configuration with another per-request timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.rest_api.timeout = timeout_secs;
        self
    }

    /// Returns a copy of this configuration using a different credential token
    ///
    /// Handy for building the deliberately invalid client of the smoke suite.
    #[must_use]
    pub fn with_credentials(mut self, token: impl Into<String>) -> Self {
        self.credentials.token = token.into();
        self
    }
}
