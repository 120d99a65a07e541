/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/
use crate::application::config::Config;
use crate::constants::{ACCEPT_HEADER, AUTH_SCHEME, USER_AGENT};
use crate::error::AppError;
use crate::model::requests::ApiRequest;
use crate::model::responses::ApiResponse;
use reqwest::Client as HttpInternalClient;
use reqwest::Method;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error};

/// Authenticated HTTP transport for the buyback API
///
/// The `Accept` and `Authorization` headers are built once, at construction,
/// and attached to every request. The client holds no other state, so one
/// instance can be shared across tasks.
pub struct HttpClient {
    http_client: HttpInternalClient,
    config: Arc<Config>,
}

impl HttpClient {
    /// Creates a new transport for the given configuration
    ///
    /// # Returns
    /// * `Ok(HttpClient)` - Ready to send requests, no network access has happened yet
    /// * `Err(AppError::InvalidInput)` - If the token cannot be carried in an HTTP header
    pub fn new(config: Config) -> Result<Self, AppError> {
        let config = Arc::new(config);

        let mut auth_value =
            HeaderValue::from_str(&format!("{AUTH_SCHEME} {}", config.credentials.token))?;
        auth_value.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_HEADER));
        headers.insert(AUTHORIZATION, auth_value);

        let http_client = HttpInternalClient::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(config.rest_api.timeout())
            .build()
            .map_err(|e| AppError::InvalidInput(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http_client,
            config,
        })
    }

    /// Configuration this client was built with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Absolute URL of an endpoint path
    pub fn url(&self, path: &str) -> String {
        self.config.rest_api.endpoint(path)
    }

    /// Sends a request and returns the response whatever its status
    ///
    /// Only transport failures are reported as errors.
    pub async fn execute(&self, request: &ApiRequest) -> Result<ApiResponse, AppError> {
        let url = self.url(&request.path);
        make_http_request(
            &self.http_client,
            request.method.clone(),
            &url,
            &request.query,
            request.body.as_ref(),
        )
        .await
    }

    /// Sends a request and fails with [`AppError::Http`] on a 4xx/5xx status
    pub async fn execute_checked(&self, request: &ApiRequest) -> Result<ApiResponse, AppError> {
        let response = self.execute(request).await?;
        if response.is_error() {
            error!(
                "Request {} {} failed with status {}: {}",
                request.method,
                request.path,
                response.status(),
                response.text()
            );
        }
        response.error_for_status()
    }
}

/// Makes exactly one HTTP request and reads the whole response
///
/// There is no retry: a transport failure or a timeout fails the call at once.
/// Headers common to every call are expected to be set on `client` already.
///
/// # Arguments
///
/// * `client` - The HTTP client to use for the request
/// * `method` - HTTP method
/// * `url` - Full URL to request
/// * `query` - Query parameters, appended in order
/// * `body` - Optional JSON body
///
/// # Returns
///
/// * `Ok(ApiResponse)` - Any HTTP response, error statuses included
/// * `Err(AppError::Network)` - If no response could be obtained
/// * `Err(AppError::InvalidInput)` - If the request could not be built, e.g. a malformed URL
pub async fn make_http_request(
    client: &HttpInternalClient,
    method: Method,
    url: &str,
    query: &[(String, String)],
    body: Option<&Value>,
) -> Result<ApiResponse, AppError> {
    debug!("{} {}", method, url);

    let mut request = client.request(method, url);

    if !query.is_empty() {
        request = request.query(query);
    }

    if let Some(b) = body {
        request = request.json(b);
    }

    let response = request.send().await?;
    debug!("Response status: {}", response.status());

    ApiResponse::from_reqwest(response).await
}
