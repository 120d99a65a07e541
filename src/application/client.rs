/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/

//! Client for the Back Market buyback API
//!
//! # Example
//! ```ignore
//! use buyback_client::application::client::Client;
//! use buyback_client::application::config::Config;
//! use buyback_client::application::interfaces::order::OrderService;
//!
//! let client = Client::new(Config::new())?;
//! let response = client.get_order("abc123").await?;
//! ```

use crate::application::config::Config;
use crate::application::interfaces::order::OrderService;
use crate::error::AppError;
use crate::model::http::HttpClient;
use crate::model::requests::{
    ApiRequest, ListOrdersRequest, UpdateOrderStatusRequest, order_path,
};
use crate::model::responses::ApiResponse;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

/// Buyback API client
///
/// Cheap to clone: clones share the same connection pool and configuration.
#[derive(Clone)]
pub struct Client {
    http_client: Arc<HttpClient>,
}

impl Client {
    /// Creates a new client
    ///
    /// No request is sent. A bad token is only detected by the server's answer.
    ///
    /// # Returns
    /// * `Ok(Client)` - Ready to use
    /// * `Err(AppError::InvalidInput)` - If the token cannot be carried in an HTTP header
    pub fn new(config: Config) -> Result<Self, AppError> {
        let http_client = Arc::new(HttpClient::new(config)?);
        Ok(Self { http_client })
    }

    /// Creates a client for the default preproduction server with an explicit token
    pub fn with_token(token: impl Into<String>) -> Result<Self, AppError> {
        Self::new(Config::with_token(token))
    }

    /// Configuration this client was built with
    pub fn config(&self) -> &Config {
        self.http_client.config()
    }

    /// Underlying transport, for requests not covered by [`OrderService`]
    pub fn http_client(&self) -> &HttpClient {
        &self.http_client
    }
}

#[async_trait]
impl OrderService for Client {
    async fn list_orders(&self, page: u32, limit: Option<u32>) -> Result<ApiResponse, AppError> {
        let request = ApiRequest::from(ListOrdersRequest::new(page, limit));
        info!("Listing orders: page {page}, limit {limit:?}");
        self.http_client.execute_checked(&request).await
    }

    async fn list_orders_raw(
        &self,
        page: u32,
        limit: Option<u32>,
    ) -> Result<ApiResponse, AppError> {
        let request = ApiRequest::from(ListOrdersRequest::new(page, limit));
        debug!("Listing orders (raw): page {page}, limit {limit:?}");
        self.http_client.execute(&request).await
    }

    async fn get_order(&self, order_id: &str) -> Result<ApiResponse, AppError> {
        info!("Getting order: '{order_id}'");
        self.http_client
            .execute_checked(&ApiRequest::get(order_path(order_id)))
            .await
    }

    async fn get_order_raw(&self, order_id: &str) -> Result<ApiResponse, AppError> {
        debug!("Getting order (raw): '{order_id}'");
        self.http_client
            .execute(&ApiRequest::get(order_path(order_id)))
            .await
    }

    async fn update_order_status(
        &self,
        order_id: &str,
        status: &str,
    ) -> Result<ApiResponse, AppError> {
        let request = UpdateOrderStatusRequest::new(status).into_request(order_id)?;
        info!("Updating order '{order_id}' to status '{status}'");
        self.http_client.execute_checked(&request).await
    }

    async fn update_order_status_raw(
        &self,
        order_id: &str,
        status: &str,
    ) -> Result<ApiResponse, AppError> {
        let request = UpdateOrderStatusRequest::new(status).into_request(order_id)?;
        debug!("Updating order '{order_id}' to status '{status}' (raw)");
        self.http_client.execute(&request).await
    }
}
