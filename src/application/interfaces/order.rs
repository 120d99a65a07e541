use crate::error::AppError;
use crate::model::responses::ApiResponse;

use async_trait::async_trait;

#[async_trait]
/// Service for reading and updating buyback orders with the Back Market API
///
/// Every operation performs exactly one request. The plain methods fail with
/// [`AppError::Http`] on a 4xx/5xx status. The `*_raw` methods return the
/// response whatever its status and only fail when no response was received.
pub trait OrderService: Send + Sync {
    /// Lists orders on `page`, `limit` results per page when given and non-zero
    async fn list_orders(&self, page: u32, limit: Option<u32>) -> Result<ApiResponse, AppError>;

    /// Same as [`OrderService::list_orders`] without failing on error statuses
    async fn list_orders_raw(
        &self,
        page: u32,
        limit: Option<u32>,
    ) -> Result<ApiResponse, AppError>;

    /// Gets a single order. The id is forwarded as-is, even when empty.
    async fn get_order(&self, order_id: &str) -> Result<ApiResponse, AppError>;

    /// Same as [`OrderService::get_order`] without failing on error statuses
    async fn get_order_raw(&self, order_id: &str) -> Result<ApiResponse, AppError>;

    /// Sets the status of an order, sending `{"status": <status>}`
    async fn update_order_status(
        &self,
        order_id: &str,
        status: &str,
    ) -> Result<ApiResponse, AppError>;

    /// Same as [`OrderService::update_order_status`] without failing on error statuses
    async fn update_order_status_raw(
        &self,
        order_id: &str,
        status: &str,
    ) -> Result<ApiResponse, AppError>;
}
