use buyback_client::application::client::Client;
use buyback_client::application::config::Config;
use buyback_client::application::interfaces::order::OrderService;
use buyback_client::utils::setup_logger;
use serde_json::Value;
use tracing::{info, warn};

/// Lists the first page of buyback orders and fetches the first one by id
///
/// Configure with BUYBACK_AUTH_TOKEN (and optionally BUYBACK_BASE_URL).
///
/// Run with: cargo run --bin simple_client_example
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    let config = Config::new();
    info!("Using {}", config.rest_api.endpoint("/orders"));
    let client = Client::new(config)?;

    let response = client.list_orders(1, Some(10)).await?;
    if response.looks_like_html() {
        warn!("Received HTML instead of JSON, check the endpoint path and token");
        return Ok(());
    }

    let orders: Value = response.json()?;
    info!("Orders: {:#}", orders);

    let first_id = orders["results"].get(0).map(|order| match &order["id"] {
        Value::String(id) => id.clone(),
        other => other.to_string(),
    });

    match first_id {
        Some(id) => {
            let order: Value = client.get_order(&id).await?.json()?;
            info!("Order {}: {:#}", id, order);
        }
        None => info!("No orders on the first page"),
    }

    Ok(())
}
