// Common helpers for the mocked unit tests

use buyback_client::application::client::Client;
use buyback_client::application::config::Config;

/// Token used by every mocked client
pub const TEST_TOKEN: &str = "dGVzdF91c2VyOnRlc3RfcGFzcw==";

/// Path of the orders collection on the mock server
pub const ORDERS_PATH: &str = "/ws/buyback/v1/orders";

/// Configuration pointing at a mock server
pub fn test_config(server_url: &str) -> Config {
    Config::with_token(TEST_TOKEN).with_base_url(server_url)
}

/// Client pointing at a mock server
pub fn test_client(server_url: &str) -> Client {
    Client::new(test_config(server_url)).expect("client should build")
}

/// Client pointing at a mock server with another token
pub fn test_client_with_token(server_url: &str, token: &str) -> Client {
    Client::new(test_config(server_url).with_credentials(token)).expect("client should build")
}
