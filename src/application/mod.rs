/// Buyback API client
pub mod client;
/// Application configuration module
pub mod config;
/// Service traits implemented by the client
pub mod interfaces;
/// Smoke checks run against a live deployment
pub mod smoke;
