use buyback_client::application::client::Client;
use buyback_client::application::config::Config;
use buyback_client::application::smoke::{INVALID_TOKEN, SmokeSuite};
use buyback_client::utils::setup_logger;
use std::process::ExitCode;
use tracing::{error, info};

/// Runs the smoke checks against the configured buyback server
///
/// Exits with a non-zero status when any check fails.
///
/// Run with: cargo run --bin smoke_check
#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    setup_logger();

    let config = Config::new();
    let client = Client::new(config.clone())?;
    let invalid_client = Client::new(config.with_credentials(INVALID_TOKEN))?;

    let report = SmokeSuite::new(client, invalid_client).run().await;
    println!("{report}");

    if report.passed() {
        info!("All smoke checks passed");
        Ok(ExitCode::SUCCESS)
    } else {
        error!("{} smoke check(s) failed", report.failures().len());
        Ok(ExitCode::FAILURE)
    }
}
