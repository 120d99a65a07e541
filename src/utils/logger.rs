/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/
use std::env;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

static INIT: Once = Once::new();

/// Maps a `LOGLEVEL` value to a tracing level, falling back to `INFO`
pub fn parse_log_level(value: &str) -> Level {
    match value.trim().to_uppercase().as_str() {
        "TRACE" => Level::TRACE,
        "DEBUG" => Level::DEBUG,
        "WARN" | "WARNING" => Level::WARN,
        "ERROR" => Level::ERROR,
        _ => Level::INFO,
    }
}

/// Installs a global `tracing` subscriber writing formatted events to stdout
///
/// The maximum level is read from the `LOGLEVEL` environment variable. Only the
/// first call has any effect, so tests and binaries can call it freely. If another
/// subscriber was already installed by the host application it is left in place.
pub fn setup_logger() {
    INIT.call_once(|| {
        let level = parse_log_level(&env::var("LOGLEVEL").unwrap_or_default());
        let subscriber = FmtSubscriber::builder()
            .with_max_level(level)
            .with_target(false)
            .finish();

        if tracing::subscriber::set_global_default(subscriber).is_err() {
            tracing::debug!("global subscriber already set, keeping it");
        }
    });
}
