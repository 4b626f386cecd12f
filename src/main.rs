//! StaffDesk server: HR directory REST API.
//!
//! Loads configuration, installs logging, and serves the API until Ctrl+C.

use tracing_subscriber::{EnvFilter, fmt};

use staffdesk_core::config::AppConfig;
use staffdesk_core::error::AppError;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting StaffDesk");

    if let Err(e) = staffdesk_api::run_server(config).await {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }
}

/// Load configuration from `STAFFDESK_CONFIG` (or the default file) and the
/// environment, refusing to start without a usable signing secret.
fn load_configuration() -> Result<AppConfig, AppError> {
    let config_path =
        std::env::var("STAFFDESK_CONFIG").unwrap_or_else(|_| "config/default.toml".to_string());

    let config = AppConfig::load(&config_path)?;
    config.validate()?;
    Ok(config)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}
