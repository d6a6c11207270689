//! Engagement engine API server
//!
//! Configuration comes from the environment (and a local .env file when
//! present); see `agora_common::AppConfig` for the recognized variables.

use agora_common::{try_init_telemetry, AppConfig, TelemetryConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            std::process::exit(2);
        }
    };

    if let Err(e) = try_init_telemetry(&TelemetryConfig::for_environment(config.app.env)) {
        eprintln!("Warning: {e}");
    }

    info!(
        name = %config.app.name,
        env = ?config.app.env,
        address = %config.api.address(),
        "Starting engagement API server"
    );

    if let Err(e) = agora_api::run(config).await {
        error!(error = %e, "Server exited with error");
        std::process::exit(1);
    }
}
