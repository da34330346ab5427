use std::process::ExitCode;

use severance_engine::api::{AppState, create_router};
use severance_engine::config::ConfigLoader;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG_DIR: &str = "config/clt";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config_dir =
        std::env::var("SEVERANCE_CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let bind_addr =
        std::env::var("SEVERANCE_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

    let config = match ConfigLoader::load(&config_dir) {
        Ok(config) => config,
        Err(err) => {
            error!(config_dir = %config_dir, error = %err, "Failed to load configuration");
            return ExitCode::FAILURE;
        }
    };
    info!(
        regime = %config.regime().code,
        version = %config.regime().version,
        "Configuration loaded"
    );

    let listener = match tokio::net::TcpListener::bind(&bind_addr).await {
        Ok(listener) => listener,
        Err(err) => {
            error!(bind_addr = %bind_addr, error = %err, "Failed to bind listener");
            return ExitCode::FAILURE;
        }
    };
    info!(bind_addr = %bind_addr, "Server starting...");

    let router = create_router(AppState::new(config));
    if let Err(err) = axum::serve(listener, router).await {
        error!(error = %err, "Server error");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
