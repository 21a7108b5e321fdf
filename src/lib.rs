pub mod error;
pub mod models;
pub mod modules;
pub mod proxy; // Proxy service module
mod utils;

use anyhow::Context;
use tracing::{info, warn};

pub use error::{AppError, AppResult};

/// Load configuration, start the proxy and serve until Ctrl-C
pub async fn run() -> anyhow::Result<()> {
    let config = modules::load_app_config().context("Failed to load configuration")?;

    // Keep the guard alive so buffered file logs are flushed on exit
    let _log_guard = modules::init_logger(config.log_dir.as_deref());

    match &config.proxy.api_key {
        Some(key) => info!("API key loaded ({} chars)", key.len()),
        None => warn!(
            "{} is not set; /api endpoints will answer 500",
            modules::config::ENV_API_KEY
        ),
    }
    if config.secret_key.is_default() {
        warn!(
            "{} is not set, using the development default",
            modules::config::ENV_SECRET_KEY
        );
    }

    let (server, handle) = proxy::AxumServer::start(&config.proxy)
        .await
        .map_err(AppError::Server)?;

    tokio::signal::ctrl_c()
        .await
        .context("Failed to listen for shutdown signal")?;
    info!("Shutdown signal received");

    server.stop();
    handle.await.context("Server task failed")?;
    Ok(())
}
