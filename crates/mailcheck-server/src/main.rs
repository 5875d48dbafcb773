//! MailCheck - domain email-authentication checker entry point

use anyhow::{Context, Result};
use mailcheck_common::config::{Config, LoggingConfig};
use mailcheck_core::SystemResolver;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable naming an explicit configuration file
const CONFIG_PATH_ENV: &str = "MAILCHECK_CONFIG";

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config_path = std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from);
    let config = Config::load(config_path.as_deref())?;
    config.validate()?;

    // Initialize logging
    init_logging(&config.logging);

    info!("Starting MailCheck server...");

    // Initialize resolver and handler state
    let resolver = Arc::new(SystemResolver::from_config(&config.dns));
    let state = mailcheck_api::AppState::new(resolver);
    let app = mailcheck_api::create_router(state, &config)?;

    // Start API server
    let addr = config.server.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind API server on {}", addr))?;
    info!(
        "Server is running on port {} (check endpoint: POST {})",
        config.server.port, config.server.check_path
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("API server error")?;

    info!("MailCheck server shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

fn init_logging(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    let registry = tracing_subscriber::registry().with(filter);

    if config.format == "json" {
        registry
            .with(fmt::layer().json().with_target(true).with_level(true))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_level(true))
            .init();
    }
}
