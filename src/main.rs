use anyhow::Context;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info};

use app_registry_backend::api;
use app_registry_backend::config::Config;
use app_registry_backend::storage::SqliteStorage;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_new(&config.logging.level)
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_ansi(config.logging.ansi_enabled())
        .init();

    info!("Starting server on {}", config.server_address());

    // Initialize SQLite storage
    let storage = SqliteStorage::new(&config.database.url)
        .await
        .map_err(|e| {
            error!("Failed to initialize database: {}", e);
            e
        })
        .with_context(|| format!("Failed to open database at {}", config.database.url))?;

    let app = api::create_router_with_state(Arc::new(storage));

    // Start server
    let addr: SocketAddr = config
        .server_address()
        .parse()
        .with_context(|| format!("Invalid server address {}", config.server_address()))?;
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
