//! Cambio API Server
//!
//! Main entry point for the Cambio backend service.

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cambio_api::{AppState, create_router};
use cambio_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cambio=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load().context("Failed to load configuration")?;

    // Build currency table and shared state
    let state = AppState::from_config(&config).context("Invalid converter configuration")?;
    info!(
        currencies = state.currencies.table().len(),
        default_from = %state.default_pair.0,
        default_to = %state.default_pair.1,
        display_decimals = state.currencies.display_decimals(),
        "Currency table loaded"
    );
    info!(
        min_length = state.passwords.min_length,
        max_length = state.passwords.max_length,
        "Password policy configured"
    );

    // Create router
    let app = create_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
