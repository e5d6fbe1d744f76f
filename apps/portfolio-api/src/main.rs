use std::sync::Arc;
use std::time::Duration;

use axum_helpers::server::{create_production_app, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use database::mongodb::LazyMongo;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing
    init_tracing(&config.environment);

    // No connection is opened here: the first request that needs MongoDB
    // establishes the shared client, and concurrent requests await that
    // same attempt.
    info!(
        "MongoDB configured at {} (database: {}), connecting on first use",
        config.mongodb.url(),
        config.mongodb.database()
    );
    let mongo = Arc::new(LazyMongo::new(config.mongodb.clone()));

    let state = AppState { config, mongo };

    // Build router with API routes
    let api_routes = api::routes(&state);

    // Create a router with OpenAPI docs
    let router = axum_helpers::create_router::<openapi::ApiDoc>(api_routes).await?;

    // Merge health endpoints: /health (liveness) and /ready (readiness)
    let app = router
        .merge(health_router(state.config.app.clone()))
        .merge(api::health::router(state.clone()));

    info!("Starting Portfolio API with production-ready shutdown (30s timeout)");

    let AppState { config, mongo } = state;

    create_production_app(
        app,
        &config.server,
        Duration::from_secs(30),
        async move {
            info!("Shutting down: releasing MongoDB handle");
            // The client, if one was ever established, closes on drop
            drop(mongo);
            info!("MongoDB handle released");
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Portfolio API shutdown complete");
    Ok(())
}
