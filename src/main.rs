//! PhishSentry - URL Risk Analysis Service
//!
//! Accepts URLs, obtains a verdict from the remote ML prediction service,
//! fuses it with local lexical evidence, and returns a banded threat index.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                       PHISHSENTRY                         │
//! ├───────────────────────────────────────────────────────────┤
//! │  ┌─────────┐   ┌─────────┐   ┌────────┐   ┌────────────┐  │
//! │  │ Lexical │──▶│ Domain  │──▶│ Fusion │──▶│   Threat   │  │
//! │  │  Rules  │   │  Intel  │   │ Policy │   │   Index    │  │
//! │  └─────────┘   └────┬────┘   └────────┘   └────────────┘  │
//! │                     │                                     │
//! │                     ▼                                     │
//! │              ┌─────────────┐                              │
//! │              │  Prediction │  (remote ML service)         │
//! │              │   Service   │                              │
//! │              └─────────────┘                              │
//! └───────────────────────────────────────────────────────────┘
//! ```

mod config;
mod constants;
mod error;
mod handlers;
mod logic;

use anyhow::Context;
use axum::{routing::get, routing::post, Router};
use std::net::SocketAddr;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use logic::model::{ModelClient, ModelClientConfig};

pub use error::{AppError, AppResult};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "phishsentry_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    tracing::info!("{} starting...", constants::APP_NAME);
    tracing::info!("Environment: {}", config.environment);
    tracing::info!("Prediction service: {}", config.model_service_url);

    // Build the shared prediction service client
    let model = ModelClient::new(ModelClientConfig {
        base_url: config.model_service_url.clone(),
        timeout_seconds: config.model_timeout_seconds,
    })
    .context("Failed to create prediction service client")?;

    // Build application state
    let state = AppState {
        config: config.clone(),
        model,
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind server address")?;
    axum::serve(listener, app)
        .await
        .context("Server terminated")?;

    Ok(())
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: config::Config,
    pub model: ModelClient,
}

/// Create the main router with all routes
fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::check))
        .route("/api/v1/analyze", post(handlers::analyze::single))
        .route("/api/v1/analyze/batch", post(handlers::analyze::batch))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
