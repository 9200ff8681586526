mod assistant;
mod config;
mod errors;
mod llm_client;
mod models;
mod routes;
mod state;
mod storage;
mod sync;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;
use crate::storage::{seed, MemStorage, Storage};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on malformed values)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting JobNexus API v{}", env!("CARGO_PKG_VERSION"));

    // Volatile in-process store
    let storage = Arc::new(MemStorage::new());
    if config.seed_sample_data {
        seed::seed_sample_data(storage.as_ref()).await?;
    }
    if storage.get_user(config.demo_user_id).await.is_none() {
        tracing::warn!(
            "Demo user {} does not exist; /api/me will return 404",
            config.demo_user_id
        );
    }

    let state = AppState::from_config(config.clone(), storage)?;

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
