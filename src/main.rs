//! Tablemate Engine - Backend API for a tabletop RPG companion
//!
//! The Engine is the backend server that:
//! - Manages accounts and character sheets in a JSON-file store
//! - Computes derived character statistics on demand
//! - Generates XP-budgeted encounters from a monster catalog

mod application;
mod domain;
mod infrastructure;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::infrastructure::config::AppConfig;
use crate::infrastructure::http;
use crate::infrastructure::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tablemate_engine=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Tablemate Engine");

    // Load configuration
    let config = AppConfig::from_env()?;
    tracing::info!("Configuration loaded");
    tracing::info!("  Accounts: {}", config.accounts_path.display());
    match &config.monster_api_url {
        Some(url) => tracing::info!("  Monster catalog: {}", url),
        None => tracing::info!(
            "  Monster catalog: {}",
            config.monster_data_path.display()
        ),
    }

    // Initialize application state
    let state = AppState::new(config).await?;
    let state = Arc::new(state);
    tracing::info!("Application state initialized");

    // Autosave worker (flushes dirty account state on an interval)
    let autosave_worker = {
        let store = state.account_store.clone();
        let interval_secs = state.config.autosave_interval_secs;
        tokio::spawn(async move {
            tracing::info!("Starting account autosave worker");
            loop {
                tokio::time::sleep(tokio::time::Duration::from_secs(interval_secs)).await;
                if let Err(e) = store.flush_if_dirty().await {
                    tracing::error!("Account autosave failed: {}", e);
                }
            }
        })
    };

    // Build the router
    let app = Router::new()
        .route("/health", get(health_check))
        // Merge REST API routes
        .merge(http::create_routes())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state.clone());

    // Start the server
    let addr = SocketAddr::from(([0, 0, 0, 0], state.config.server_port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    // Run server until shutdown signal (Ctrl+C)
    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received, stopping worker...");
            autosave_worker.abort();
        }
    }

    // Flush anything not yet autosaved
    if let Err(e) = state.account_store.flush_if_dirty().await {
        tracing::error!("Final account flush failed: {}", e);
    }
    tracing::info!("Tablemate Engine stopped");

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}
