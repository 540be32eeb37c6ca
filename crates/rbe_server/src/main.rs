use axum::{Router, routing::get};
use clap::Parser;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

mod config;
mod counter;
mod error;
mod handlers;
mod logging;
mod models;
mod routes;
mod validation;

use config::ServerConfig;
use counter::{FileCounter, MemoryCounter};
use handlers::AppState;
use routes::{scenario_routes, visitor_routes};

fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { "RBE Sandbox API Server" }))
        .merge(scenario_routes())
        .merge(visitor_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
    }
    tracing::info!("Shutting down");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::parse();
    logging::init_logging(&config.log_level)?;

    let state = if config.ephemeral {
        tracing::info!("Using in-memory visit counter");
        AppState::new(MemoryCounter::new(0))
    } else {
        let counter = FileCounter::new(config.counter_file.clone());
        tracing::info!(path = %counter.path().display(), "Using file visit counter");
        AppState::new(counter)
    };

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
