// Main entry point - Dependency injection and server setup
mod domain;
mod application;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;

use crate::application::grid_service::GridService;
use crate::infrastructure::config::load_service_config;
use crate::infrastructure::file_repository::FileSensorRepository;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::api_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let config = load_service_config()?;

    // Create repository (infrastructure layer)
    let repository = Arc::new(FileSensorRepository::new(
        config.data.dir.clone(),
        config.data.sensor_count,
    ));

    // Build the grid once at startup (application layer); the service is
    // read-only for the rest of the process lifetime
    let grid_service = GridService::from_repository(repository).await?;

    // Create application state
    let state = Arc::new(AppState { grid_service });

    // Build router (presentation layer)
    let router = api_router(state);

    // Start server
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .context("invalid server address")?;
    tracing::info!("starting agrigrid service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
