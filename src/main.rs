// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use crate::application::dataset::Dataset;
use crate::infrastructure::config::load_dashboard_config;
use crate::infrastructure::in_memory_repository::InMemorySalesRepository;
use crate::presentation::app_state::AppState;
use crate::presentation::router::build_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let config = load_dashboard_config()?;

    // Generate the dataset once; it is shared read-only from here on
    let dataset = Arc::new(Dataset::generate(&config.dataset)?);
    tracing::info!(
        "Generated {} rows from {:?} to {:?}",
        dataset.len(),
        dataset.first_date(),
        dataset.last_date()
    );

    // Create repository (infrastructure layer)
    let repository = Arc::new(InMemorySalesRepository::new(dataset));

    // Create application state (layout is built here, once)
    let state = Arc::new(AppState::build(repository, config.dashboard.title).await);

    // Build router (presentation layer)
    let router = build_router(state);

    // Start server
    let addr = config.server.address();
    let listener = tokio::net::TcpListener::bind(&addr).await.map_err(|e| {
        tracing::error!("Failed to bind {}: {}", addr, e);
        e
    })?;
    tracing::info!("Starting sales-dashboard on http://{}", listener.local_addr()?);

    axum::serve(listener, router).await?;

    Ok(())
}
