//! HTTP server initialization and runtime setup.
//!
//! Seeds the alias table, wires the services, and runs the Axum server.

use crate::application::services::{AliasService, StatsService};
use crate::config::Config;
use crate::infrastructure::persistence::MemoryAliasRepository;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - The in-memory alias table, pre-populated with the example records
/// - Alias and stats services sharing that table
/// - Axum HTTP server with graceful shutdown on Ctrl-C
///
/// The table lives for the process lifetime only; nothing is persisted
/// across restarts.
///
/// # Errors
///
/// Returns an error if the server bind fails or a runtime error occurs.
pub async fn run(config: Config) -> Result<()> {
    let repository: Arc<MemoryAliasRepository> =
        Arc::new(MemoryAliasRepository::with_seed_records());
    tracing::info!("Alias table seeded with example records");

    let alias_service = Arc::new(AliasService::new(repository.clone()));
    let stats_service = Arc::new(StatsService::new(repository));

    let state = AppState::new(alias_service, stats_service, config.default_host);

    let app = app_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!("Listening on http://{}", config.listen_addr);

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to install Ctrl-C handler: {e}");
        return;
    }
    tracing::info!("Shutdown signal received");
}
