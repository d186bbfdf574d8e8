#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

//! HTTP API for the string catalog.

pub mod dto;
pub mod error;
mod params;
mod routes;
mod state;

use std::sync::Arc;

use lexa_core::CatalogStore;
use tracing::info;

pub use error::{Result, ServerError};
pub use routes::build_router;
pub use state::AppState;

/// Bind to the configured address and serve until Ctrl-C.
pub async fn serve(state: Arc<AppState>) -> std::io::Result<()> {
    let addr = state.config.bind_addr();
    let router = build_router(Arc::clone(&state));
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(
        address = %addr,
        cors = state.config.cors_enabled,
        strings = state.catalog.len(),
        "String catalog listening"
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

/// Convenience for callers holding a bare catalog.
#[must_use]
pub fn router_for(catalog: Arc<dyn CatalogStore>, config: lexa_config::ServerConfig) -> axum::Router {
    build_router(Arc::new(AppState::new(catalog, config)))
}
