use std::sync::Arc;

use lexa_config::Config;
use lexa_core::{CatalogStore, InMemoryCatalog};
use lexa_server::AppState;
use tracing::info;

/// Input parameters for the Serve command strategy.
#[derive(Debug, Clone)]
pub struct ServeInput {
    pub config: Config,
    /// Overrides `server.host`
    pub host: Option<String>,
    /// Overrides `server.port`
    pub port: Option<u16>,
}

/// Strategy for running the HTTP API.
///
/// Builds an empty in-memory catalog and serves it until Ctrl-C. Nothing is
/// persisted across restarts.
#[derive(Debug, Clone, Copy)]
pub struct ServeStrategy;

impl super::CommandStrategy for ServeStrategy {
    type Input = ServeInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let mut server_config = input.config.server;
        if let Some(host) = input.host {
            server_config.host = host;
        }
        if let Some(port) = input.port {
            server_config.port = port;
        }

        info!("Starting lexa {}", env!("CARGO_PKG_VERSION"));
        let catalog: Arc<dyn CatalogStore> = Arc::new(InMemoryCatalog::new());
        let state = Arc::new(AppState::new(catalog, server_config));

        lexa_server::serve(state).await?;
        info!("Server stopped");
        Ok(())
    }
}
