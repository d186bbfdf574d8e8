use std::sync::Arc;
use std::time::Instant;

use lexa_config::ServerConfig;
use lexa_core::{CatalogStore, QueryTranslator};

/// Shared state handed to every handler.
pub struct AppState {
    pub catalog: Arc<dyn CatalogStore>,
    pub translator: QueryTranslator,
    pub config: ServerConfig,
    started_at: Instant,
}

impl AppState {
    #[must_use]
    pub fn new(catalog: Arc<dyn CatalogStore>, config: ServerConfig) -> Self {
        Self {
            catalog,
            translator: QueryTranslator::new(),
            config,
            started_at: Instant::now(),
        }
    }

    #[must_use]
    pub fn uptime_secs(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
