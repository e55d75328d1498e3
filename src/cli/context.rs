use std::sync::Arc;

use anyhow::{Context, Result};

use crate::catalog::{Catalog, CatalogCache};
use crate::config::DashboardConfig;

/// Top-level application state: settings plus the catalog cache.
#[derive(Debug)]
pub struct AppContext {
    pub config: DashboardConfig,
    cache: CatalogCache,
}

impl AppContext {
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            config,
            cache: CatalogCache::new(),
        }
    }

    /// The current catalog; parsed again only when the source file changed.
    pub fn catalog(&mut self) -> Result<Arc<Catalog>> {
        let path = self.config.data_path.clone();
        self.cache
            .get(&path)
            .with_context(|| format!("could not load catalog {}", path.display()))
    }

    pub fn invalidate(&mut self) {
        self.cache.invalidate();
    }

    pub fn load_count(&self) -> usize {
        self.cache.load_count()
    }
}
