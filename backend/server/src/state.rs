use std::sync::Arc;

use articles::{MemStorage, Storage};
use tracing::info;

use super::config::Config;

pub struct AppState {
    pub config: Config,
    pub storage: Arc<dyn Storage>,
}

impl AppState {
    pub fn new(config: Config) -> Arc<Self> {
        let storage = if config.seed_articles {
            info!("Seeding article store with sample articles");
            MemStorage::seeded()
        } else {
            MemStorage::new()
        };

        Self::with_storage(config, Arc::new(storage))
    }

    pub fn with_storage(config: Config, storage: Arc<dyn Storage>) -> Arc<Self> {
        Arc::new(Self { config, storage })
    }
}
