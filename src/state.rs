use std::sync::Arc;

use crate::config::AppConfig;
use crate::database::PlanetStore;
use crate::storage::PhotoStore;

/// Shared application state available to all handlers via `State<AppState>`.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn PlanetStore>,
    pub photos: Arc<dyn PhotoStore>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(
        store: Arc<dyn PlanetStore>,
        photos: Arc<dyn PhotoStore>,
        config: AppConfig,
    ) -> Self {
        Self {
            store,
            photos,
            config: Arc::new(config),
        }
    }
}
