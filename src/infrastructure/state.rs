//! Shared application state

use std::sync::Arc;

use anyhow::Result;

use crate::application::ports::outbound::StoragePort;
use crate::application::services::{PersistenceGateway, SheetService};
use crate::infrastructure::config::{AppConfig, StorageBackend};
use crate::infrastructure::persistence::{InMemoryStore, JsonFileStore};

/// Everything a UI host needs: configuration and the loaded sheet
pub struct AppState {
    pub config: AppConfig,
    pub sheet_service: SheetService,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self> {
        let storage: Arc<dyn StoragePort> = match &config.storage {
            StorageBackend::File(path) => {
                tracing::info!("  Storage file: {}", path.display());
                Arc::new(JsonFileStore::open(path))
            }
            StorageBackend::Memory => {
                tracing::info!("  Storage: in-memory");
                Arc::new(InMemoryStore::new())
            }
        };

        let gateway = PersistenceGateway::new(storage, config.storage_keys());
        let sheet_service = SheetService::load(gateway);

        Ok(Self {
            config,
            sheet_service,
        })
    }
}
