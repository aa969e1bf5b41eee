use std::path::Path;
use std::sync::Arc;

use portfolio_db::Database;
use tokio_util::sync::CancellationToken;

use crate::config::{AppConfig, ConfigManager, Configuration};
use crate::services::contact::ContactService;
use crate::services::upload::UploadService;

/// Application shared state accessible from axum handlers.
#[derive(Clone)]
pub struct SharedState {
    inner: Arc<SharedStateInner>,
}

struct SharedStateInner {
    /// Database handle
    db: Database,
    /// Site configuration defaults, built once at startup
    defaults: Arc<Configuration>,
    /// Runtime server configuration
    config: AppConfig,
    /// Cancelled when the process is shutting down
    shutdown_token: CancellationToken,
}

impl SharedState {
    pub fn new(db: Database, config: AppConfig, defaults: Configuration) -> Self {
        Self {
            inner: Arc::new(SharedStateInner {
                db,
                defaults: Arc::new(defaults),
                config,
                shutdown_token: CancellationToken::new(),
            }),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }

    pub fn data_dir(&self) -> &Path {
        &self.inner.config.data_dir
    }

    pub fn shutdown_token(&self) -> &CancellationToken {
        &self.inner.shutdown_token
    }

    pub fn config_manager(&self) -> ConfigManager {
        ConfigManager::new(self.inner.db.clone(), self.inner.defaults.clone())
    }

    pub fn contact_service(&self) -> ContactService {
        ContactService::new(self.inner.db.clone())
    }

    pub fn upload_service(&self) -> UploadService {
        UploadService::new(self.inner.config.uploads_dir())
    }
}
