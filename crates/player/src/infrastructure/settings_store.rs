//! In-memory module settings

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::ports::outbound::{ModuleSettings, SettingsError, SettingsPort};

#[derive(Debug, Default)]
pub struct InMemorySettings {
    inner: RwLock<ModuleSettings>,
}

impl InMemorySettings {
    pub fn new(settings: ModuleSettings) -> Self {
        Self {
            inner: RwLock::new(settings),
        }
    }
}

#[async_trait]
impl SettingsPort for InMemorySettings {
    async fn get(&self) -> Result<ModuleSettings, SettingsError> {
        Ok(self.inner.read().await.clone())
    }

    async fn set(&self, settings: ModuleSettings) -> Result<(), SettingsError> {
        *self.inner.write().await = settings;
        Ok(())
    }
}
