//! Module settings port

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Fallback used when neither the operator nor the active system names a path
pub const FALLBACK_DESCRIPTION_PATH: &str = "system.description";

/// World-scoped settings registered by the module
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleSettings {
    /// Dot path to an item's description within its document; empty means unset
    #[serde(default)]
    pub tooltip_item_description_path: String,
}

impl ModuleSettings {
    pub fn item_description_path(&self) -> Option<&str> {
        let path = self.tooltip_item_description_path.trim();
        (!path.is_empty()).then_some(path)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("Settings storage unavailable: {0}")]
    Unavailable(String),
    #[error("Invalid setting value for {key}: {reason}")]
    Invalid { key: String, reason: String },
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SettingsPort: Send + Sync {
    async fn get(&self) -> Result<ModuleSettings, SettingsError>;
    async fn set(&self, settings: ModuleSettings) -> Result<(), SettingsError>;
}
