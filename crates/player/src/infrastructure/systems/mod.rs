//! Game-system adapters and their registry
//!
//! The host reports the active game system id once at startup; the registry
//! turns it into the adapter the tooltip engine is built with. Unknown ids
//! get the generic adapter.

mod details;
mod dnd5e;
mod enrichment;
mod generic;
mod pf2e;

use std::sync::Arc;

pub use details::damage_color;
pub use dnd5e::{Dnd5eAdapter, DND5E_DESCRIPTION_PATH};
pub use enrichment::enrich_description;
pub use generic::GenericAdapter;
pub use pf2e::{action_glyph, Pf2eAdapter, PF2E_DESCRIPTION_PATH};

use crate::ports::outbound::{Enricher, Localizer, ModuleSettings, SettingsError, SettingsPort, SystemAdapter};

/// Registry of available system adapters.
pub struct SystemRegistry {
    systems: Vec<Arc<dyn SystemAdapter>>,
}

impl SystemRegistry {
    /// Create a registry with all built-in adapters sharing the host's enrichers.
    pub fn new(enrichers: Vec<Arc<dyn Enricher>>, localizer: Arc<dyn Localizer>) -> Self {
        let mut registry = Self::empty();
        registry.register(Arc::new(Dnd5eAdapter::new(enrichers.clone(), Arc::clone(&localizer))));
        registry.register(Arc::new(Pf2eAdapter::new(enrichers, localizer)));
        registry
    }

    /// Create an empty registry without built-in adapters.
    pub fn empty() -> Self {
        Self {
            systems: Vec::new(),
        }
    }

    pub fn register(&mut self, system: Arc<dyn SystemAdapter>) {
        self.systems.push(system);
    }

    pub fn get(&self, system_id: &str) -> Option<Arc<dyn SystemAdapter>> {
        self.systems
            .iter()
            .find(|s| s.system_id() == system_id)
            .cloned()
    }

    /// Adapter for the active system, falling back to the generic one.
    pub fn select(&self, system_id: &str) -> Arc<dyn SystemAdapter> {
        match self.get(system_id) {
            Some(adapter) => adapter,
            None => {
                tracing::info!(system_id = %system_id, "No tooltip adapter for system, using generic");
                Arc::new(GenericAdapter)
            }
        }
    }

    pub fn list_systems(&self) -> Vec<&'static str> {
        self.systems.iter().map(|s| s.system_id()).collect()
    }
}

/// Write the adapter's default description path into an empty setting.
///
/// Returns whether the setting was changed.
pub async fn seed_settings(
    adapter: &dyn SystemAdapter,
    settings: &dyn SettingsPort,
) -> Result<bool, SettingsError> {
    let Some(seed) = adapter.seed_description_path() else {
        return Ok(false);
    };
    let current = settings.get().await?;
    if current.item_description_path().is_some() {
        return Ok(false);
    }
    settings
        .set(ModuleSettings {
            tooltip_item_description_path: seed.to_string(),
        })
        .await?;
    tracing::info!(system_id = adapter.system_id(), path = seed, "Seeded item description path");
    Ok(true)
}
