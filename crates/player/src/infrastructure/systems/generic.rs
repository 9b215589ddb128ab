//! Fallback adapter for systems without tooltip support

use async_trait::async_trait;
use pde_domain::DisplayableEntity;

use crate::ports::outbound::SystemAdapter;

#[derive(Debug, Clone, Copy, Default)]
pub struct GenericAdapter;

#[async_trait]
impl SystemAdapter for GenericAdapter {
    fn system_id(&self) -> &'static str {
        "generic"
    }

    fn item_description_path(&self) -> Option<&'static str> {
        None
    }

    fn seed_description_path(&self) -> Option<&'static str> {
        None
    }

    async fn enhance_description(&self, description: String) -> String {
        description
    }

    fn compute_details(&self, _entity: &DisplayableEntity) -> Option<String> {
        None
    }
}
