//! Document resolution port

use async_trait::async_trait;
use pde_domain::{DisplayableEntity, DocumentUuid};

/// Resolve host document locators
///
/// Missing, deleted or inaccessible documents resolve to `None`; callers
/// treat that as a dead link, never as an error.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentResolver: Send + Sync {
    async fn from_uuid(&self, uuid: &DocumentUuid) -> Option<DisplayableEntity>;
}
