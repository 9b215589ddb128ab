//! Connected users port

use async_trait::async_trait;
use pde_domain::UserId;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Users owning `actor`; game masters are only included when `allow_gm` is set.
    async fn players_for_actor(&self, actor: &str, allow_gm: bool) -> Vec<UserId>;
}
