//! Broadcast socket port

use async_trait::async_trait;
use futures_util::stream::BoxStream;
use pde_domain::UserId;
use serde_json::Value;

/// One broadcast as seen by a subscriber
#[derive(Debug, Clone, PartialEq)]
pub struct SocketEnvelope {
    /// Client that emitted the message
    pub sender: UserId,
    pub data: Value,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SocketError {
    #[error("Socket is closed")]
    Closed,
    #[error("Failed to emit: {0}")]
    EmitFailed(String),
}

/// The host's module channel
///
/// `subscribe` returns a persistent stream of every message other clients
/// broadcast on the channel until the socket closes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SocketPort: Send + Sync {
    /// Identity of the local client
    fn user_id(&self) -> UserId;

    async fn emit(&self, data: Value) -> Result<(), SocketError>;

    fn subscribe(&self) -> BoxStream<'static, SocketEnvelope>;
}
