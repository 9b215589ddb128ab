//! In-process broadcast transport
//!
//! Mirrors the host socket: every connected client sees every message except
//! the ones it emitted itself.

use async_trait::async_trait;
use futures_util::stream::{self, BoxStream, StreamExt};
use pde_domain::UserId;
use serde_json::Value;
use tokio::sync::broadcast;

use crate::ports::outbound::{SocketEnvelope, SocketError, SocketPort};

const DEFAULT_CAPACITY: usize = 64;

#[derive(Clone)]
pub struct LocalSocketHub {
    tx: broadcast::Sender<SocketEnvelope>,
}

impl Default for LocalSocketHub {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl LocalSocketHub {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Attach a client to the hub.
    pub fn connect(&self, user_id: UserId) -> LocalSocket {
        LocalSocket {
            user_id,
            tx: self.tx.clone(),
        }
    }
}

/// One client's end of a [`LocalSocketHub`]
#[derive(Clone)]
pub struct LocalSocket {
    user_id: UserId,
    tx: broadcast::Sender<SocketEnvelope>,
}

#[async_trait]
impl SocketPort for LocalSocket {
    fn user_id(&self) -> UserId {
        self.user_id.clone()
    }

    async fn emit(&self, data: Value) -> Result<(), SocketError> {
        let envelope = SocketEnvelope {
            sender: self.user_id.clone(),
            data,
        };
        // Zero subscribers is not a failure on a broadcast channel.
        if self.tx.send(envelope).is_err() {
            tracing::debug!(user_id = %self.user_id, "Emitted with no connected listeners");
        }
        Ok(())
    }

    fn subscribe(&self) -> BoxStream<'static, SocketEnvelope> {
        let rx = self.tx.subscribe();
        let own_id = self.user_id.clone();
        stream::unfold(rx, |mut rx| async move {
            loop {
                match rx.recv().await {
                    Ok(envelope) => return Some((envelope, rx)),
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        tracing::warn!(skipped, "Socket subscriber lagged, messages dropped");
                    }
                    Err(broadcast::error::RecvError::Closed) => return None,
                }
            }
        })
        .filter(move |envelope| std::future::ready(envelope.sender != own_id))
        .boxed()
    }
}
