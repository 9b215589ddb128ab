//! Pending dialog requests awaiting a remote answer

use std::collections::HashMap;

use pde_domain::Signature;
use pde_shared::DialogResponse;
use serde_json::{Map, Value};
use tokio::sync::oneshot;

struct PendingDialog {
    expected: Map<String, Value>,
    tx: oneshot::Sender<Value>,
}

/// Correlation table from signature to the waiting requester
///
/// Entries are removed as soon as they resolve, time out, or are cancelled.
#[derive(Default)]
pub struct PendingDialogs {
    inner: HashMap<Signature, PendingDialog>,
}

impl PendingDialogs {
    pub fn insert(
        &mut self,
        signature: Signature,
        expected: Map<String, Value>,
        tx: oneshot::Sender<Value>,
    ) {
        self.inner.insert(signature, PendingDialog { expected, tx });
    }

    /// Route a response to its waiter.
    ///
    /// Returns true if a waiter was found and resolved. A response whose
    /// fields do not match the waiter's expectation leaves it pending.
    pub fn resolve(&mut self, response: DialogResponse) -> bool {
        let matches = match self.inner.get(&response.signature) {
            Some(pending) => response.matches(&pending.expected),
            None => {
                tracing::debug!(
                    signature = %response.signature,
                    "Response for unknown signature - request may have timed out or belongs to another client"
                );
                return false;
            }
        };

        if !matches {
            tracing::debug!(
                signature = %response.signature,
                emitter_id = %response.emitter_id,
                "Response does not match expectation - still waiting"
            );
            return false;
        }

        match self.inner.remove(&response.signature) {
            Some(pending) => {
                if pending.tx.send(response.payload).is_err() {
                    tracing::debug!(signature = %response.signature, "Requester dropped before response arrived");
                }
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, signature: &Signature) -> bool {
        self.inner.remove(signature).is_some()
    }

    pub fn contains(&self, signature: &Signature) -> bool {
        self.inner.contains_key(signature)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn clear(&mut self) -> usize {
        let count = self.inner.len();
        self.inner.clear();
        count
    }
}
