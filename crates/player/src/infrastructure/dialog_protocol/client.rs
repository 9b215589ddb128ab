//! Originating side of the dialog protocol

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use pde_domain::{Signature, UserId};
use pde_shared::{
    DialogData, DialogOptions, DialogRequestError, DialogResponse, InputDialogRequest, InputType,
    SocketMessage,
};
use serde_json::Value;
use tokio::sync::{oneshot, Mutex};

use super::pending::PendingDialogs;
use crate::ports::outbound::{DialogRequestPort, SocketPort};

/// Default wait for a remote answer in milliseconds (2 minutes)
pub const DEFAULT_DIALOG_TIMEOUT_MS: u64 = 120_000;

/// Sends dialog requests and awaits the correlated answer
///
/// Responses are routed into the shared [`PendingDialogs`] table by the
/// socket bridge; see [`super::spawn_dialog_bridge`].
#[derive(Clone)]
pub struct DialogClient {
    socket: Arc<dyn SocketPort>,
    pending: Arc<Mutex<PendingDialogs>>,
    timeout_ms: u64,
}

impl DialogClient {
    /// `timeout_ms` of zero waits indefinitely.
    pub fn new(socket: Arc<dyn SocketPort>, pending: Arc<Mutex<PendingDialogs>>, timeout_ms: u64) -> Self {
        Self {
            socket,
            pending,
            timeout_ms,
        }
    }

    pub fn user_id(&self) -> UserId {
        self.socket.user_id()
    }

    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    /// Get access to pending requests (for bridge use)
    pub fn pending(&self) -> Arc<Mutex<PendingDialogs>> {
        Arc::clone(&self.pending)
    }

    /// Broadcast a dialog request and wait for the first matching answer.
    ///
    /// The waiter is registered before the request is emitted so a fast
    /// responder cannot be missed.
    pub async fn request(
        &self,
        input_type: InputType,
        data: DialogData,
        options: DialogOptions,
        recipients: Vec<UserId>,
    ) -> Result<Value, DialogRequestError> {
        let own_id = self.socket.user_id();
        let signature = Signature::generate();
        let message = SocketMessage::input_dialog(InputDialogRequest {
            input_type,
            data,
            options,
            user_ids: recipients,
            signature: signature.clone(),
        });
        let payload = serde_json::to_value(&message)?;

        let (tx, rx) = oneshot::channel();
        {
            let mut pending = self.pending.lock().await;
            pending.insert(
                signature.clone(),
                DialogResponse::expectation(&own_id, &signature),
                tx,
            );
        }
        // Removes the entry on every exit, including the caller dropping this future
        let _entry = PendingEntry {
            pending: Arc::clone(&self.pending),
            signature: signature.clone(),
        };

        if let Err(e) = self.socket.emit(payload).await {
            tracing::warn!(signature = %signature, error = %e, "Failed to emit dialog request");
            return Err(DialogRequestError::send_failed(e.to_string()));
        }
        tracing::info!(signature = %signature, input_type = %input_type, "Dialog requested");

        if self.timeout_ms == 0 {
            return rx.await.map_err(|_| DialogRequestError::Cancelled);
        }

        match tokio::time::timeout(Duration::from_millis(self.timeout_ms), rx).await {
            Ok(result) => {
                tracing::info!(signature = %signature, "Dialog answered");
                result.map_err(|_| DialogRequestError::Cancelled)
            }
            Err(_) => {
                tracing::warn!(
                    signature = %signature,
                    timeout_ms = self.timeout_ms,
                    "Dialog request timed out - cleaned up pending entry"
                );
                Err(DialogRequestError::NoResponse {
                    timeout_ms: self.timeout_ms,
                })
            }
        }
    }
}

/// Pending-table entry owned by one in-flight request
struct PendingEntry {
    pending: Arc<Mutex<PendingDialogs>>,
    signature: Signature,
}

impl Drop for PendingEntry {
    fn drop(&mut self) {
        if let Ok(mut pending) = self.pending.try_lock() {
            pending.remove(&self.signature);
            return;
        }
        // Table is busy (usually the bridge routing a message); finish on the runtime
        let pending = Arc::clone(&self.pending);
        let signature = self.signature.clone();
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn(async move {
                    pending.lock().await.remove(&signature);
                });
            }
            Err(_) => tracing::warn!(signature = %signature, "No runtime to release pending dialog entry"),
        }
    }
}

#[async_trait]
impl DialogRequestPort for DialogClient {
    async fn request_dialog(
        &self,
        input_type: InputType,
        data: DialogData,
        options: DialogOptions,
        recipients: Vec<UserId>,
    ) -> Result<Value, DialogRequestError> {
        self.request(input_type, data, options, recipients).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::{MockSocketPort, SocketError};
    use serde_json::json;
    use std::sync::Mutex as StdMutex;

    fn user(id: &str) -> UserId {
        UserId::parse(id).unwrap()
    }

    #[tokio::test]
    async fn emits_tagged_request_and_resolves_from_pending_table() {
        let emitted = Arc::new(StdMutex::new(Vec::<Value>::new()));
        let emitted_clone = Arc::clone(&emitted);

        let mut socket = MockSocketPort::new();
        socket.expect_user_id().returning(|| UserId::parse("gm").unwrap());
        socket.expect_emit().returning(move |data| {
            emitted_clone.lock().unwrap().push(data);
            Ok(())
        });

        let pending = Arc::new(Mutex::new(PendingDialogs::default()));
        let client = DialogClient::new(Arc::new(socket), Arc::clone(&pending), 1_000);

        let request = tokio::spawn({
            let client = client.clone();
            async move {
                client
                    .request(
                        InputType::Confirm,
                        DialogData::with_message("Proceed?"),
                        DialogOptions::default(),
                        vec![user("user-42")],
                    )
                    .await
            }
        });

        // Wait for the request to be registered and emitted
        let message = loop {
            if let Some(message) = emitted.lock().unwrap().first().cloned() {
                break message;
            }
            tokio::task::yield_now().await;
        };
        assert_eq!(message["type"], json!("INPUT_DIALOG"));
        assert_eq!(message["payload"]["userIds"], json!(["user-42"]));
        let signature = Signature::parse(message["payload"]["signature"].as_str().unwrap()).unwrap();

        assert!(pending
            .lock()
            .await
            .resolve(DialogResponse::new(user("gm"), signature, json!(true))));
        assert_eq!(request.await.unwrap().unwrap(), json!(true));
    }

    #[tokio::test]
    async fn times_out_with_no_response_and_cleans_up() {
        let mut socket = MockSocketPort::new();
        socket.expect_user_id().returning(|| UserId::parse("gm").unwrap());
        socket.expect_emit().returning(|_| Ok(()));

        let pending = Arc::new(Mutex::new(PendingDialogs::default()));
        let client = DialogClient::new(Arc::new(socket), Arc::clone(&pending), 20);

        let result = client
            .request(InputType::Info, DialogData::default(), DialogOptions::default(), vec![user("p")])
            .await;

        assert_eq!(result, Err(DialogRequestError::NoResponse { timeout_ms: 20 }));
        assert!(pending.lock().await.is_empty());
    }

    #[tokio::test]
    async fn emit_failure_is_reported_and_cleaned_up() {
        let mut socket = MockSocketPort::new();
        socket.expect_user_id().returning(|| UserId::parse("gm").unwrap());
        socket.expect_emit().returning(|_| Err(SocketError::Closed));

        let pending = Arc::new(Mutex::new(PendingDialogs::default()));
        let client = DialogClient::new(Arc::new(socket), Arc::clone(&pending), 500);

        let result = client
            .request(InputType::Drop, DialogData::default(), DialogOptions::default(), vec![user("p")])
            .await;

        assert!(matches!(result, Err(DialogRequestError::SendFailed(_))));
        assert!(pending.lock().await.is_empty());
    }

    #[tokio::test]
    async fn dropping_the_request_releases_its_pending_entry() {
        let mut socket = MockSocketPort::new();
        socket.expect_user_id().returning(|| UserId::parse("gm").unwrap());
        socket.expect_emit().returning(|_| Ok(()));

        let pending = Arc::new(Mutex::new(PendingDialogs::default()));
        let client = DialogClient::new(Arc::new(socket), Arc::clone(&pending), 60_000);

        let outer = tokio::time::timeout(
            Duration::from_millis(20),
            client.request(InputType::Confirm, DialogData::default(), DialogOptions::default(), vec![user("p")]),
        )
        .await;

        assert!(outer.is_err());
        assert!(pending.lock().await.is_empty());
    }

    #[tokio::test]
    async fn unbounded_request_releases_its_entry_when_aborted() {
        let mut socket = MockSocketPort::new();
        socket.expect_user_id().returning(|| UserId::parse("gm").unwrap());
        socket.expect_emit().returning(|_| Ok(()));

        let pending = Arc::new(Mutex::new(PendingDialogs::default()));
        let client = DialogClient::new(Arc::new(socket), Arc::clone(&pending), 0);

        let request = tokio::spawn(async move {
            client
                .request(InputType::Info, DialogData::default(), DialogOptions::default(), vec![user("p")])
                .await
        });
        while pending.lock().await.is_empty() {
            tokio::task::yield_now().await;
        }

        request.abort();
        assert!(request.await.unwrap_err().is_cancelled());
        assert!(pending.lock().await.is_empty());
    }
}
