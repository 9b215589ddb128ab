//! Socket bridge - the single persistent subscription for dialog traffic
//!
//! One background task per client reads the module channel and:
//! - routes `INPUT_DIALOG_RESPONSE` messages into [`PendingDialogs`]
//! - answers `INPUT_DIALOG` requests addressed to this user by showing the
//!   dialog locally and broadcasting the result
//!
//! Malformed, unknown and self-originated messages are dropped.

use std::sync::Arc;

use futures_util::stream::{BoxStream, StreamExt};
use pde_domain::UserId;
use pde_shared::{DialogResponse, InputDialogRequest, SocketMessage};
use tokio::sync::{oneshot, Mutex};
use tokio::task::JoinHandle;

use super::pending::PendingDialogs;
use crate::ports::inbound::DialogRequestHandler;
use crate::ports::outbound::{SocketEnvelope, SocketPort};

/// Keeps the bridge alive; dropping it stops the bridge.
pub struct DialogBridgeHandle {
    shutdown_tx: oneshot::Sender<()>,
    task: JoinHandle<()>,
}

impl DialogBridgeHandle {
    pub async fn shutdown(self) {
        let Self { shutdown_tx, task } = self;
        let _ = shutdown_tx.send(());
        if let Err(e) = task.await {
            tracing::warn!(error = %e, "Dialog bridge task ended abnormally");
        }
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

/// Subscribe to the socket and spawn the bridge task.
///
/// The subscription is taken before this returns, so requests issued right
/// after cannot race the bridge.
pub fn spawn_dialog_bridge(
    socket: Arc<dyn SocketPort>,
    pending: Arc<Mutex<PendingDialogs>>,
    handler: Arc<dyn DialogRequestHandler>,
) -> DialogBridgeHandle {
    let messages = socket.subscribe();
    let (shutdown_tx, shutdown_rx) = oneshot::channel();
    let task = tokio::spawn(bridge_task(socket, messages, shutdown_rx, pending, handler));
    DialogBridgeHandle { shutdown_tx, task }
}

async fn bridge_task(
    socket: Arc<dyn SocketPort>,
    mut messages: BoxStream<'static, SocketEnvelope>,
    mut shutdown_rx: oneshot::Receiver<()>,
    pending: Arc<Mutex<PendingDialogs>>,
    handler: Arc<dyn DialogRequestHandler>,
) {
    let own_id = socket.user_id();
    tracing::info!(user_id = %own_id, "Dialog bridge started");

    loop {
        tokio::select! {
            _ = &mut shutdown_rx => {
                tracing::info!(user_id = %own_id, "Dialog bridge stopped");
                break;
            }
            next = messages.next() => match next {
                Some(envelope) => route_envelope(&socket, &own_id, &pending, &handler, envelope).await,
                None => {
                    tracing::info!(user_id = %own_id, "Socket closed, dialog bridge stopped");
                    break;
                }
            }
        }
    }
}

async fn route_envelope(
    socket: &Arc<dyn SocketPort>,
    own_id: &UserId,
    pending: &Arc<Mutex<PendingDialogs>>,
    handler: &Arc<dyn DialogRequestHandler>,
    envelope: SocketEnvelope,
) {
    let sender = envelope.sender;
    let Some(message) = SocketMessage::from_value(envelope.data) else {
        tracing::debug!(sender = %sender, "Dropping malformed socket message");
        return;
    };

    match message {
        SocketMessage::InputDialogResponse(response) => {
            pending.lock().await.resolve(response);
        }
        SocketMessage::InputDialog { payload } => {
            if sender == *own_id {
                tracing::debug!(signature = %payload.signature, "Ignoring own dialog request");
                return;
            }
            if !payload.is_addressed_to(own_id) {
                tracing::debug!(signature = %payload.signature, "Dialog request not addressed to this user");
                return;
            }
            // Answered off the bridge task so responses keep flowing while the user decides.
            tokio::spawn(answer_request(
                Arc::clone(socket),
                Arc::clone(handler),
                sender,
                payload,
            ));
        }
        SocketMessage::Unknown => {
            tracing::debug!(sender = %sender, "Ignoring unknown socket message type");
        }
    }
}

async fn answer_request(
    socket: Arc<dyn SocketPort>,
    handler: Arc<dyn DialogRequestHandler>,
    originator: UserId,
    request: InputDialogRequest,
) {
    let signature = request.signature.clone();
    tracing::info!(
        signature = %signature,
        originator = %originator,
        input_type = %request.input_type,
        "Showing dialog requested by another client"
    );

    let result = handler.handle(request).await;
    let response = SocketMessage::InputDialogResponse(DialogResponse::new(originator, signature.clone(), result));

    let data = match serde_json::to_value(&response) {
        Ok(data) => data,
        Err(e) => {
            tracing::warn!(signature = %signature, error = %e, "Failed to serialize dialog response");
            return;
        }
    };
    if let Err(e) = socket.emit(data).await {
        tracing::warn!(signature = %signature, error = %e, "Failed to emit dialog response");
    }
}
