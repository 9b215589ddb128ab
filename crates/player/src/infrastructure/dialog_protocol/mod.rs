//! Cross-client dialog protocol
//!
//! ```text
//! originator                         module channel                  recipient
//! DialogClient::request ── INPUT_DIALOG {userIds, signature} ──▶ bridge ─▶ local dialog
//!        ▲                                                                  │
//! PendingDialogs ◀─ bridge ◀── INPUT_DIALOG_RESPONSE {emitterId, signature, payload}
//! ```

mod bridge;
mod client;
mod local_hub;
mod pending;


pub use bridge::{spawn_dialog_bridge, DialogBridgeHandle};
pub use client::{DialogClient, DEFAULT_DIALOG_TIMEOUT_MS};
pub use local_hub::{LocalSocket, LocalSocketHub};
pub use pending::PendingDialogs;
