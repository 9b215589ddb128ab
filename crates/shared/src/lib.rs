//! PDE Shared - wire protocol spoken between connected clients
//!
//! Every client of the module (game master and players alike) speaks the same
//! protocol over the host's broadcast socket:
//! - `INPUT_DIALOG` asks specific users to fill in a dialog
//! - `INPUT_DIALOG_RESPONSE` carries an answer back to the originator
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - Only serde, serde_json, thiserror and the domain ids
//! 2. **No business logic** - Pure data types and serialization
//! 3. **Tolerant decoding** - Malformed or unknown messages never fault a listener

pub mod messages;
pub mod responses;

pub use messages::{
    DialogData, DialogOptions, InputDialogRequest, InputField, InputFieldKind, InputType,
    SocketMessage, MODULE_CHANNEL,
};
pub use responses::{DialogRequestError, DialogResponse};
