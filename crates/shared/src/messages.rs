//! Socket message types for cross-client dialog requests
//!
//! Every connected client subscribes to the same module channel, so every
//! message is seen by everyone, including its sender on hosts that echo.
//! Addressing and correlation happen in the payload.
//!
//! ## Versioning Policy
//!
//! - Unknown `type` tags deserialize to `Unknown` so a newer client never
//!   faults an older listener

use pde_domain::{Signature, UserId};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::responses::DialogResponse;

/// Channel name shared by every client of this module
pub const MODULE_CHANNEL: &str = "module.pazindor-dev-essentials";

/// Messages broadcast over the module channel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SocketMessage {
    /// Ask the listed users to fill in a dialog
    #[serde(rename = "INPUT_DIALOG")]
    InputDialog { payload: InputDialogRequest },
    /// A user's answer to an `INPUT_DIALOG`
    #[serde(rename = "INPUT_DIALOG_RESPONSE")]
    InputDialogResponse(DialogResponse),
    /// Unknown message type for forward compatibility
    #[serde(other)]
    Unknown,
}

impl SocketMessage {
    pub fn input_dialog(request: InputDialogRequest) -> Self {
        Self::InputDialog { payload: request }
    }

    /// Decode a raw broadcast; malformed payloads yield `None`.
    pub fn from_value(value: Value) -> Option<Self> {
        serde_json::from_value(value).ok()
    }
}

/// Which dialog to show, and what it returns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    /// Returns null
    Info,
    /// Returns a boolean
    Confirm,
    /// Returns one value per input, in order
    Input,
    /// Returns the dropped document identifiers
    Drop,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Info => "info",
            InputType::Confirm => "confirm",
            InputType::Input => "input",
            InputType::Drop => "drop",
        }
    }
}

impl std::fmt::Display for InputType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dialog body. Which fields matter depends on the [`InputType`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DialogData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub information: Vec<String>,
    /// Info dialogs only
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub hide_buttons: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirm_label: Option<String>,
    /// Confirm dialogs only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deny_label: Option<String>,
    /// Input dialogs only
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub inputs: Vec<InputField>,
}

impl DialogData {
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    pub fn information(mut self, information: Vec<String>) -> Self {
        self.information = information;
        self
    }

    pub fn input(mut self, field: InputField) -> Self {
        self.inputs.push(field);
        self
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputFieldKind {
    Select,
    #[default]
    Input,
    Checkbox,
}

/// One control in an `input` dialog
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputField {
    #[serde(rename = "type", default)]
    pub kind: InputFieldKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    /// Select choices, value to display label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preselected: Option<Value>,
    /// Current value, filled in when the dialog is prepared
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

impl InputField {
    pub fn text() -> Self {
        Self::default()
    }

    pub fn select(options: Map<String, Value>) -> Self {
        Self {
            kind: InputFieldKind::Select,
            options: Some(options),
            ..Self::default()
        }
    }

    pub fn checkbox() -> Self {
        Self {
            kind: InputFieldKind::Checkbox,
            ..Self::default()
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn preselected(mut self, value: impl Into<Value>) -> Self {
        self.preselected = Some(value.into());
        self
    }
}

/// Routing options travelling with a dialog request
///
/// Unrecognised keys are kept in `extra` and forwarded untouched to the
/// recipient's dialog window.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DialogOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_users: Option<Vec<UserId>>,
    /// Actor whose owning players should answer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub send_to_actor_owner: Option<String>,
    /// Include game masters among the actor's owners
    #[serde(rename = "allowGM", alias = "allowGm", default, skip_serializing_if = "std::ops::Not::not")]
    pub allow_gm: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DialogOptions {
    pub fn to_users(users: Vec<UserId>) -> Self {
        Self {
            to_users: Some(users),
            ..Self::default()
        }
    }

    pub fn to_actor_owner(actor: impl Into<String>, allow_gm: bool) -> Self {
        Self {
            send_to_actor_owner: Some(actor.into()),
            allow_gm,
            ..Self::default()
        }
    }

    /// Explicit recipients, if any were given.
    pub fn recipients(&self) -> Option<&[UserId]> {
        self.to_users.as_deref().filter(|users| !users.is_empty())
    }
}

/// Payload of an `INPUT_DIALOG` broadcast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDialogRequest {
    pub input_type: InputType,
    #[serde(default)]
    pub data: DialogData,
    #[serde(default)]
    pub options: DialogOptions,
    pub user_ids: Vec<UserId>,
    pub signature: Signature,
}

impl InputDialogRequest {
    pub fn is_addressed_to(&self, user: &UserId) -> bool {
        self.user_ids.contains(user)
    }
}
