//! Dialog responses and client-side request errors

use pde_domain::{Signature, UserId};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Payload of an `INPUT_DIALOG_RESPONSE` broadcast
///
/// `emitter_id` echoes the originator of the request, not the responder, so
/// the originator can recognise answers meant for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DialogResponse {
    pub emitter_id: UserId,
    pub signature: Signature,
    /// Dialog result; null when the dialog was closed without an answer
    #[serde(default)]
    pub payload: Value,
}

impl DialogResponse {
    pub fn new(emitter_id: UserId, signature: Signature, payload: Value) -> Self {
        Self {
            emitter_id,
            signature,
            payload,
        }
    }

    /// Expected values an originator waits for.
    pub fn expectation(emitter_id: &UserId, signature: &Signature) -> Map<String, Value> {
        let mut expected = Map::new();
        expected.insert("emitterId".into(), Value::String(emitter_id.to_string()));
        expected.insert("signature".into(), Value::String(signature.to_string()));
        expected
    }

    /// Check the response against an expected-value map.
    ///
    /// Every expected key that is present and non-null on the response must
    /// match exactly. Absent keys are not checked.
    pub fn matches(&self, expected: &Map<String, Value>) -> bool {
        let Ok(Value::Object(fields)) = serde_json::to_value(self) else {
            return false;
        };
        expected.iter().all(|(key, want)| match fields.get(key) {
            None | Some(Value::Null) => true,
            Some(actual) => actual == want,
        })
    }
}

/// Errors surfaced to the caller of a remote dialog request
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DialogRequestError {
    /// No matching response arrived in time
    #[error("No response to dialog request within {timeout_ms}ms")]
    NoResponse { timeout_ms: u64 },
    /// The waiter was dropped before a response arrived
    #[error("Dialog request was cancelled")]
    Cancelled,
    #[error("Failed to send dialog request: {0}")]
    SendFailed(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl DialogRequestError {
    pub fn send_failed(msg: impl Into<String>) -> Self {
        Self::SendFailed(msg.into())
    }

    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }
}

impl From<serde_json::Error> for DialogRequestError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
