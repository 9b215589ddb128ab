//! Inbound ports - driven by infrastructure, implemented by application services

use async_trait::async_trait;
use pde_shared::InputDialogRequest;
use serde_json::Value;

/// Answers a dialog request that another client addressed to this user
///
/// Implementations show the dialog locally and return its result, or
/// `Value::Null` when it was closed without an answer.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DialogRequestHandler: Send + Sync {
    async fn handle(&self, request: InputDialogRequest) -> Value;
}
