//! Remote dialog request port

use async_trait::async_trait;
use pde_domain::UserId;
use pde_shared::{DialogData, DialogOptions, DialogRequestError, InputType};
use serde_json::Value;

/// Ask other clients to fill in a dialog and wait for the first matching answer
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DialogRequestPort: Send + Sync {
    async fn request_dialog(
        &self,
        input_type: InputType,
        data: DialogData,
        options: DialogOptions,
        recipients: Vec<UserId>,
    ) -> Result<Value, DialogRequestError>;
}
