//! Input dialog model: info, confirm, input and drop prompts
//!
//! | kind      | confirm result                 | close result |
//! |-----------|--------------------------------|--------------|
//! | `info`    | -                              | null         |
//! | `confirm` | `true` / `false` per button    | null         |
//! | `input`   | one value per input, in order  | null         |
//! | `drop`    | dropped document identifiers   | null         |

use pde_shared::{DialogData, DialogOptions, InputField, InputFieldKind, InputType};
use serde_json::{json, Value};

use super::completion::{self, DialogCompletion, DialogHandle};
use super::form_controls::is_truthy;
use crate::ports::outbound::{localization_keys as keys, Localizer};

/// Which footer button the user pressed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogButton {
    Confirm,
    Deny,
}

pub struct InputDialog {
    input_type: InputType,
    title: String,
    data: DialogData,
    options: DialogOptions,
    dropped: Vec<String>,
    completion: DialogCompletion<Option<Value>>,
}

impl InputDialog {
    pub fn open(
        input_type: InputType,
        mut data: DialogData,
        options: DialogOptions,
        localizer: &dyn Localizer,
    ) -> (Self, DialogHandle<Option<Value>>) {
        if input_type == InputType::Input {
            prepare_inputs(&mut data.inputs);
        }
        prepare_button_labels(input_type, &mut data, localizer);

        let (completion, handle) = completion::channel(None);
        let dialog = Self {
            input_type,
            title: localizer.localize(keys::DIALOG_TITLE),
            data,
            options,
            dropped: Vec::new(),
            completion,
        };
        (dialog, handle)
    }

    pub fn input_type(&self) -> InputType {
        self.input_type
    }

    pub fn data(&self) -> &DialogData {
        &self.data
    }

    pub fn options(&self) -> &DialogOptions {
        &self.options
    }

    pub fn dropped(&self) -> &[String] {
        &self.dropped
    }

    /// Update the value of the input at `index`. Returns false if there is none.
    pub fn set_input_value(&mut self, index: usize, value: Value) -> bool {
        match self.data.inputs.get_mut(index) {
            Some(input) => {
                input.value = Some(value);
                true
            }
            None => false,
        }
    }

    /// Accept dropped drag data. Only `drop` dialogs collect drops, and only
    /// payloads carrying a `uuid`.
    pub fn on_drop(&mut self, drag_data: &Value) -> bool {
        if self.input_type != InputType::Drop {
            return false;
        }
        match drag_data.get("uuid").and_then(Value::as_str) {
            Some(uuid) if !uuid.is_empty() => {
                self.dropped.push(uuid.to_string());
                true
            }
            _ => false,
        }
    }

    /// Handle a footer button and close the dialog.
    pub fn submit(mut self, button: DialogButton) {
        let result = match self.input_type {
            InputType::Info => None,
            InputType::Confirm => Some(Value::Bool(button == DialogButton::Confirm)),
            InputType::Input => Some(Value::Array(
                self.data
                    .inputs
                    .iter()
                    .map(|input| input.value.clone().unwrap_or(Value::Null))
                    .collect(),
            )),
            InputType::Drop => Some(Value::Array(
                self.dropped.iter().cloned().map(Value::String).collect(),
            )),
        };
        if let Some(value) = result {
            self.completion.resolve(Some(value));
        }
    }

    /// Close without an answer.
    pub fn close(mut self) {
        self.completion.close();
    }

    /// Template context for the host renderer
    pub fn context(&self) -> Value {
        let mut context = json!({
            "title": self.title,
            "inputType": self.input_type,
            "dropData": self.dropped,
        });
        if let (Value::Object(context), Ok(Value::Object(data))) =
            (&mut context, serde_json::to_value(&self.data))
        {
            context.extend(data);
        }
        context
    }
}

// A falsy preselection (false, 0, "") counts as none.
fn prepare_inputs(inputs: &mut [InputField]) {
    for input in inputs {
        input.value = Some(match input.preselected.as_ref().filter(|v| is_truthy(v)) {
            Some(preselected) => preselected.clone(),
            None if input.kind == InputFieldKind::Checkbox => Value::Bool(false),
            None => Value::String(String::new()),
        });
    }
}

fn prepare_button_labels(input_type: InputType, data: &mut DialogData, localizer: &dyn Localizer) {
    if data.confirm_label.as_deref().map_or(true, str::is_empty) {
        let key = if input_type == InputType::Confirm { keys::YES } else { keys::CONFIRM };
        data.confirm_label = Some(localizer.localize(key));
    }
    if input_type == InputType::Confirm && data.deny_label.as_deref().map_or(true, str::is_empty) {
        data.deny_label = Some(localizer.localize(keys::NO));
    }
}
