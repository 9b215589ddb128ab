//! Rich text editor model

use serde_json::{json, Value};

use super::completion::{self, DialogCompletion, DialogHandle};
use crate::ports::outbound::{localization_keys as keys, Localizer};

/// Save resolves the edited text; closing resolves the original text.
pub struct TextEditor {
    title: String,
    text: String,
    completion: DialogCompletion<String>,
}

impl TextEditor {
    pub fn open(text: impl Into<String>, localizer: &dyn Localizer) -> (Self, DialogHandle<String>) {
        let text = text.into();
        let (completion, handle) = completion::channel(text.clone());
        let editor = Self {
            title: localizer.localize(keys::TEXT_EDITOR_TITLE),
            text,
            completion,
        };
        (editor, handle)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn save(mut self, edited: impl Into<String>) {
        self.completion.resolve(edited.into());
    }

    pub fn close(mut self) {
        self.completion.close();
    }

    pub fn context(&self) -> Value {
        json!({ "title": self.title, "text": self.text })
    }
}
