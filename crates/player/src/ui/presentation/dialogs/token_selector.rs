//! Token selector model

use std::sync::Arc;

use serde_json::{json, Value};

use super::completion::{self, DialogCompletion, DialogHandle};
use crate::ports::outbound::{localization_keys as keys, CanvasPort, CanvasToken, Localizer};

#[derive(Debug, Clone, PartialEq)]
pub struct SelectableToken {
    pub token: CanvasToken,
    pub selected: bool,
}

/// Pick tokens from a list, or from the active scene when none are given.
///
/// Confirm resolves the selected tokens; closing resolves an empty list.
pub struct TokenSelector {
    title: String,
    message: Option<String>,
    tokens: Vec<SelectableToken>,
    canvas: Arc<dyn CanvasPort>,
    completion: DialogCompletion<Vec<CanvasToken>>,
}

impl TokenSelector {
    pub fn open(
        tokens: Vec<CanvasToken>,
        message: Option<String>,
        canvas: Arc<dyn CanvasPort>,
        localizer: &dyn Localizer,
    ) -> (Self, DialogHandle<Vec<CanvasToken>>) {
        let tokens = if tokens.is_empty() { canvas.token_placeables() } else { tokens };
        let (completion, handle) = completion::channel(Vec::new());
        let selector = Self {
            title: localizer.localize(keys::TOKEN_SELECTOR_TITLE),
            message,
            tokens: tokens
                .into_iter()
                .map(|token| SelectableToken { token, selected: false })
                .collect(),
            canvas,
            completion,
        };
        (selector, handle)
    }

    pub fn tokens(&self) -> &[SelectableToken] {
        &self.tokens
    }

    /// Flip the selection of token `id`. Returns the new state, or `None`
    /// for an unknown id.
    pub fn toggle(&mut self, id: &str) -> Option<bool> {
        let entry = self.tokens.iter_mut().find(|t| t.token.id == id)?;
        entry.selected = !entry.selected;
        Some(entry.selected)
    }

    /// Ping the token on the canvas.
    pub fn ping(&self, id: &str) -> bool {
        match self.tokens.iter().find(|t| t.token.id == id) {
            Some(entry) => {
                self.canvas.ping(entry.token.center);
                true
            }
            None => false,
        }
    }

    pub fn confirm(mut self) {
        let selected = self
            .tokens
            .iter()
            .filter(|t| t.selected)
            .map(|t| t.token.clone())
            .collect();
        self.completion.resolve(selected);
    }

    pub fn close(mut self) {
        self.completion.close();
    }

    pub fn context(&self) -> Value {
        let tokens: Vec<Value> = self
            .tokens
            .iter()
            .map(|t| json!({ "token": t.token, "selected": t.selected }))
            .collect();
        json!({ "title": self.title, "message": self.message, "tokens": tokens })
    }
}
