//! Dialog window models
//!
//! The host window framework renders these; the models own the state and
//! the completion that resolves the waiting caller.

pub mod completion;
pub mod form_controls;
mod input_dialog;
mod text_editor;
mod token_selector;

pub use completion::{DialogCompletion, DialogHandle};
pub use input_dialog::{DialogButton, InputDialog};
pub use text_editor::TextEditor;
pub use token_selector::{SelectableToken, TokenSelector};
