//! Host window framework port
//!
//! The presenter takes ownership of a dialog model and drives it from user
//! input. Dropping the model on any close path resolves the waiting caller
//! with the dialog's close value.

use crate::ui::presentation::dialogs::{InputDialog, TextEditor, TokenSelector};

#[cfg_attr(test, mockall::automock)]
pub trait DialogPresenter: Send + Sync {
    fn show_input_dialog(&self, dialog: InputDialog);

    fn show_token_selector(&self, selector: TokenSelector);

    fn show_text_editor(&self, editor: TextEditor);
}
