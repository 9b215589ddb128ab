//! Journal entry page entity - a page of rich text inside a journal

use serde::{Deserialize, Serialize};

use crate::DocumentUuid;

/// Text body of a page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageText {
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntryPage {
    pub uuid: DocumentUuid,
    pub name: String,
    #[serde(default)]
    pub text: PageText,
}

impl JournalEntryPage {
    pub fn new(uuid: DocumentUuid, name: impl Into<String>) -> Self {
        Self {
            uuid,
            name: name.into(),
            text: PageText::default(),
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.text.content = Some(content.into());
        self
    }
}
