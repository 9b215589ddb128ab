//! Active effect entity - a temporary or passive modifier applied to an actor

use serde::{Deserialize, Serialize};

use crate::DocumentUuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveEffect {
    pub uuid: DocumentUuid,
    pub name: String,
    pub img: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub disabled: bool,
    /// Whether the effect has a finite duration
    #[serde(default)]
    pub is_temporary: bool,
}

impl ActiveEffect {
    pub fn new(uuid: DocumentUuid, name: impl Into<String>, img: impl Into<String>) -> Self {
        Self {
            uuid,
            name: name.into(),
            img: img.into(),
            description: None,
            disabled: false,
            is_temporary: false,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
