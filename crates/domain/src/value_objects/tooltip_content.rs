//! Resolved tooltip content

use serde::{Deserialize, Serialize};

/// Header and description as they were displayed, kept for back navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentSnapshot {
    pub header: String,
    pub description: String,
}

/// Fragments shown in the overlay for one resolved entity
///
/// Produced fresh per resolution. An absent fragment hides its section (and
/// the underline separating it from the next one).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TooltipContent {
    pub header: String,
    pub description: String,
    pub details: Option<String>,
}

impl TooltipContent {
    pub fn new(header: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            description: description.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: Option<String>) -> Self {
        self.details = details.filter(|d| !d.is_empty());
        self
    }

    pub fn has_details(&self) -> bool {
        self.details.is_some()
    }

    pub fn snapshot(&self) -> ContentSnapshot {
        ContentSnapshot {
            header: self.header.clone(),
            description: self.description.clone(),
        }
    }

    /// Swap in a drilled-into document. Details are dropped.
    pub fn replace_for_navigation(&mut self, header: String, description: String) {
        self.header = header;
        self.description = description;
        self.details = None;
    }

    /// Restore a snapshot; details keep whatever they currently are.
    pub fn restore(&mut self, snapshot: ContentSnapshot) {
        self.header = snapshot.header;
        self.description = snapshot.description;
    }
}
