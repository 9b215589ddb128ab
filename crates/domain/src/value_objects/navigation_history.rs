//! Back-navigation stack for a single tooltip overlay

use super::tooltip_content::ContentSnapshot;

/// LIFO of previously displayed content
///
/// Pushed only when the user follows a link, popped on right-click, and
/// cleared when the overlay hides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationHistory {
    entries: Vec<ContentSnapshot>,
}

impl NavigationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, snapshot: ContentSnapshot) {
        self.entries.push(snapshot);
    }

    pub fn pop(&mut self) -> Option<ContentSnapshot> {
        self.entries.pop()
    }

    pub fn peek(&self) -> Option<&ContentSnapshot> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
