//! Link references parsed out of rich text

use serde::{Deserialize, Serialize};

use crate::DocumentUuid;

/// What clicking a link does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkKind {
    /// Drill into an item tooltip
    Item,
    /// Drill into a journal page tooltip
    JournalPage,
    /// Inert bolded label
    Plain,
}

impl LinkKind {
    /// CSS class carried by the rendered span, if the link navigates.
    pub fn css_class(&self) -> Option<&'static str> {
        match self {
            LinkKind::Item => Some("item-tooltip"),
            LinkKind::JournalPage => Some("journal-tooltip"),
            LinkKind::Plain => None,
        }
    }

    pub fn from_css_class(class: &str) -> Option<Self> {
        match class {
            "item-tooltip" => Some(LinkKind::Item),
            "journal-tooltip" => Some(LinkKind::JournalPage),
            _ => None,
        }
    }

    pub fn is_navigable(&self) -> bool {
        !matches!(self, LinkKind::Plain)
    }
}

/// A reference to another document embedded in a description
///
/// Resolution of `uuid` happens later and may fail; a failed resolution makes
/// the link inert rather than raising an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkReference {
    pub kind: LinkKind,
    pub uuid: Option<DocumentUuid>,
    pub label: String,
}

impl LinkReference {
    /// Build a reference from a raw identifier, classifying it by shape.
    ///
    /// An empty identifier yields an inert label.
    pub fn from_raw(raw_uuid: &str, label: impl Into<String>) -> Self {
        let uuid = DocumentUuid::parse(raw_uuid).ok();
        let kind = uuid.as_ref().map_or(LinkKind::Plain, DocumentUuid::link_kind);
        Self {
            kind,
            uuid,
            label: label.into(),
        }
    }

    pub fn item(uuid: DocumentUuid, label: impl Into<String>) -> Self {
        Self {
            kind: LinkKind::Item,
            uuid: Some(uuid),
            label: label.into(),
        }
    }

    pub fn journal_page(uuid: DocumentUuid, label: impl Into<String>) -> Self {
        Self {
            kind: LinkKind::JournalPage,
            uuid: Some(uuid),
            label: label.into(),
        }
    }

    /// Identifier to resolve on click, `None` for inert labels.
    pub fn navigation_target(&self) -> Option<&DocumentUuid> {
        if self.kind.is_navigable() {
            self.uuid.as_ref()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_raw_classifies_and_handles_empty() {
        let link = LinkReference::from_raw("Compendium.x.Item.y", "Dagger");
        assert_eq!(link.kind, LinkKind::Item);
        assert!(link.navigation_target().is_some());

        let empty = LinkReference::from_raw("", "Nothing");
        assert_eq!(empty.kind, LinkKind::Plain);
        assert_eq!(empty.navigation_target(), None);
    }

    #[test]
    fn plain_links_never_navigate() {
        let link = LinkReference::from_raw("Actor.abc", "Goblin");
        assert_eq!(link.kind, LinkKind::Plain);
        assert_eq!(link.navigation_target(), None);
    }

    #[test]
    fn css_class_round_trips() {
        for kind in [LinkKind::Item, LinkKind::JournalPage] {
            let class = kind.css_class().unwrap();
            assert_eq!(LinkKind::from_css_class(class), Some(kind));
        }
        assert_eq!(LinkKind::Plain.css_class(), None);
    }
}
