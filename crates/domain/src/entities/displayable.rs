//! Displayable entity - the closed set of documents a tooltip can show
//!
//! The host resolves identifiers into one of three document kinds. Every
//! operation the tooltip engine needs is dispatched here by variant instead
//! of by runtime type checks.

use serde::{Deserialize, Serialize};

use super::{ActiveEffect, Item, JournalEntryPage};
use crate::DocumentUuid;

/// Image shown for journal pages, which carry no image of their own.
pub const DEFAULT_PAGE_IMAGE: &str = "icons/svg/book.svg";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "documentName")]
pub enum DisplayableEntity {
    Item(Item),
    #[serde(rename = "ActiveEffect")]
    Effect(ActiveEffect),
    #[serde(rename = "JournalEntryPage")]
    Page(JournalEntryPage),
}

impl DisplayableEntity {
    pub fn uuid(&self) -> &DocumentUuid {
        match self {
            Self::Item(item) => &item.uuid,
            Self::Effect(effect) => &effect.uuid,
            Self::Page(page) => &page.uuid,
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            Self::Item(item) => &item.name,
            Self::Effect(effect) => &effect.name,
            Self::Page(page) => &page.name,
        }
    }

    pub fn image(&self) -> &str {
        match self {
            Self::Item(item) => &item.img,
            Self::Effect(effect) => &effect.img,
            Self::Page(_) => DEFAULT_PAGE_IMAGE,
        }
    }

    /// Raw rich-text description.
    ///
    /// `item_path` is only consulted for items; effects and pages have fixed
    /// description fields.
    pub fn description_field(&self, item_path: &str) -> Option<String> {
        match self {
            Self::Item(item) => item.description_at(item_path),
            Self::Effect(effect) => effect.description.clone(),
            Self::Page(page) => page.text.content.clone(),
        }
    }

    pub fn as_item(&self) -> Option<&Item> {
        match self {
            Self::Item(item) => Some(item),
            _ => None,
        }
    }
}

impl From<Item> for DisplayableEntity {
    fn from(value: Item) -> Self {
        Self::Item(value)
    }
}

impl From<ActiveEffect> for DisplayableEntity {
    fn from(value: ActiveEffect) -> Self {
        Self::Effect(value)
    }
}

impl From<JournalEntryPage> for DisplayableEntity {
    fn from(value: JournalEntryPage) -> Self {
        Self::Page(value)
    }
}
