//! PDE domain: displayable entities, tooltip content and the pure text and
//! placement algorithms the tooltip engine is built from. No async, no I/O.

pub mod entities;
pub mod error;
pub mod ids;
pub mod value_objects;

pub use entities::{
    ActiveEffect, DisplayableEntity, Item, JournalEntryPage, PageText, DEFAULT_PAGE_IMAGE,
};

pub use error::DomainError;

pub use ids::{DocumentUuid, Signature, UserId};

pub use value_objects::{
    ContentSnapshot, LinkKind, LinkReference, NavigationHistory, OverlayPlacement,
    PointerPosition, PositionOverride, Rect, TooltipContent, Viewport,
};
