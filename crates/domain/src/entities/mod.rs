//! Domain entities - documents owned by the host that the tooltip engine reads

mod active_effect;
mod displayable;
mod item;
mod journal_page;

pub use active_effect::ActiveEffect;
pub use displayable::{DisplayableEntity, DEFAULT_PAGE_IMAGE};
pub use item::Item;
pub use journal_page::{JournalEntryPage, PageText};
