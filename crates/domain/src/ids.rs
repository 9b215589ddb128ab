use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;
use crate::value_objects::LinkKind;

macro_rules! define_string_id {
    ($name:ident, $label:literal) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Parse a non-empty identifier, trimming surrounding whitespace.
            pub fn parse(value: impl AsRef<str>) -> Result<Self, DomainError> {
                let trimmed = value.as_ref().trim();
                if trimmed.is_empty() {
                    return Err(DomainError::invalid_id(concat!($label, " cannot be empty")));
                }
                Ok(Self(trimmed.to_string()))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_string(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }
    };
}

// Host document locator, e.g. `Compendium.world.spells.Item.abc123`
define_string_id!(DocumentUuid, "document uuid");

// Connected client identity
define_string_id!(UserId, "user id");

// Correlation token for cross-client dialog requests
define_string_id!(Signature, "signature");

impl DocumentUuid {
    /// Classify the locator by its shape.
    ///
    /// Embedded or compendium items contain `.Item.`, world-level items start
    /// with `Item.`; journal pages contain `.JournalEntryPage.`. Anything else
    /// renders as an inert label.
    pub fn link_kind(&self) -> LinkKind {
        if self.0.contains(".Item.") || self.0.starts_with("Item.") {
            LinkKind::Item
        } else if self.0.contains(".JournalEntryPage.") {
            LinkKind::JournalPage
        } else {
            LinkKind::Plain
        }
    }
}

impl Signature {
    /// Generate a process-unique correlation token.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }
}
