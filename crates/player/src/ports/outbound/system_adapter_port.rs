//! Game-system extension point for the tooltip engine

use async_trait::async_trait;
use pde_domain::DisplayableEntity;
use regex_lite::{Captures, Regex};

/// One match of an enricher pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnricherMatch {
    /// Whole matched text
    pub full: String,
    /// Capture groups 1.., `None` where a group did not participate
    pub groups: Vec<Option<String>>,
}

impl EnricherMatch {
    pub fn from_captures(caps: &Captures<'_>) -> Self {
        Self {
            full: caps.get(0).map(|m| m.as_str().to_string()).unwrap_or_default(),
            groups: caps
                .iter()
                .skip(1)
                .map(|group| group.map(|m| m.as_str().to_string()))
                .collect(),
        }
    }

    /// Capture group by 1-based index, ignoring empty captures.
    pub fn group(&self, index: usize) -> Option<&str> {
        index
            .checked_sub(1)
            .and_then(|i| self.groups.get(i))
            .and_then(|g| g.as_deref())
            .filter(|g| !g.is_empty())
    }

    /// Text used as a link label: group 2, else group 1, else the whole match.
    pub fn label(&self) -> &str {
        self.group(2).or_else(|| self.group(1)).unwrap_or(&self.full)
    }
}

/// A host text enricher: a pattern plus a transform producing an HTML fragment
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Enricher: Send + Sync {
    fn pattern(&self) -> Regex;

    /// Enriched fragment for a match, `None` when the enricher declines.
    async fn enrich(&self, found: &EnricherMatch) -> Option<String>;
}

/// Capabilities a game system contributes to tooltips
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SystemAdapter: Send + Sync {
    fn system_id(&self) -> &'static str;

    /// Default item description path for this system.
    fn item_description_path(&self) -> Option<&'static str>;

    /// Value written into an empty description-path setting at startup.
    fn seed_description_path(&self) -> Option<&'static str>;

    /// System-specific description enrichment; the identity for systems without one.
    async fn enhance_description(&self, description: String) -> String;

    /// Detail chips for an entity, if the system renders any.
    fn compute_details(&self, entity: &DisplayableEntity) -> Option<String>;
}
