//! Built-in English translation table

use std::collections::HashMap;

use crate::ports::outbound::{localization_keys as keys, Localizer};

/// Localizer backed by a fixed table; unknown keys are returned unchanged.
#[derive(Debug, Clone)]
pub struct StaticLocalizer {
    table: HashMap<String, String>,
}

impl Default for StaticLocalizer {
    fn default() -> Self {
        Self::english()
    }
}

impl StaticLocalizer {
    pub fn english() -> Self {
        let entries = [
            (keys::HOLD_ALT, "Hold Alt to keep the tooltip open"),
            (keys::GO_BACK, "Right click to go back"),
            (keys::DISABLED, "Disabled"),
            (keys::TEMPORARY, "Temporary"),
            (keys::PASSIVE, "Passive"),
            (keys::YES, "Yes"),
            (keys::NO, "No"),
            (keys::CONFIRM, "Confirm"),
            (keys::DIALOG_TITLE, "Dialog"),
            (keys::TOKEN_SELECTOR_TITLE, "Select Tokens"),
            (keys::TEXT_EDITOR_TITLE, "Text Editor"),
            (keys::TO_HIT, "To Hit"),
            (keys::SAVE, "Save"),
            (keys::RANGE, "Range"),
            (keys::DURATION, "Duration"),
            (keys::TARGET, "Target"),
        ];
        Self::from_entries(entries)
    }

    pub fn from_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            table: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl Localizer for StaticLocalizer {
    fn localize(&self, key: &str) -> String {
        self.table
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}
