//! Item entity - a host document with system-specific data
//!
//! The structured `system` payload is owned by the active game system; the
//! domain only reads it through dot-notation paths (see
//! [`crate::value_objects::field_path`]).

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::value_objects::get_value_from_path;
use crate::DocumentUuid;

/// An item as exposed by the host document store
///
/// Read-only from this crate's point of view: resolution clones what it
/// needs and never writes back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub uuid: DocumentUuid,
    pub name: String,
    pub img: String,
    /// System item type (e.g. "spell", "weapon", "feat")
    #[serde(rename = "type", default)]
    pub item_type: String,
    /// System-specific data, shape depends on the game system
    #[serde(default)]
    pub system: Value,
}

impl Item {
    pub fn new(uuid: DocumentUuid, name: impl Into<String>, img: impl Into<String>) -> Self {
        Self {
            uuid,
            name: name.into(),
            img: img.into(),
            item_type: String::new(),
            system: Value::Object(Default::default()),
        }
    }

    pub fn with_type(mut self, item_type: impl Into<String>) -> Self {
        self.item_type = item_type.into();
        self
    }

    pub fn with_system(mut self, system: Value) -> Self {
        self.system = system;
        self
    }

    /// Whole-document view used for dot-path lookups (`name`, `type`, `system.*`).
    pub fn document(&self) -> Value {
        json!({
            "uuid": self.uuid.as_str(),
            "name": self.name,
            "img": self.img,
            "type": self.item_type,
            "system": self.system,
        })
    }

    /// Look up the rich-text description at `path`.
    ///
    /// A string value is returned as-is. An object carrying a string `value`
    /// (the common `{ value: "<p>..</p>" }` shape) yields that string.
    pub fn description_at(&self, path: &str) -> Option<String> {
        let document = self.document();
        match get_value_from_path(&document, path)? {
            Value::String(text) => Some(text.clone()),
            Value::Object(map) => map.get("value").and_then(Value::as_str).map(str::to_string),
            _ => None,
        }
    }
}
