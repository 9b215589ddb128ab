//! Typed form controls for dialog windows
//!
//! Controls are tagged in markup with `data-ctype` and `data-path`. Change
//! events carry the raw input text; mouse-down events carry the button.
//! Either way the result is a [`FormUpdate`] applied to the form document
//! by dot path.

use std::collections::HashMap;

use pde_domain::value_objects::{get_value_from_path, set_value_for_path};
use pde_domain::DomainError;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    String,
    Numeric { nullable: bool },
    /// Left click steps up to `max`, right click steps down to `min`
    Toggle { min: i64, max: i64 },
    /// Any click flips a boolean
    Activable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

impl MouseButton {
    /// Map a DOM `MouseEvent.button` code.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Left),
            1 => Some(Self::Middle),
            2 => Some(Self::Right),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormUpdate {
    pub path: String,
    pub value: Value,
    /// Update the dialog's own state rather than the backing document
    pub non_db: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlEvent {
    pub kind: ControlKind,
    pub path: String,
    pub non_db: bool,
}

impl ControlEvent {
    /// Read a control from its element dataset. Untagged elements yield `None`.
    pub fn from_dataset(dataset: &HashMap<String, String>) -> Option<Self> {
        let bound = |key: &str| dataset.get(key).and_then(|v| parse_int(v)).unwrap_or(0);
        let kind = match dataset.get("ctype")?.as_str() {
            "string" => ControlKind::String,
            "numeric" => ControlKind::Numeric { nullable: false },
            "numeric-nullable" => ControlKind::Numeric { nullable: true },
            "toggle" => ControlKind::Toggle {
                min: bound("min"),
                max: bound("max"),
            },
            "activable" => ControlKind::Activable,
            _ => return None,
        };
        Some(Self {
            kind,
            path: dataset.get("path")?.clone(),
            non_db: dataset.get("nonDb").is_some_and(|v| !v.is_empty()),
        })
    }

    /// Update for a change event; mouse-driven controls ignore changes.
    pub fn on_change(&self, raw: &str) -> Option<FormUpdate> {
        let value = match self.kind {
            ControlKind::String => Value::String(raw.to_string()),
            ControlKind::Numeric { nullable } => match parse_int(raw) {
                Some(n) => Value::from(n),
                None if nullable => Value::Null,
                None => {
                    tracing::debug!(path = %self.path, raw, "Ignoring non-numeric input");
                    return None;
                }
            },
            ControlKind::Toggle { .. } | ControlKind::Activable => return None,
        };
        Some(self.update(value))
    }

    /// Update for a mouse-down event, computed from the current form state.
    pub fn on_mouse_down(&self, button: MouseButton, form: &Value) -> Option<FormUpdate> {
        let current = get_value_from_path(form, &self.path);
        match self.kind {
            ControlKind::Toggle { min, max } => {
                let value = current.and_then(Value::as_i64).unwrap_or(0);
                let next = match button {
                    MouseButton::Left => (value + 1).min(max),
                    MouseButton::Right => (value - 1).max(min),
                    MouseButton::Middle => value,
                };
                Some(self.update(Value::from(next)))
            }
            ControlKind::Activable => {
                let active = current.is_some_and(is_truthy);
                Some(self.update(Value::Bool(!active)))
            }
            ControlKind::String | ControlKind::Numeric { .. } => None,
        }
    }

    fn update(&self, value: Value) -> FormUpdate {
        FormUpdate {
            path: self.path.clone(),
            value,
            non_db: self.non_db,
        }
    }
}

pub fn apply_update(form: &mut Value, update: FormUpdate) -> Result<(), DomainError> {
    set_value_for_path(form, &update.path, update.value)
}

/// Leading-integer parse: `"12abc"` is 12, `"abc"` is nothing.
fn parse_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let digits_end = trimmed
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || (i == 0 && (c == '-' || c == '+'))))
        .map_or(trimmed.len(), |(i, _)| i);
    trimmed[..digits_end].parse().ok()
}

/// JavaScript-style truthiness of a form value
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn dataset(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn reads_controls_from_dataset() {
        let event = ControlEvent::from_dataset(&dataset(&[
            ("ctype", "toggle"),
            ("path", "system.uses"),
            ("max", "3"),
        ]))
        .unwrap();
        assert_eq!(event.kind, ControlKind::Toggle { min: 0, max: 3 });
        assert!(!event.non_db);

        assert!(ControlEvent::from_dataset(&dataset(&[("path", "a")])).is_none());
        assert!(ControlEvent::from_dataset(&dataset(&[("ctype", "unknown"), ("path", "a")])).is_none());
    }

    #[test]
    fn numeric_changes_store_the_parsed_number() {
        let numeric = ControlEvent::from_dataset(&dataset(&[("ctype", "numeric"), ("path", "n")])).unwrap();
        assert_eq!(numeric.on_change("12abc").unwrap().value, json!(12));
        assert_eq!(numeric.on_change("-4").unwrap().value, json!(-4));
        assert!(numeric.on_change("abc").is_none());

        let nullable =
            ControlEvent::from_dataset(&dataset(&[("ctype", "numeric-nullable"), ("path", "n")])).unwrap();
        assert_eq!(nullable.on_change("").unwrap().value, Value::Null);
    }

    #[test]
    fn toggles_step_within_bounds() {
        let form = json!({ "uses": 2 });
        let toggle = ControlEvent {
            kind: ControlKind::Toggle { min: 0, max: 2 },
            path: "uses".into(),
            non_db: true,
        };
        assert_eq!(toggle.on_mouse_down(MouseButton::Left, &form).unwrap().value, json!(2));
        assert_eq!(toggle.on_mouse_down(MouseButton::Right, &form).unwrap().value, json!(1));
        assert_eq!(toggle.on_mouse_down(MouseButton::Middle, &form).unwrap().value, json!(2));
    }

    #[test]
    fn activable_flips_and_applies_by_path() {
        let mut form = json!({ "flags": { "active": false } });
        let activable = ControlEvent::from_dataset(&dataset(&[
            ("ctype", "activable"),
            ("path", "flags.active"),
            ("nonDb", "true"),
        ]))
        .unwrap();

        let update = activable.on_mouse_down(MouseButton::Left, &form).unwrap();
        assert!(update.non_db);
        apply_update(&mut form, update).unwrap();
        assert_eq!(form, json!({ "flags": { "active": true } }));
        assert!(activable.on_change("x").is_none());
    }

    #[test]
    fn string_changes_create_missing_objects() {
        let mut form = json!({});
        let event = ControlEvent::from_dataset(&dataset(&[("ctype", "string"), ("path", "a.b")])).unwrap();
        apply_update(&mut form, event.on_change("hello").unwrap()).unwrap();
        assert_eq!(form, json!({ "a": { "b": "hello" } }));
    }
}
