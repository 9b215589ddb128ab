//! Detail chip markup shared by the system adapters

use pde_domain::value_objects::escape_attr;
use serde_json::Value;

/// Colour for a damage or healing type, if it has one.
pub fn damage_color(damage_type: &str) -> Option<&'static str> {
    let color = match damage_type.trim().to_ascii_lowercase().as_str() {
        "acid" => "#6aa84f",
        "bludgeoning" | "piercing" | "slashing" | "physical" | "bleed" => "#8b8b8b",
        "cold" => "#3d9cd9",
        "fire" => "#e25822",
        "force" => "#a64d79",
        "lightning" | "electricity" => "#8e7cc3",
        "necrotic" | "negative" | "void" => "#5b5b5b",
        "poison" => "#38761d",
        "psychic" | "mental" => "#c27ba0",
        "radiant" | "positive" | "vitality" => "#f1c232",
        "sonic" | "thunder" => "#7b68ee",
        "healing" | "temphp" => "#2e8b57",
        _ => return None,
    };
    Some(color)
}

/// Plain-text chip; the content is escaped.
pub fn chip(content: &str) -> String {
    format!("<div class=\"detail\">{}</div>", escape_attr(content))
}

pub fn labelled_chip(label: &str, value: &str) -> String {
    chip(&format!("{label}: {value}"))
}

pub fn damage_chip(formula: &str, damage_type: &str) -> String {
    let label = if damage_type.is_empty() {
        escape_attr(formula)
    } else {
        escape_attr(&format!("{formula} {damage_type}"))
    };
    match damage_color(damage_type) {
        Some(color) => format!(
            "<div class=\"detail damage\" style=\"background-color: {color};\" data-damage-type=\"{}\">{label}</div>",
            escape_attr(damage_type)
        ),
        None => format!("<div class=\"detail damage\">{label}</div>"),
    }
}

/// Wrap chips in their container; no chips means no details section.
pub fn box_wrapper(chips: Vec<String>) -> Option<String> {
    if chips.is_empty() {
        None
    } else {
        Some(format!("<div class=\"box-wrapper\">{}</div>", chips.concat()))
    }
}

/// Non-empty display text for a scalar JSON value.
pub fn text(value: Option<&Value>) -> Option<String> {
    let text = match value? {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(_) | Value::Null | Value::Array(_) | Value::Object(_) => return None,
    };
    (!text.is_empty()).then_some(text)
}

/// Join the present parts with single spaces.
pub fn join_present(parts: &[Option<String>]) -> Option<String> {
    let joined = parts
        .iter()
        .flatten()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ");
    (!joined.is_empty()).then_some(joined)
}

pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
