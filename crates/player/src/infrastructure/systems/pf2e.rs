//! Pathfinder 2nd Edition tooltip adapter

use std::sync::Arc;

use async_trait::async_trait;
use pde_domain::value_objects::{escape_attr, get_value_from_path};
use pde_domain::{DisplayableEntity, Item};
use serde_json::Value;

use super::details::{box_wrapper, capitalize, damage_chip, labelled_chip, text};
use super::enrichment::enrich_description;
use crate::ports::outbound::{localization_keys as keys, Enricher, Localizer, SystemAdapter};

pub const PF2E_DESCRIPTION_PATH: &str = "system.description.value";

/// Action cost glyph for an action type and count.
pub fn action_glyph(action_type: &str, count: Option<u64>) -> Option<&'static str> {
    match (action_type, count) {
        ("reaction", _) => Some("⟲"),
        ("free", _) => Some("◇"),
        ("action", Some(1)) | ("", Some(1)) => Some("◆"),
        ("action", Some(2)) | ("", Some(2)) => Some("◆◆"),
        ("action", Some(3)) | ("", Some(3)) => Some("◆◆◆"),
        _ => None,
    }
}

pub struct Pf2eAdapter {
    enrichers: Vec<Arc<dyn Enricher>>,
    localizer: Arc<dyn Localizer>,
}

impl Pf2eAdapter {
    pub fn new(enrichers: Vec<Arc<dyn Enricher>>, localizer: Arc<dyn Localizer>) -> Self {
        Self {
            enrichers,
            localizer,
        }
    }

    fn item_chips(&self, item: &Item) -> Vec<String> {
        let system = &item.system;
        let field = |path: &str| get_value_from_path(system, path);
        let mut chips = Vec::new();

        let action_type = text(field("actionType.value")).unwrap_or_default();
        let count = field("actions.value").and_then(Value::as_u64);
        if let Some(glyph) = action_glyph(&action_type, count) {
            chips.push(format!("<div class=\"detail actions\">{glyph}</div>"));
        }

        if let Some(Value::Array(traits)) = field("traits.value") {
            chips.extend(
                traits
                    .iter()
                    .filter_map(|t| text(Some(t)))
                    .map(|t| format!("<div class=\"detail trait\">{}</div>", escape_attr(&capitalize(&t)))),
            );
        }

        if let Some(range) = text(field("range.value")) {
            chips.push(labelled_chip(&self.localizer.localize(keys::RANGE), &range));
        }
        if let Some(duration) = text(field("duration.value")) {
            chips.push(labelled_chip(&self.localizer.localize(keys::DURATION), &duration));
        }
        if let Some(target) = text(field("target.value")) {
            chips.push(labelled_chip(&self.localizer.localize(keys::TARGET), &target));
        }

        chips.extend(damage_chips(field("damage")));
        chips
    }
}

/// Spells carry a map of damage partials; weapons a single dice block.
fn damage_chips(damage: Option<&Value>) -> Vec<String> {
    let Some(Value::Object(map)) = damage else {
        return Vec::new();
    };

    if let Some(dice) = map.get("dice").and_then(Value::as_u64) {
        let die = text(map.get("die")).unwrap_or_default();
        let damage_type = text(map.get("damageType")).unwrap_or_default();
        return vec![damage_chip(&format!("{dice}{die}"), &damage_type)];
    }

    map.values()
        .filter_map(|partial| {
            let formula = text(partial.get("formula"))?;
            let damage_type = text(partial.get("type"))
                .or_else(|| text(partial.get("damageType")))
                .unwrap_or_default();
            Some(damage_chip(&formula, &damage_type))
        })
        .collect()
}

#[async_trait]
impl SystemAdapter for Pf2eAdapter {
    fn system_id(&self) -> &'static str {
        "pf2e"
    }

    fn item_description_path(&self) -> Option<&'static str> {
        Some(PF2E_DESCRIPTION_PATH)
    }

    fn seed_description_path(&self) -> Option<&'static str> {
        None
    }

    async fn enhance_description(&self, description: String) -> String {
        enrich_description(&description, &self.enrichers).await
    }

    fn compute_details(&self, entity: &DisplayableEntity) -> Option<String> {
        box_wrapper(self.item_chips(entity.as_item()?))
    }
}
