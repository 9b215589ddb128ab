//! D&D 5th Edition tooltip adapter

use std::sync::Arc;

use async_trait::async_trait;
use pde_domain::value_objects::get_value_from_path;
use pde_domain::{DisplayableEntity, Item};
use serde_json::Value;

use super::details::{box_wrapper, capitalize, chip, damage_chip, join_present, labelled_chip, text};
use super::enrichment::enrich_description;
use crate::ports::outbound::{localization_keys as keys, Enricher, Localizer, SystemAdapter};

pub const DND5E_DESCRIPTION_PATH: &str = "system.description.value";

const ATTACK_ACTION_TYPES: [&str; 4] = ["mwak", "rwak", "msak", "rsak"];

pub struct Dnd5eAdapter {
    enrichers: Vec<Arc<dyn Enricher>>,
    localizer: Arc<dyn Localizer>,
}

impl Dnd5eAdapter {
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

        if let Some(activation) = join_present(&[
            text(field("activation.cost")),
            text(field("activation.type")).map(|t| capitalize(&t)),
        ]) {
            chips.push(chip(&activation));
        }

        let action_type = text(field("actionType")).unwrap_or_default();
        if ATTACK_ACTION_TYPES.contains(&action_type.as_str()) {
            let label = self.localizer.localize(keys::TO_HIT);
            match text(field("attack.bonus")) {
                Some(bonus) => {
                    let bonus = if bonus.starts_with(['+', '-']) { bonus } else { format!("+{bonus}") };
                    chips.push(chip(&format!("{bonus} {label}")));
                }
                None => chips.push(chip(&label)),
            }
        }

        if let Some(ability) = text(field("save.ability")) {
            let save = self.localizer.localize(keys::SAVE);
            let label = match text(field("save.dc")) {
                Some(dc) => format!("DC {dc} {} {save}", ability.to_uppercase()),
                None => format!("{} {save}", ability.to_uppercase()),
            };
            chips.push(chip(&label));
        }

        if let Some(Value::Array(parts)) = field("damage.parts") {
            for part in parts {
                let formula = text(part.get(0));
                let damage_type = text(part.get(1)).unwrap_or_default();
                if let Some(formula) = formula {
                    chips.push(damage_chip(&formula, &damage_type));
                }
            }
        }

        if let Some(duration) = join_present(&[text(field("duration.value")), text(field("duration.units"))]) {
            chips.push(labelled_chip(&self.localizer.localize(keys::DURATION), &duration));
        }

        let range = match (text(field("range.value")), text(field("range.long"))) {
            (Some(normal), Some(long)) => Some(format!("{normal}/{long}")),
            (normal, _) => normal,
        };
        if let Some(range) = join_present(&[range, text(field("range.units"))]) {
            chips.push(labelled_chip(&self.localizer.localize(keys::RANGE), &range));
        }

        if let Some(target) = join_present(&[text(field("target.value")), text(field("target.type"))]) {
            chips.push(labelled_chip(&self.localizer.localize(keys::TARGET), &target));
        }

        chips
    }
}

#[async_trait]
impl SystemAdapter for Dnd5eAdapter {
    fn system_id(&self) -> &'static str {
        "dnd5e"
    }

    fn item_description_path(&self) -> Option<&'static str> {
        Some(DND5E_DESCRIPTION_PATH)
    }

    fn seed_description_path(&self) -> Option<&'static str> {
        Some(DND5E_DESCRIPTION_PATH)
    }

    async fn enhance_description(&self, description: String) -> String {
        enrich_description(&description, &self.enrichers).await
    }

    fn compute_details(&self, entity: &DisplayableEntity) -> Option<String> {
        box_wrapper(self.item_chips(entity.as_item()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::localization::StaticLocalizer;
    use pde_domain::{DocumentUuid, JournalEntryPage};
    use serde_json::json;

    fn adapter() -> Dnd5eAdapter {
        Dnd5eAdapter::new(vec![], Arc::new(StaticLocalizer::english()))
    }

    fn item(system: Value) -> DisplayableEntity {
        Item::new(DocumentUuid::parse("Item.x").unwrap(), "Thing", "thing.png")
            .with_system(system)
            .into()
    }

    #[test]
    fn renders_attack_spell_chips() {
        let fire_bolt = item(json!({
            "activation": { "type": "action", "cost": 1 },
            "actionType": "rsak",
            "attack": { "bonus": "2" },
            "damage": { "parts": [["1d10", "fire"]] },
            "range": { "value": 120, "units": "ft" },
            "target": { "value": 1, "type": "creature" }
        }));
        let details = adapter().compute_details(&fire_bolt).unwrap();

        assert!(details.starts_with("<div class=\"box-wrapper\">"));
        assert!(details.contains(">1 Action<"));
        assert!(details.contains(">+2 To Hit<"));
        assert!(details.contains("1d10 fire"));
        assert!(details.contains("#e25822"));
        assert!(details.contains(">Range: 120 ft<"));
        assert!(details.contains(">Target: 1 creature<"));
    }

    #[test]
    fn renders_save_and_duration() {
        let hold = item(json!({
            "save": { "ability": "wis", "dc": 15 },
            "duration": { "value": "1", "units": "minute" },
            "range": { "value": 80, "long": 320, "units": "ft" }
        }));
        let details = adapter().compute_details(&hold).unwrap();

        assert!(details.contains(">DC 15 WIS Save<"));
        assert!(details.contains(">Duration: 1 minute<"));
        assert!(details.contains(">Range: 80/320 ft<"));
    }

    #[test]
    fn no_chips_for_plain_items_or_other_documents() {
        assert_eq!(adapter().compute_details(&item(json!({}))), None);

        let page: DisplayableEntity =
            JournalEntryPage::new(DocumentUuid::parse("JournalEntry.a.JournalEntryPage.b").unwrap(), "P").into();
        assert_eq!(adapter().compute_details(&page), None);
    }

    #[tokio::test]
    async fn enhancement_normalizes_ampersands_without_enrichers() {
        let out = adapter().enhance_description("Salt &amp; Pepper".into()).await;
        assert_eq!(out, "Salt & Pepper");
    }
}
