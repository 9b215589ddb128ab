//! Tooltip Service - resolves documents into tooltip content
//!
//! Pipeline for a description field:
//! 1. read the raw field (item path from settings, then the system default)
//! 2. expand `@Embed[...]` directives, single pass
//! 3. normalize `&amp;` and run the system's enrichment hook
//! 4. rewrite `@UUID[...]{...}` markers into clickable spans
//! 5. strip inline styles and wrap in the description container
//!
//! Missing documents are never errors: unresolved embeds stay verbatim and
//! unresolved links produce no content.

use std::sync::Arc;

use pde_domain::value_objects::{
    clear_styles, find_embed_directives, render_header, rewrite_uuid_links, unescape_ampersands,
    wrap_description,
};
use pde_domain::{ActiveEffect, DisplayableEntity, DocumentUuid, TooltipContent};

use crate::ports::outbound::{
    localization_keys as keys, DocumentResolver, Localizer, SettingsPort, SystemAdapter,
    FALLBACK_DESCRIPTION_PATH,
};

/// Header text and image supplied by the hovered element
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderOverrides {
    pub header: Option<String>,
    pub img: Option<String>,
}

#[derive(Clone)]
pub struct TooltipService {
    resolver: Arc<dyn DocumentResolver>,
    settings: Arc<dyn SettingsPort>,
    localizer: Arc<dyn Localizer>,
    system: Arc<dyn SystemAdapter>,
}

impl TooltipService {
    pub fn new(
        resolver: Arc<dyn DocumentResolver>,
        settings: Arc<dyn SettingsPort>,
        localizer: Arc<dyn Localizer>,
        system: Arc<dyn SystemAdapter>,
    ) -> Self {
        Self {
            resolver,
            settings,
            localizer,
            system,
        }
    }

    pub fn localizer(&self) -> &dyn Localizer {
        self.localizer.as_ref()
    }

    /// Effective item description path
    pub async fn description_path(&self) -> String {
        match self.settings.get().await {
            Ok(settings) => {
                if let Some(path) = settings.item_description_path() {
                    return path.to_string();
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read tooltip settings, using default path");
            }
        }
        self.system
            .item_description_path()
            .unwrap_or(FALLBACK_DESCRIPTION_PATH)
            .to_string()
    }

    pub async fn resolve(&self, uuid: &DocumentUuid) -> Option<DisplayableEntity> {
        let entity = self.resolver.from_uuid(uuid).await;
        if entity.is_none() {
            tracing::debug!(uuid = %uuid, "Document not found for tooltip");
        }
        entity
    }

    /// Full tooltip content for an entity.
    ///
    /// Header overrides only apply to journal pages, which have no image or
    /// meaningful title of their own.
    pub async fn content_for(
        &self,
        entity: &DisplayableEntity,
        overrides: &HeaderOverrides,
    ) -> TooltipContent {
        let path = self.description_path().await;
        let raw = entity.description_field(&path);
        let description = self.render_description_with_path(raw.as_deref(), &path).await;

        let header = match entity {
            DisplayableEntity::Page(_) => self.header_for(entity, overrides),
            _ => self.header_for(entity, &HeaderOverrides::default()),
        };
        let details = match entity {
            DisplayableEntity::Item(_) => self.system.compute_details(entity),
            DisplayableEntity::Effect(effect) => Some(self.effect_details(effect)),
            DisplayableEntity::Page(_) => None,
        };
        TooltipContent::new(header, description).with_details(details)
    }

    pub async fn content_for_uuid(
        &self,
        uuid: &DocumentUuid,
        overrides: &HeaderOverrides,
    ) -> Option<TooltipContent> {
        let entity = self.resolve(uuid).await?;
        Some(self.content_for(&entity, overrides).await)
    }

    /// Header and description for drill-in navigation; details are left out.
    pub async fn navigation_content(&self, entity: &DisplayableEntity) -> (String, String) {
        let content = self.content_for(entity, &HeaderOverrides::default()).await;
        (content.header, content.description)
    }

    pub async fn render_description(&self, raw: Option<&str>) -> String {
        let path = self.description_path().await;
        self.render_description_with_path(raw, &path).await
    }

    async fn render_description_with_path(&self, raw: Option<&str>, item_path: &str) -> String {
        let Some(raw) = raw.filter(|text| !text.is_empty()) else {
            return wrap_description(None);
        };

        let expanded = self.expand_embeds(raw, item_path).await;
        let normalized = unescape_ampersands(&expanded);
        let enhanced = self.system.enhance_description(normalized).await;
        let linked = rewrite_uuid_links(&enhanced);
        wrap_description(Some(&clear_styles(&linked)))
    }

    /// Substitute each embed directive with its target's description.
    ///
    /// Inserted text is not rescanned, so an embedded description that
    /// itself embeds stays as written.
    async fn expand_embeds(&self, text: &str, item_path: &str) -> String {
        let mut expanded = String::with_capacity(text.len());
        let mut cursor = 0;
        for directive in find_embed_directives(text) {
            expanded.push_str(&text[cursor..directive.span.start]);
            cursor = directive.span.end;

            let inner = match self.resolver.from_uuid(&directive.uuid).await {
                Some(target) => target.description_field(item_path),
                None => None,
            };
            match inner {
                Some(inner) => expanded.push_str(&inner),
                None => {
                    tracing::debug!(uuid = %directive.uuid, "Leaving unresolvable embed in place");
                    expanded.push_str(&directive.raw);
                }
            }
        }
        expanded.push_str(&text[cursor..]);
        expanded
    }

    fn header_for(&self, entity: &DisplayableEntity, overrides: &HeaderOverrides) -> String {
        let img = overrides.img.as_deref().unwrap_or_else(|| entity.image());
        let name = overrides.header.as_deref().unwrap_or_else(|| entity.display_name());
        render_header(img, name)
    }

    fn effect_details(&self, effect: &ActiveEffect) -> String {
        let mut chips = String::new();
        if effect.disabled {
            chips.push_str(&format!(
                "<div class=\"detail\"><i class=\"fa-solid fa-hourglass\"></i> {}</div>",
                self.localizer.localize(keys::DISABLED)
            ));
        }
        let duration = if effect.is_temporary { keys::TEMPORARY } else { keys::PASSIVE };
        chips.push_str(&format!("<div class=\"detail\">{}</div>", self.localizer.localize(duration)));
        format!("<div class=\"box-wrapper\">{chips}</div>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::localization::StaticLocalizer;
    use crate::ports::outbound::{MockDocumentResolver, MockSettingsPort, MockSystemAdapter, ModuleSettings};
    use pde_domain::value_objects::parse_rendered_links;
    use pde_domain::{Item, JournalEntryPage, LinkKind, DEFAULT_PAGE_IMAGE};
    use serde_json::json;

    fn uuid(s: &str) -> DocumentUuid {
        DocumentUuid::parse(s).unwrap()
    }

    fn settings(path: &str) -> MockSettingsPort {
        let path = path.to_string();
        let mut settings = MockSettingsPort::new();
        settings.expect_get().returning(move || {
            Ok(ModuleSettings {
                tooltip_item_description_path: path.clone(),
            })
        });
        settings
    }

    fn passthrough_system() -> MockSystemAdapter {
        let mut system = MockSystemAdapter::new();
        system.expect_item_description_path().return_const(None);
        system.expect_enhance_description().returning(|text| text);
        system.expect_compute_details().returning(|_| None);
        system
    }

    fn service(resolver: MockDocumentResolver, settings: MockSettingsPort, system: MockSystemAdapter) -> TooltipService {
        TooltipService::new(
            Arc::new(resolver),
            Arc::new(settings),
            Arc::new(StaticLocalizer::english()),
            Arc::new(system),
        )
    }

    fn sword() -> DisplayableEntity {
        Item::new(uuid("Compendium.pack.Item.sword"), "Sword", "sword.png")
            .with_system(json!({ "description": { "value": "<p style=\"color: red\">Sharp &amp; shiny</p>" } }))
            .into()
    }

    #[tokio::test]
    async fn description_path_prefers_setting_then_system_then_fallback() {
        let svc = service(MockDocumentResolver::new(), settings("system.custom"), passthrough_system());
        assert_eq!(svc.description_path().await, "system.custom");

        let mut system = MockSystemAdapter::new();
        system.expect_item_description_path().return_const(Some("system.description.value"));
        let svc = service(MockDocumentResolver::new(), settings("  "), system);
        assert_eq!(svc.description_path().await, "system.description.value");

        let svc = service(MockDocumentResolver::new(), settings(""), passthrough_system());
        assert_eq!(svc.description_path().await, FALLBACK_DESCRIPTION_PATH);
    }

    #[tokio::test]
    async fn item_content_strips_styles_and_includes_details() {
        let mut system = MockSystemAdapter::new();
        system.expect_item_description_path().return_const(None);
        system.expect_enhance_description().returning(|text| text);
        system
            .expect_compute_details()
            .returning(|_| Some("<div class=\"box-wrapper\">chips</div>".into()));
        let svc = service(MockDocumentResolver::new(), settings("system.description.value"), system);

        let content = svc.content_for(&sword(), &HeaderOverrides::default()).await;
        assert_eq!(content.description, "<div class='description'> <p >Sharp & shiny</p> </div>");
        assert!(content.header.contains("src=\"sword.png\""));
        assert!(content.header.contains("value=\"Sword\""));
        assert_eq!(content.details.as_deref(), Some("<div class=\"box-wrapper\">chips</div>"));
    }

    #[tokio::test]
    async fn missing_description_yields_empty_container() {
        let svc = service(MockDocumentResolver::new(), settings("system.nothing"), passthrough_system());
        let content = svc.content_for(&sword(), &HeaderOverrides::default()).await;
        assert_eq!(content.description, "<div class='description'></div>");
    }

    #[tokio::test]
    async fn uuid_links_round_trip_through_rendering() {
        let svc = service(MockDocumentResolver::new(), settings(""), passthrough_system());
        let html = svc
            .render_description(Some(
                "Use @UUID[Compendium.pack.Item.rope]{Rope} or read @UUID[JournalEntry.j.JournalEntryPage.p]{Rules}, not @UUID[Actor.x]{Bob}",
            ))
            .await;

        let links = parse_rendered_links(&html);
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].kind, LinkKind::Item);
        assert_eq!(links[0].uuid.as_ref().map(|u| u.as_str()), Some("Compendium.pack.Item.rope"));
        assert_eq!(links[0].label, "Rope");
        assert_eq!(links[1].kind, LinkKind::JournalPage);
        assert_eq!(links[1].label, "Rules");
        assert!(html.contains("<span><b>Bob</b></span>"));
    }

    #[tokio::test]
    async fn text_without_embeds_is_unchanged_apart_from_ampersands() {
        let mut resolver = MockDocumentResolver::new();
        resolver.expect_from_uuid().never();
        let svc = service(resolver, settings(""), passthrough_system());

        let html = svc.render_description(Some("<p>Salt &amp; pepper</p>")).await;
        assert_eq!(html, "<div class='description'> <p>Salt & pepper</p> </div>");
    }

    #[tokio::test]
    async fn unresolvable_embed_is_left_verbatim() {
        let mut resolver = MockDocumentResolver::new();
        resolver.expect_from_uuid().returning(|_| None);
        let svc = service(resolver, settings(""), passthrough_system());

        let html = svc.render_description(Some("Before @Embed[bogus.id inline] after")).await;
        assert_eq!(html, "<div class='description'> Before @Embed[bogus.id inline] after </div>");
    }

    #[tokio::test]
    async fn embedded_text_repeating_a_later_directive_is_not_expanded() {
        let mut resolver = MockDocumentResolver::new();
        resolver.expect_from_uuid().returning(|id| {
            let body = match id.as_str() {
                "JournalEntry.j.JournalEntryPage.a" => "A-says @Embed[JournalEntry.j.JournalEntryPage.b]",
                _ => "B-BODY",
            };
            Some(JournalEntryPage::new(id.clone(), "Page").with_content(body).into())
        });
        let svc = service(resolver, settings(""), passthrough_system());

        let html = svc
            .render_description(Some(
                "@Embed[JournalEntry.j.JournalEntryPage.a] | @Embed[JournalEntry.j.JournalEntryPage.b]",
            ))
            .await;
        assert_eq!(
            html,
            "<div class='description'> A-says @Embed[JournalEntry.j.JournalEntryPage.b] | B-BODY </div>"
        );
    }

    #[tokio::test]
    async fn embeds_expand_once_without_rescanning() {
        let mut resolver = MockDocumentResolver::new();
        resolver
            .expect_from_uuid()
            .withf(|id| id.as_str() == "JournalEntry.j.JournalEntryPage.p")
            .times(1)
            .returning(|id| {
                Some(
                    JournalEntryPage::new(id.clone(), "Inner")
                        .with_content("<p>inner @Embed[Item.deeper]</p>")
                        .into(),
                )
            });
        let svc = service(resolver, settings(""), passthrough_system());

        let html = svc
            .render_description(Some("@Embed[JournalEntry.j.JournalEntryPage.p inline]"))
            .await;
        assert_eq!(html, "<div class='description'> <p>inner @Embed[Item.deeper]</p> </div>");
    }

    #[tokio::test]
    async fn enrichment_runs_before_link_rewrite() {
        let mut system = MockSystemAdapter::new();
        system.expect_item_description_path().return_const(None);
        system
            .expect_enhance_description()
            .withf(|text| text == "Cast [[/cast fireball]]")
            .returning(|_| "Cast @UUID[Compendium.spells.Item.fb]{Fireball}".to_string());
        let svc = service(MockDocumentResolver::new(), settings(""), system);

        let html = svc.render_description(Some("Cast [[/cast fireball]]")).await;
        assert_eq!(
            html,
            "<div class='description'> Cast <span class=\"item-tooltip hyperlink-style\" data-uuid=\"Compendium.spells.Item.fb\">Fireball</span> </div>"
        );
    }

    #[tokio::test]
    async fn effect_details_show_state() {
        let svc = service(MockDocumentResolver::new(), settings(""), passthrough_system());
        let mut effect = ActiveEffect::new(uuid("Actor.a.ActiveEffect.e"), "Bless", "bless.png");
        effect.disabled = true;
        effect.is_temporary = true;

        let content = svc.content_for(&effect.into(), &HeaderOverrides::default()).await;
        let details = content.details.unwrap();
        assert!(details.starts_with("<div class=\"box-wrapper\">"));
        assert!(details.contains("fa-hourglass"));
        assert!(details.contains("Disabled"));
        assert!(details.contains("Temporary"));
        assert!(!details.contains("Passive"));
    }

    #[tokio::test]
    async fn journal_pages_honour_header_overrides() {
        let svc = service(MockDocumentResolver::new(), settings(""), passthrough_system());
        let page: DisplayableEntity = JournalEntryPage::new(uuid("JournalEntry.j.JournalEntryPage.p"), "Rules")
            .with_content("<p>Text</p>")
            .into();

        let plain = svc.content_for(&page, &HeaderOverrides::default()).await;
        assert!(plain.header.contains(DEFAULT_PAGE_IMAGE));
        assert!(plain.header.contains("value=\"Rules\""));
        assert!(plain.details.is_none());

        let overrides = HeaderOverrides {
            header: Some("Chapter 1".into()),
            img: Some("map.png".into()),
        };
        let custom = svc.content_for(&page, &overrides).await;
        assert!(custom.header.contains("src=\"map.png\""));
        assert!(custom.header.contains("value=\"Chapter 1\""));
    }

    #[tokio::test]
    async fn unresolved_uuid_has_no_content() {
        let mut resolver = MockDocumentResolver::new();
        resolver.expect_from_uuid().returning(|_| None);
        let svc = service(resolver, settings(""), passthrough_system());

        assert!(svc
            .content_for_uuid(&uuid("Item.gone"), &HeaderOverrides::default())
            .await
            .is_none());
    }
}
