//! Tooltip overlay state
//!
//! One overlay per window. It is either hidden or showing content for a
//! single hover target. While visible, clicking a document link drills into
//! it and right-clicking goes back; leaving the target hides the overlay
//! unless Alt is held, and hiding discards the navigation history.

use std::collections::HashMap;

use pde_domain::value_objects::{compute_placement, escape_attr, parse_rendered_links};
use pde_domain::{
    DocumentUuid, LinkReference, NavigationHistory, OverlayPlacement, PointerPosition,
    PositionOverride, Rect, TooltipContent, Viewport,
};

use crate::application::{HeaderOverrides, TooltipService};
use crate::ports::outbound::{localization_keys as keys, Localizer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayState {
    Hidden,
    Visible,
}

/// What the hovered element asks the overlay to show
#[derive(Debug, Clone, PartialEq)]
pub struct HoverTarget {
    pub uuid: DocumentUuid,
    pub header: Option<String>,
    pub img: Option<String>,
    pub position: Option<PositionOverride>,
    /// Keep the overlay at its natural left edge instead of left of the anchor
    pub inside: bool,
}

impl HoverTarget {
    pub fn new(uuid: DocumentUuid) -> Self {
        Self {
            uuid,
            header: None,
            img: None,
            position: None,
            inside: false,
        }
    }

    /// Read a target from an element tagged `data-hover="tooltip"`.
    pub fn from_dataset(dataset: &HashMap<String, String>) -> Option<Self> {
        if dataset.get("hover").map(String::as_str) != Some("tooltip") {
            return None;
        }
        let uuid = DocumentUuid::parse(dataset.get("uuid")?).ok()?;
        let non_empty = |key: &str| dataset.get(key).filter(|v| !v.is_empty()).cloned();
        Some(Self {
            uuid,
            header: non_empty("header"),
            img: non_empty("img"),
            position: None,
            inside: dataset.contains_key("inside"),
        })
    }

    pub fn with_position(mut self, position: PositionOverride) -> Self {
        self.position = Some(position);
        self
    }

    pub fn inside(mut self) -> Self {
        self.inside = true;
        self
    }

    fn header_overrides(&self) -> HeaderOverrides {
        HeaderOverrides {
            header: self.header.clone(),
            img: self.img.clone(),
        }
    }
}

/// Measurements taken when the overlay is about to show
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayGeometry {
    pub pointer: PointerPosition,
    /// Overlay bounds at its stylesheet position, with the new content
    pub natural: Rect,
    pub viewport: Viewport,
}

pub struct TooltipOverlay {
    service: TooltipService,
    state: OverlayState,
    content: Option<TooltipContent>,
    history: NavigationHistory,
    placement: Option<OverlayPlacement>,
}

impl TooltipOverlay {
    pub fn new(service: TooltipService) -> Self {
        Self {
            service,
            state: OverlayState::Hidden,
            content: None,
            history: NavigationHistory::new(),
            placement: None,
        }
    }

    pub fn state(&self) -> OverlayState {
        self.state
    }

    pub fn content(&self) -> Option<&TooltipContent> {
        self.content.as_ref()
    }

    pub fn placement(&self) -> Option<&OverlayPlacement> {
        self.placement.as_ref()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Links in the displayed description, in document order
    pub fn links(&self) -> Vec<LinkReference> {
        self.content
            .as_ref()
            .map(|content| parse_rendered_links(&content.description))
            .unwrap_or_default()
    }

    /// Show the overlay for `target`.
    ///
    /// Ignored while already visible, so nested hover targets cannot
    /// retarget a showing tooltip. Returns whether the overlay was shown.
    pub async fn on_pointer_enter(&mut self, target: &HoverTarget, geometry: OverlayGeometry) -> bool {
        if self.state == OverlayState::Visible {
            tracing::debug!(uuid = %target.uuid, "Tooltip already visible, ignoring hover");
            return false;
        }

        let Some(content) = self
            .service
            .content_for_uuid(&target.uuid, &target.header_overrides())
            .await
        else {
            return false;
        };

        self.history.clear();
        self.content = Some(content);
        self.placement = Some(compute_placement(
            geometry.pointer,
            geometry.natural,
            geometry.viewport,
            target.inside,
            target.position.as_ref(),
        ));
        self.state = OverlayState::Visible;
        true
    }

    /// Hide the overlay unless Alt pins it. Returns whether it was hidden.
    pub fn on_pointer_leave(&mut self, alt_held: bool) -> bool {
        if alt_held || self.state == OverlayState::Hidden {
            return false;
        }
        self.state = OverlayState::Hidden;
        self.content = None;
        self.placement = None;
        self.history.clear();
        true
    }

    /// Drill into a link from the displayed description.
    ///
    /// Plain labels and links whose document cannot be resolved are inert.
    pub async fn on_link_click(&mut self, link: &LinkReference) -> bool {
        if self.state != OverlayState::Visible {
            return false;
        }
        let Some(target) = link.navigation_target() else {
            return false;
        };
        let Some(entity) = self.service.resolve(target).await else {
            tracing::debug!(uuid = %target, "Link target not found, link is inert");
            return false;
        };
        let (header, description) = self.service.navigation_content(&entity).await;

        let Some(content) = self.content.as_mut() else {
            return false;
        };
        self.history.push(content.snapshot());
        content.replace_for_navigation(header, description);
        true
    }

    /// Go back one step. Returns false when there is nothing to go back to.
    pub fn on_context_menu(&mut self) -> bool {
        let Some(content) = self.content.as_mut() else {
            return false;
        };
        match self.history.pop() {
            Some(snapshot) => {
                content.restore(snapshot);
                true
            }
            None => false,
        }
    }
}

/// Overlay container markup, appended once per window.
pub fn skeleton_html(localizer: &dyn Localizer, theme: &str) -> String {
    format!(
        r#"<div id="tooltip-container" class="theme-{theme} pde">
  <div class="tooltip-info">
    <div>{hold_alt}</div>
    <div class="margin-top-1">{go_back}</div>
  </div>
  <div id="info-underline" class="underline"></div>
  <div class="tooltip-header"></div>
  <div id="header-underline" class="underline"></div>
  <div class="tooltip-details"></div>
  <div id="details-underline" class="underline invisible"></div>
  <div class="tooltip-description"></div>
</div>"#,
        theme = escape_attr(theme),
        hold_alt = localizer.localize(keys::HOLD_ALT),
        go_back = localizer.localize(keys::GO_BACK),
    )
}
