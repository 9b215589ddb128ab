//! Presentation layer - overlay and dialog state behind the host's markup

pub mod dialogs;
pub mod tooltip_overlay;

pub use tooltip_overlay::{skeleton_html, HoverTarget, OverlayGeometry, OverlayState, TooltipOverlay};
