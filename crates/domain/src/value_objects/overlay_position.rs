//! Overlay placement relative to the pointer and viewport
//!
//! Automatic placement centres the overlay vertically on the pointer, keeps
//! it inside the top and bottom edges, and puts it to the left of its anchor.
//! When that would leave the viewport on the left it flips to the right of
//! the pointer instead.

use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_HEIGHT: &str = "500px";
pub const DEFAULT_MIN_WIDTH: &str = "300px";

/// Horizontal gap between the pointer and a flipped overlay
pub const POINTER_OFFSET: f64 = 50.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Bounding box of the rendered overlay before positioning
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Caller-supplied position; takes precedence over automatic fitting.
///
/// Lengths are CSS values (`"120px"`, `"40%"`). The two flags re-apply the
/// default size constraints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    #[serde(default)]
    pub max_height: bool,
    #[serde(default)]
    pub min_width: bool,
}

/// Inline style values to apply to the overlay
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlayPlacement {
    pub left: Option<String>,
    pub top: Option<String>,
    pub bottom: Option<String>,
    pub height: Option<String>,
    pub width: Option<String>,
    pub max_height: Option<String>,
    pub min_width: Option<String>,
}

impl OverlayPlacement {
    /// Render as an inline style string, in a stable property order.
    pub fn to_css(&self) -> String {
        [
            ("left", &self.left),
            ("top", &self.top),
            ("bottom", &self.bottom),
            ("height", &self.height),
            ("width", &self.width),
            ("max-height", &self.max_height),
            ("min-width", &self.min_width),
        ]
        .iter()
        .filter_map(|(property, value)| value.as_ref().map(|v| format!("{property}: {v};")))
        .collect::<Vec<_>>()
        .join(" ")
    }
}

fn px(value: f64) -> String {
    format!("{}px", value.round())
}

/// Compute where the overlay goes.
///
/// `natural` is the overlay's bounding box at its stylesheet position. With
/// `inside` set the overlay keeps its natural left edge rather than moving
/// left of the anchor by its own width.
pub fn compute_placement(
    pointer: PointerPosition,
    natural: Rect,
    viewport: Viewport,
    inside: bool,
    position: Option<&PositionOverride>,
) -> OverlayPlacement {
    if let Some(pos) = position {
        return OverlayPlacement {
            left: pos.left.clone(),
            top: pos.top.clone(),
            bottom: pos.bottom.clone(),
            height: pos.height.clone(),
            width: pos.width.clone(),
            max_height: pos.max_height.then(|| DEFAULT_MAX_HEIGHT.to_string()),
            min_width: pos.min_width.then(|| DEFAULT_MIN_WIDTH.to_string()),
        };
    }

    let height = natural.height;
    let mut top = pointer.y - height / 2.0;
    if top + height > viewport.height {
        top = viewport.height - height;
    }
    if top < 0.0 {
        top = 0.0;
    }

    let mut left = if inside {
        natural.left
    } else {
        natural.left - natural.width
    };
    if left < 0.0 {
        left = pointer.x + POINTER_OFFSET;
    }

    OverlayPlacement {
        left: Some(px(left)),
        top: Some(px(top)),
        max_height: Some(DEFAULT_MAX_HEIGHT.to_string()),
        min_width: Some(DEFAULT_MIN_WIDTH.to_string()),
        ..OverlayPlacement::default()
    }
}
