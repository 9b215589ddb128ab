//! Value objects - Immutable objects defined by their attributes

mod field_path;
mod link_reference;
mod navigation_history;
mod overlay_position;
mod rich_text;
mod tooltip_content;

pub use field_path::{get_value_from_path, set_value_for_path};
pub use link_reference::{LinkKind, LinkReference};
pub use navigation_history::NavigationHistory;
pub use overlay_position::{
    compute_placement, OverlayPlacement, PointerPosition, PositionOverride, Rect, Viewport,
    DEFAULT_MAX_HEIGHT, DEFAULT_MIN_WIDTH, POINTER_OFFSET,
};
pub use rich_text::{
    clear_styles, escape_attr, extract_data_uuid, find_embed_directives, parse_rendered_links,
    render_header, render_link, rewrite_uuid_links, unescape_ampersands, uuid_marker,
    wrap_description, EmbedDirective,
};
pub use tooltip_content::{ContentSnapshot, TooltipContent};
