//! Application services
//!
//! Services depend on port traits, not concrete infrastructure.

pub mod dialog_service;
pub mod tooltip_service;

pub use dialog_service::DialogService;
pub use tooltip_service::{HeaderOverrides, TooltipService};
