pub mod services;

pub use services::{DialogService, HeaderOverrides, TooltipService};
