//! Infrastructure adapters for the player ports

pub mod config;
pub mod dialog_protocol;
pub mod document_store;
pub mod localization;
pub mod settings_store;
pub mod systems;

pub use config::PlayerConfig;
