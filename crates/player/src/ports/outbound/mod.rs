//! Outbound ports - Interfaces for host services
//!
//! These ports define the contracts that infrastructure adapters must implement,
//! allowing application services to interact with the host application without
//! depending on concrete implementations.

pub mod canvas_port;
pub mod dialog_presenter_port;
pub mod dialog_request_port;
pub mod document_port;
pub mod localizer_port;
pub mod settings_port;
pub mod socket_port;
pub mod system_adapter_port;
pub mod user_directory_port;

pub use canvas_port::{CanvasPoint, CanvasPort, CanvasToken};
pub use dialog_presenter_port::DialogPresenter;
pub use dialog_request_port::DialogRequestPort;
pub use document_port::DocumentResolver;
pub use localizer_port::{keys as localization_keys, Localizer};
pub use settings_port::{ModuleSettings, SettingsError, SettingsPort, FALLBACK_DESCRIPTION_PATH};
pub use socket_port::{SocketEnvelope, SocketError, SocketPort};
pub use system_adapter_port::{Enricher, EnricherMatch, SystemAdapter};
pub use user_directory_port::UserDirectory;

#[cfg(test)]
pub use canvas_port::MockCanvasPort;
#[cfg(test)]
pub use dialog_presenter_port::MockDialogPresenter;
#[cfg(test)]
pub use dialog_request_port::MockDialogRequestPort;
#[cfg(test)]
pub use document_port::MockDocumentResolver;
#[cfg(test)]
pub use localizer_port::MockLocalizer;
#[cfg(test)]
pub use settings_port::MockSettingsPort;
#[cfg(test)]
pub use socket_port::MockSocketPort;
#[cfg(test)]
pub use system_adapter_port::{MockEnricher, MockSystemAdapter};
#[cfg(test)]
pub use user_directory_port::MockUserDirectory;
