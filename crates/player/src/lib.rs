//! PDE Player - everything one connected client runs.
//!
//! - `application` - tooltip resolution and dialog routing services
//! - `infrastructure` - system adapters, stores, and the dialog protocol
//! - `ports` - traits the host application implements
//! - `ui` - overlay and dialog state behind the host's markup

pub mod application;
pub mod infrastructure;
pub mod ports;
pub mod ui;
