//! UI models driven by the host's window and event layer

pub mod presentation;
