//! Player port definitions.
//!
//! Outbound ports are what the tooltip engine and dialog layer need from the
//! host application. Inbound ports are what the socket bridge drives.

pub mod inbound;
pub mod outbound;
