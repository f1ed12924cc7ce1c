//! # FC-02 Subsystem Two
//!
//! Second subsystem behind the facade. Gets ready, then fires.
//!
//! **Subsystem ID:** 2  
//! **Architecture:** Hexagonal (Ports/Adapters)
//!
//! Knows nothing about the facade or about Subsystem One.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod application;
pub mod domain;
pub mod ports;

// Re-exports
pub use application::service::SubsystemTwo;
pub use domain::{FIRE_RESPONSE, GET_READY_RESPONSE, SUBSYSTEM_NAME};
pub use ports::inbound::SubsystemTwoApi;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
