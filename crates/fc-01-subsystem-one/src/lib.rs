//! # FC-01 Subsystem One
//!
//! First subsystem behind the facade. Reports that it is ready and then
//! that it is going.
//!
//! **Subsystem ID:** 1  
//! **Architecture:** Hexagonal (Ports/Adapters)
//!
//! ## Purpose
//!
//! The subsystem accepts requests either from the facade or from a client
//! directly. To the subsystem the facade is just another client.
//!
//! ## Module Structure
//!
//! ```text
//! fc-01-subsystem-one/
//! ├── domain/          # Fixed response texts
//! ├── ports/           # SubsystemOneApi inbound port
//! └── application/     # SubsystemOne service
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod application;
pub mod domain;
pub mod ports;

// Re-exports
pub use application::service::SubsystemOne;
pub use domain::{GO_RESPONSE, READY_RESPONSE, SUBSYSTEM_NAME};
pub use ports::inbound::SubsystemOneApi;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
