//! # FC Facade
//!
//! Simplified interface over Subsystem One and Subsystem Two.
//!
//! **Architecture:** Hexagonal (the facade is an inbound adapter that drives
//! both subsystems through their inbound ports)
//!
//! ## Purpose
//!
//! Clients call [`Facade::operation`] and never touch the subsystems. The
//! facade either borrows subsystem instances supplied by the client or creates
//! and owns its own:
//!
//! | Constructor argument | Slot | Released by |
//! |----------------------|------|-------------|
//! | `Some(&instance)` | [`Slot::Borrowed`] | the client |
//! | `None` | [`Slot::Owned`] | the facade, on drop |
//!
//! A borrowed slot cannot outlive the instance it points at, so releasing a
//! client's instance twice or using it after release does not compile.
//!
//! ## Module Structure
//!
//! ```text
//! fc-facade/
//! ├── domain/          # Slot, Ownership, headers, errors
//! ├── application/     # Facade
//! ├── config.rs        # FacadeConfig (optional subsystem instances)
//! └── client.rs        # client_code
//! ```
//!
//! ## Example
//!
//! ```
//! use fc_facade::{Facade, SubsystemOne, SubsystemTwo};
//!
//! let one = SubsystemOne::new();
//! let two = SubsystemTwo::new();
//! let borrowed = Facade::new(Some(&one), Some(&two));
//! let owned: Facade = Facade::new(None, None);
//!
//! assert_eq!(borrowed.operation(), owned.operation());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod application;
pub mod client;
pub mod config;
pub mod domain;

// Re-exports
pub use application::facade::{Facade, OwnershipReport};
pub use client::client_code;
pub use config::FacadeConfig;
pub use domain::{ClientError, Ownership, Slot, FACADE_ACTION_HEADER, FACADE_INIT_HEADER};

pub use fc_01_subsystem_one::{SubsystemOne, SubsystemOneApi};
pub use fc_02_subsystem_two::{SubsystemTwo, SubsystemTwoApi};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
