//! # Facade Runtime
//!
//! Entry point support for the facade demo.
//!
//! ## Modular Structure
//!
//! - `config` - Runtime configuration (logging) loaded from the environment
//! - `demo` - Client code run against both facade configurations
//!
//! ## Demo Sequence
//!
//! 1. Client creates Subsystem One and Subsystem Two and lends them to a facade
//! 2. Client runs the facade; the facade borrows, never releases
//! 3. A blank line separates the two runs
//! 4. Client creates a facade with nothing; the facade creates and owns both
//!    subsystems and releases them when dropped

pub mod config;
pub mod demo;

pub use config::{load_config, ConfigError, RuntimeConfig};
pub use demo::run_demo;
