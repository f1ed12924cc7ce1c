//! # Domain Module
//!
//! Ownership slots, output headers and errors for the facade.

pub mod errors;
pub mod headers;
pub mod slot;

pub use errors::*;
pub use headers::*;
pub use slot::*;
