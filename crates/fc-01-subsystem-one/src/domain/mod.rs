//! # Domain Module
//!
//! Response texts produced by Subsystem One.

pub mod responses;

pub use responses::*;
