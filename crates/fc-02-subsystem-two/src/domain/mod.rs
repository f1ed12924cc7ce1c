//! # Domain Module
//!
//! Response texts produced by Subsystem Two.

pub mod responses;

pub use responses::*;
