//! # Integration Tests
//!
//! Facade behaviour exercised across the subsystem, facade and runtime crates.

pub mod output;
pub mod ownership;
