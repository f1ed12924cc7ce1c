//! Application layer for Subsystem One.

pub mod service;
