//! Application layer for Subsystem Two.

pub mod service;
