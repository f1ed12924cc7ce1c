//! # Ports
//!
//! Inbound API of Subsystem Two.

pub mod inbound;
