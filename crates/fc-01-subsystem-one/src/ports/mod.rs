//! # Ports
//!
//! Inbound API of Subsystem One.

pub mod inbound;
