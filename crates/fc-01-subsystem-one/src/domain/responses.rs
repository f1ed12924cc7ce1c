//! # Responses
//!
//! Every operation is total and returns one of these lines verbatim.

/// Name the subsystem prefixes its responses with.
pub const SUBSYSTEM_NAME: &str = "Subsystem1";

/// Returned by `operation_1`.
pub const READY_RESPONSE: &str = "Subsystem1: Ready!\n";

/// Returned by `operation_n`.
pub const GO_RESPONSE: &str = "Subsystem1: Go!\n";
