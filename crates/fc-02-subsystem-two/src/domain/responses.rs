//! Fixed response lines.

/// Name the subsystem prefixes its responses with.
pub const SUBSYSTEM_NAME: &str = "Subsystem2";

/// Returned by `operation_1`.
pub const GET_READY_RESPONSE: &str = "Subsystem2: Get ready!\n";

/// Returned by `operation_z`.
pub const FIRE_RESPONSE: &str = "Subsystem2: Fire!\n";
