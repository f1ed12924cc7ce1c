//! Literal header lines the facade interleaves with subsystem output.

/// Written before the subsystems are prepared.
pub const FACADE_INIT_HEADER: &str = "Facade initializes subsystems:\n";

/// Written before the subsystems perform the action.
pub const FACADE_ACTION_HEADER: &str = "Facade orders subsystems to perform the action:\n";
