//! # Inbound Ports
//!
//! API trait defining what Subsystem Two can do.

/// Subsystem Two API - inbound port.
pub trait SubsystemTwoApi {
    /// Returns the "get ready" line.
    fn operation_1(&self) -> String;

    /// Returns the "fire" line.
    fn operation_z(&self) -> String;
}
