//! # Inbound Ports
//!
//! API trait defining what Subsystem One can do.

/// Subsystem One API - inbound port.
///
/// Implementations are stateless and infallible.
pub trait SubsystemOneApi {
    /// Prepare the subsystem. Returns the "ready" line.
    fn operation_1(&self) -> String;

    /// Start the subsystem's action. Returns the "go" line.
    fn operation_n(&self) -> String;
}
