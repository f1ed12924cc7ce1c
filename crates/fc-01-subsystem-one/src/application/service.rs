//! Subsystem One Service
//!
//! Default implementation of [`SubsystemOneApi`].

use crate::domain::{GO_RESPONSE, READY_RESPONSE};
use crate::ports::inbound::SubsystemOneApi;

use tracing::trace;

/// Subsystem One.
///
/// Carries no state; any two instances behave identically.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SubsystemOne;

impl SubsystemOne {
    /// Create a new subsystem instance.
    pub fn new() -> Self {
        Self
    }
}

impl SubsystemOneApi for SubsystemOne {
    fn operation_1(&self) -> String {
        trace!(operation = "operation_1", "Subsystem one reporting ready");
        READY_RESPONSE.to_string()
    }

    fn operation_n(&self) -> String {
        trace!(operation = "operation_n", "Subsystem one reporting go");
        GO_RESPONSE.to_string()
    }
}
