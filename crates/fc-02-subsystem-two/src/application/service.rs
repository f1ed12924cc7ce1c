//! Subsystem Two Service

use crate::domain::{FIRE_RESPONSE, GET_READY_RESPONSE};
use crate::ports::inbound::SubsystemTwoApi;

use tracing::trace;

/// Subsystem Two. Stateless.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SubsystemTwo;

impl SubsystemTwo {
    /// Create a new subsystem instance.
    pub fn new() -> Self {
        Self
    }
}

impl SubsystemTwoApi for SubsystemTwo {
    fn operation_1(&self) -> String {
        trace!(operation = "operation_1", "Subsystem two getting ready");
        GET_READY_RESPONSE.to_string()
    }

    fn operation_z(&self) -> String {
        trace!(operation = "operation_z", "Subsystem two firing");
        FIRE_RESPONSE.to_string()
    }
}
