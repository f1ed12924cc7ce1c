//! Facade Service
//!
//! Composite operation over both subsystems, plus ownership of whichever
//! subsystem instances the caller did not supply.

use fc_01_subsystem_one::{SubsystemOne, SubsystemOneApi};
use fc_02_subsystem_two::{SubsystemTwo, SubsystemTwoApi};
use tracing::debug;

use crate::config::FacadeConfig;
use crate::domain::{Ownership, Slot, FACADE_ACTION_HEADER, FACADE_INIT_HEADER};

/// Ownership of each subsystem held by a facade.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OwnershipReport {
    /// Subsystem One slot.
    pub subsystem_one: Ownership,
    /// Subsystem Two slot.
    pub subsystem_two: Ownership,
}

impl OwnershipReport {
    /// Number of instances the facade releases when dropped.
    pub fn owned_count(&self) -> usize {
        [self.subsystem_one, self.subsystem_two]
            .into_iter()
            .filter(|ownership| ownership.is_owned())
            .count()
    }
}

/// Facade over Subsystem One and Subsystem Two.
///
/// Exactly one instance of each subsystem is reachable for the facade's
/// whole lifetime. Dropping the facade releases owned instances only.
pub struct Facade<'a, A = SubsystemOne, B = SubsystemTwo>
where
    A: SubsystemOneApi,
    B: SubsystemTwoApi,
{
    subsystem_one: Slot<'a, A>,
    subsystem_two: Slot<'a, B>,
}

impl<'a, A, B> Facade<'a, A, B>
where
    A: SubsystemOneApi + Default,
    B: SubsystemTwoApi + Default,
{
    /// Create a facade, borrowing each given subsystem and owning a default
    /// instance for each one left out.
    pub fn new(subsystem_one: Option<&'a A>, subsystem_two: Option<&'a B>) -> Self {
        Self::from_slots(
            Slot::from_option(subsystem_one),
            Slot::from_option(subsystem_two),
        )
    }

    /// Create a facade from construction options.
    pub fn from_config(config: FacadeConfig<'a, A, B>) -> Self {
        Self::new(config.subsystem_one, config.subsystem_two)
    }
}

impl<'a, A, B> Facade<'a, A, B>
where
    A: SubsystemOneApi,
    B: SubsystemTwoApi,
{
    /// Create a facade from explicit slots.
    ///
    /// Lets the caller hand over a non-default instance for the facade to own.
    pub fn from_slots(subsystem_one: Slot<'a, A>, subsystem_two: Slot<'a, B>) -> Self {
        let facade = Self {
            subsystem_one,
            subsystem_two,
        };

        let report = facade.ownership();
        debug!(
            subsystem_one = %report.subsystem_one,
            subsystem_two = %report.subsystem_two,
            "Facade created"
        );

        facade
    }

    /// Prepare both subsystems, then order them to act.
    ///
    /// Calls run strictly in this order: one.`operation_1`,
    /// two.`operation_1`, one.`operation_n`, two.`operation_z`.
    pub fn operation(&self) -> String {
        let mut result = String::from(FACADE_INIT_HEADER);
        result.push_str(&self.subsystem_one.operation_1());
        result.push_str(&self.subsystem_two.operation_1());
        result.push_str(FACADE_ACTION_HEADER);
        result.push_str(&self.subsystem_one.operation_n());
        result.push_str(&self.subsystem_two.operation_z());
        result
    }

    /// Who releases each subsystem.
    pub fn ownership(&self) -> OwnershipReport {
        OwnershipReport {
            subsystem_one: self.subsystem_one.ownership(),
            subsystem_two: self.subsystem_two.ownership(),
        }
    }

    /// The Subsystem One instance in use.
    pub fn subsystem_one(&self) -> &A {
        &self.subsystem_one
    }

    /// The Subsystem Two instance in use.
    pub fn subsystem_two(&self) -> &B {
        &self.subsystem_two
    }
}

impl<A, B> Default for Facade<'_, A, B>
where
    A: SubsystemOneApi + Default,
    B: SubsystemTwoApi + Default,
{
    fn default() -> Self {
        Self::new(None, None)
    }
}

impl<A, B> Drop for Facade<'_, A, B>
where
    A: SubsystemOneApi,
    B: SubsystemTwoApi,
{
    fn drop(&mut self) {
        // Owned slots release their instance right after this returns.
        let report = self.ownership();
        debug!(
            released = report.owned_count(),
            subsystem_one = %report.subsystem_one,
            subsystem_two = %report.subsystem_two,
            "Facade dropped"
        );
    }
}
