//! Configuration for the Facade
//!
//! Two optional options, one per subsystem. A present option is borrowed by
//! the facade; an absent one makes the facade create and own a default.

use fc_01_subsystem_one::SubsystemOne;
use fc_02_subsystem_two::SubsystemTwo;

/// Facade construction options.
#[derive(Debug)]
pub struct FacadeConfig<'a, A = SubsystemOne, B = SubsystemTwo> {
    /// Subsystem One instance to borrow.
    pub subsystem_one: Option<&'a A>,
    /// Subsystem Two instance to borrow.
    pub subsystem_two: Option<&'a B>,
}

impl<'a, A, B> FacadeConfig<'a, A, B> {
    /// Empty configuration: the facade will own both subsystems.
    pub fn new() -> Self {
        Self {
            subsystem_one: None,
            subsystem_two: None,
        }
    }

    /// Lend a Subsystem One instance to the facade.
    pub fn with_subsystem_one(mut self, subsystem: &'a A) -> Self {
        self.subsystem_one = Some(subsystem);
        self
    }

    /// Lend a Subsystem Two instance to the facade.
    pub fn with_subsystem_two(mut self, subsystem: &'a B) -> Self {
        self.subsystem_two = Some(subsystem);
        self
    }
}

impl<A, B> Default for FacadeConfig<'_, A, B> {
    fn default() -> Self {
        Self::new()
    }
}
