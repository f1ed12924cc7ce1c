//! # Ownership Accounting
//!
//! Dropping a facade releases exactly the subsystem instances it created and
//! leaves lent instances usable by the client.

#[cfg(test)]
mod tests {
    use fc_01_subsystem_one::SubsystemOneApi;
    use fc_02_subsystem_two::SubsystemTwoApi;
    use fc_facade::{Facade, FacadeConfig, Ownership, Slot};

    use crate::integration::doubles::{self, CountingOne, CountingTwo, Lifecycle};

    type CountingFacade<'a> = Facade<'a, CountingOne, CountingTwo>;

    #[test]
    fn test_owning_facade_releases_exactly_what_it_created() {
        doubles::reset();

        let facade = CountingFacade::new(None, None);
        assert_eq!(
            doubles::lifecycle(),
            Lifecycle {
                one_created: 1,
                one_dropped: 0,
                two_created: 1,
                two_dropped: 0,
            }
        );

        drop(facade);
        assert_eq!(
            doubles::lifecycle(),
            Lifecycle {
                one_created: 1,
                one_dropped: 1,
                two_created: 1,
                two_dropped: 1,
            }
        );
    }

    #[test]
    fn test_borrowing_facade_releases_nothing() {
        doubles::reset();

        let one = CountingOne::default();
        let two = CountingTwo::default();

        let facade = CountingFacade::new(Some(&one), Some(&two));
        assert_eq!(facade.ownership().owned_count(), 0);
        drop(facade);

        let after = doubles::lifecycle();
        assert_eq!(after.one_dropped, 0);
        assert_eq!(after.two_dropped, 0);
        assert_eq!(after.live(), 2);

        // Lent instances remain fully usable by their owner.
        assert_eq!(one.operation_1(), "Subsystem1: Ready!\n");
        assert_eq!(two.operation_z(), "Subsystem2: Fire!\n");

        drop(one);
        drop(two);
        assert_eq!(doubles::lifecycle().live(), 0);
    }

    #[test]
    fn test_mixed_facade_releases_only_owned_slot() {
        doubles::reset();

        let two = CountingTwo::default();
        let facade = CountingFacade::from_config(FacadeConfig::new().with_subsystem_two(&two));
        assert_eq!(facade.ownership().subsystem_one, Ownership::Owned);
        assert_eq!(facade.ownership().subsystem_two, Ownership::Borrowed);

        drop(facade);
        let after = doubles::lifecycle();
        assert_eq!(after.one_created, 1);
        assert_eq!(after.one_dropped, 1);
        assert_eq!(after.two_created, 1);
        assert_eq!(after.two_dropped, 0);
    }

    #[test]
    fn test_lent_instances_can_serve_several_facades() {
        doubles::reset();

        let one = CountingOne::default();
        let two = CountingTwo::default();

        let first = CountingFacade::new(Some(&one), Some(&two));
        let second = CountingFacade::new(Some(&one), Some(&two));
        assert_eq!(first.operation(), second.operation());

        drop(first);
        drop(second);
        assert_eq!(doubles::lifecycle().live(), 2);
    }

    #[test]
    fn test_operation_does_not_create_instances() {
        doubles::reset();

        let facade = CountingFacade::default();
        for _ in 0..3 {
            facade.operation();
        }

        let counts = doubles::lifecycle();
        assert_eq!(counts.one_created, 1);
        assert_eq!(counts.two_created, 1);
    }

    #[test]
    fn test_handed_over_instance_is_released_by_facade() {
        doubles::reset();

        let one = CountingOne::default();
        let facade = CountingFacade::from_slots(Slot::Owned(one), Slot::from_option(None));
        assert_eq!(facade.ownership().owned_count(), 2);

        drop(facade);
        assert_eq!(doubles::lifecycle().live(), 0);
    }
}
