//! # Composite Output
//!
//! The facade's output is independent of who owns the subsystems.

#[cfg(test)]
mod tests {
    use fc_01_subsystem_one::{SubsystemOne, SubsystemOneApi};
    use fc_02_subsystem_two::{SubsystemTwo, SubsystemTwoApi};
    use fc_facade::{
        client_code, Facade, FacadeConfig, FACADE_ACTION_HEADER, FACADE_INIT_HEADER,
    };

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    type StandardFacade<'a> = Facade<'a, SubsystemOne, SubsystemTwo>;

    const EXPECTED: &str = "Facade initializes subsystems:\nSubsystem1: Ready!\nSubsystem2: Get ready!\nFacade orders subsystems to perform the action:\nSubsystem1: Go!\nSubsystem2: Fire!\n";

    // =============================================================================
    // SCENARIOS
    // =============================================================================

    #[test]
    fn test_scenario_client_supplies_both_subsystems() {
        let s1 = SubsystemOne::new();
        let s2 = SubsystemTwo::new();
        let facade = Facade::new(Some(&s1), Some(&s2));

        assert_eq!(facade.operation(), EXPECTED);
    }

    #[test]
    fn test_scenario_facade_creates_both_subsystems() {
        let facade: Facade = Facade::new(None, None);

        assert_eq!(facade.operation(), EXPECTED);
    }

    #[test]
    fn test_output_identical_across_all_configurations() {
        let s1 = SubsystemOne::new();
        let s2 = SubsystemTwo::new();

        let outputs = [
            StandardFacade::new(Some(&s1), Some(&s2)).operation(),
            StandardFacade::new(Some(&s1), None).operation(),
            StandardFacade::new(None, Some(&s2)).operation(),
            StandardFacade::new(None, None).operation(),
        ];

        for output in outputs {
            assert_eq!(output, EXPECTED);
        }
    }

    #[test]
    fn test_output_is_headers_interleaved_with_subsystem_responses() {
        let s1 = SubsystemOne::new();
        let s2 = SubsystemTwo::new();
        let expected = [
            FACADE_INIT_HEADER.to_string(),
            s1.operation_1(),
            s2.operation_1(),
            FACADE_ACTION_HEADER.to_string(),
            s1.operation_n(),
            s2.operation_z(),
        ]
        .concat();

        let facade = Facade::from_config(
            FacadeConfig::new()
                .with_subsystem_one(&s1)
                .with_subsystem_two(&s2),
        );

        assert_eq!(facade.operation(), expected);
    }

    #[test]
    fn test_client_output_matches_operation() {
        let facade: Facade = Facade::default();
        let mut out = Vec::new();

        client_code(&facade, &mut out).unwrap();

        assert_eq!(out, facade.operation().into_bytes());
    }
}
