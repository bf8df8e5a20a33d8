use proptest::prelude::*;
use sdk::errors::{PlannerError, PlannerErrorExt};

// Property: every error variant yields a non-empty, user-safe hint that
// never leaks the raw internal message.
proptest! {
    #[test]
    fn test_error_user_hint_completeness(detail in "\\PC{1,64}") {
        let errs = vec![
            PlannerError::Config(detail.clone()),
            PlannerError::Catalog(detail.clone()),
            PlannerError::NoMatchingDestination { region: detail.clone() },
            PlannerError::State(detail.clone()),
        ];

        for err in errs {
            let hint = err.user_hint();
            prop_assert!(!hint.is_empty());
            // Hints are static strings; the raw detail never appears
            if detail.len() > 16 {
                prop_assert!(!hint.contains(&detail));
            }
        }
    }
}

// Property: stage wrapping is transparent for hints and recoverability,
// and always reports the stage name it was given.
proptest! {
    #[test]
    fn test_stage_wrapper_is_transparent(
        stage in "[a-z_]{1,24}",
        detail in "\\PC{0,32}",
    ) {
        let inner = PlannerError::NoMatchingDestination { region: detail };
        let inner_hint = inner.user_hint().to_string();
        let inner_recoverable = inner.is_recoverable();

        let wrapped = inner.at_stage(stage.clone());

        prop_assert_eq!(wrapped.stage(), Some(stage.as_str()));
        prop_assert_eq!(wrapped.user_hint(), inner_hint.as_str());
        prop_assert_eq!(wrapped.is_recoverable(), inner_recoverable);
    }
}
