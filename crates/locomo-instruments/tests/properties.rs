use proptest::prelude::*;

use locomo_core::models::level::LocomoLevel;
use locomo_instruments::instruments::locomo25::Locomo25;
use locomo_instruments::instruments::stand_up::StandUpTest;
use locomo_instruments::instruments::two_step::TwoStepTest;
use locomo_instruments::level::classify;
use locomo_instruments::Instrument;

proptest! {
    #[test]
    fn cascade_matches_most_severe_axis(
        stand_up in 0u8..=8,
        two_step in 0.0f64..2.5,
        total in 0u32..=100,
    ) {
        let strongest = StandUpTest
            .axis_level(f64::from(stand_up))
            .max(TwoStepTest.axis_level(two_step))
            .max(Locomo25.axis_level(f64::from(total)));
        prop_assert_eq!(classify(stand_up, two_step, total), strongest);
    }

    #[test]
    fn classify_is_deterministic(
        stand_up in 0u8..=8,
        two_step in 0.0f64..2.5,
        total in 0u32..=100,
    ) {
        prop_assert_eq!(
            classify(stand_up, two_step, total),
            classify(stand_up, two_step, total)
        );
    }

    #[test]
    fn stand_up_below_two_always_level_three(
        stand_up in 0u8..2,
        two_step in 0.0f64..2.5,
        total in 0u32..=100,
    ) {
        prop_assert_eq!(classify(stand_up, two_step, total), LocomoLevel::Three);
    }

    #[test]
    fn worse_questionnaire_never_lowers_level(
        stand_up in 0u8..=8,
        two_step in 0.0f64..2.5,
        total in 0u32..100,
    ) {
        let worse = classify(stand_up, two_step, total + 1);
        prop_assert!(worse >= classify(stand_up, two_step, total));
    }

    #[test]
    fn better_stand_up_never_raises_level(
        stand_up in 0u8..8,
        two_step in 0.0f64..2.5,
        total in 0u32..=100,
    ) {
        let better = classify(stand_up + 1, two_step, total);
        prop_assert!(better <= classify(stand_up, two_step, total));
    }
}
