use locomo_core::models::level::LocomoLevel;
use locomo_core::models::stand_up::StandUpScore;
use locomo_instruments::instruments::locomo25::{ANSWER_OPTIONS, QUESTIONS};
use locomo_instruments::instruments::stand_up::{self, OPTIONS};
use locomo_instruments::scoring::Direction;
use locomo_instruments::{all_instruments, get_instrument};

#[test]
fn registry_lists_three_instruments_in_order() {
    let ids: Vec<String> = all_instruments().iter().map(|i| i.id().to_string()).collect();
    assert_eq!(ids, vec!["stand_up", "two_step", "locomo25"]);
}

#[test]
fn lookup_by_id() {
    let two_step = get_instrument("two_step").unwrap();
    assert_eq!(two_step.name(), "Two-Step Test");
    assert_eq!(two_step.direction(), Direction::HigherIsBetter);
    assert!(get_instrument("grip_strength").is_none());
}

#[test]
fn validate_checks_range_and_step() {
    let stand_up = get_instrument("stand_up").unwrap();
    assert!(stand_up.validate(8.0).is_ok());
    assert!(stand_up.validate(9.0).is_err());
    assert!(stand_up.validate(2.5).is_err());

    let locomo25 = get_instrument("locomo25").unwrap();
    assert!(locomo25.validate(100.0).is_ok());
    let err = locomo25.validate(101.0).unwrap_err();
    assert_eq!(err.instrument_id, "locomo25");
    assert!(err.message.contains("outside range [0, 100]"));
}

#[test]
fn axis_levels_follow_direction() {
    let stand_up = get_instrument("stand_up").unwrap();
    assert_eq!(stand_up.axis_level(1.0), LocomoLevel::Three);
    assert_eq!(stand_up.axis_level(2.0), LocomoLevel::Two);
    assert_eq!(stand_up.axis_level(4.0), LocomoLevel::One);
    assert_eq!(stand_up.axis_level(5.0), LocomoLevel::None);

    let locomo25 = get_instrument("locomo25").unwrap();
    assert_eq!(locomo25.axis_level(24.0), LocomoLevel::Three);
    assert_eq!(locomo25.axis_level(16.0), LocomoLevel::Two);
    assert_eq!(locomo25.axis_level(7.0), LocomoLevel::One);
    assert_eq!(locomo25.axis_level(6.0), LocomoLevel::None);
}

#[test]
fn rating_labels_read_naturally() {
    let two_step = get_instrument("two_step").unwrap();
    assert_eq!(
        two_step.rating_label(LocomoLevel::Two),
        "moderate risk (level 2 equivalent)"
    );
    let locomo25 = get_instrument("locomo25").unwrap();
    assert_eq!(locomo25.rating_label(LocomoLevel::None), "none (good)");
}

#[test]
fn stand_up_options_cover_every_score() {
    for value in 0..=8 {
        let score = StandUpScore::new(value).unwrap();
        assert_eq!(stand_up::option_for(score).score, value);
    }
    assert_eq!(OPTIONS.len(), 9);
    assert_eq!(
        stand_up::label_for(StandUpScore::new(0).unwrap()),
        "Cannot rise on both legs from 40 cm"
    );
}

#[test]
fn questionnaire_reference_data() {
    assert_eq!(QUESTIONS.len(), 25);
    assert_eq!(QUESTIONS[24], "Going on trips");
    let values: Vec<u8> = ANSWER_OPTIONS.iter().map(|o| o.value).collect();
    assert_eq!(values, vec![0, 1, 2, 3, 4]);
}
