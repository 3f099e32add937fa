use locomo_core::error::CoreError;
use locomo_core::models::level::LocomoLevel;
use locomo_core::models::locomo25::{Locomo25Answers, Locomo25Result};
use locomo_core::models::profile::{Gender, UserProfile};
use locomo_core::models::stand_up::{Legs, Platform, StandUpCondition, StandUpScore};
use locomo_core::models::two_step::TwoStepResult;

#[test]
fn profile_trims_name_and_accepts_valid_values() {
    let profile = UserProfile::new("  Hanako  ", 68, Gender::Female, 152.5).unwrap();
    assert_eq!(profile.name(), "Hanako");
    assert_eq!(profile.age(), 68);
    assert_eq!(profile.gender(), Gender::Female);
    assert_eq!(profile.height_cm(), 152.5);
}

#[test]
fn profile_rejects_blank_name_zero_age_and_bad_height() {
    assert!(matches!(
        UserProfile::new("   ", 40, Gender::Male, 170.0),
        Err(CoreError::InvalidProfile(_))
    ));
    assert!(matches!(
        UserProfile::new("Taro", 0, Gender::Male, 170.0),
        Err(CoreError::InvalidProfile(_))
    ));
    assert!(matches!(
        UserProfile::new("Taro", 40, Gender::Male, 0.0),
        Err(CoreError::InvalidProfile(_))
    ));
    assert!(matches!(
        UserProfile::new("Taro", 40, Gender::Male, f64::NAN),
        Err(CoreError::InvalidProfile(_))
    ));
}

#[test]
fn profile_deserialization_runs_validation() {
    let ok: UserProfile = serde_json::from_str(
        r#"{"name":"Taro","age":70,"gender":"male","height_cm":165.0}"#,
    )
    .unwrap();
    assert_eq!(ok.gender(), Gender::Male);

    let bad = serde_json::from_str::<UserProfile>(
        r#"{"name":"","age":70,"gender":"male","height_cm":165.0}"#,
    );
    assert!(bad.is_err());
}

#[test]
fn stand_up_score_range_is_zero_to_eight() {
    assert!(StandUpScore::new(0).is_ok());
    assert!(StandUpScore::new(8).is_ok());
    assert!(matches!(
        StandUpScore::new(9),
        Err(CoreError::OutOfRange { .. })
    ));
    assert!(serde_json::from_str::<StandUpScore>("9").is_err());
    assert_eq!(serde_json::from_str::<StandUpScore>("4").unwrap().value(), 4);
}

#[test]
fn stand_up_score_maps_to_conditions() {
    assert_eq!(StandUpScore::new(0).unwrap().condition(), None);
    assert_eq!(
        StandUpScore::new(1).unwrap().condition(),
        Some(StandUpCondition {
            legs: Legs::Both,
            platform: Platform::Cm40
        })
    );
    assert_eq!(
        StandUpScore::new(4).unwrap().condition(),
        Some(StandUpCondition {
            legs: Legs::Both,
            platform: Platform::Cm10
        })
    );
    assert_eq!(
        StandUpScore::new(5).unwrap().condition(),
        Some(StandUpCondition {
            legs: Legs::One,
            platform: Platform::Cm40
        })
    );
    assert_eq!(
        StandUpScore::new(8).unwrap().condition(),
        Some(StandUpCondition {
            legs: Legs::One,
            platform: Platform::Cm10
        })
    );
}

#[test]
fn stand_up_from_condition_inverts_condition() {
    for value in 1..=8 {
        let score = StandUpScore::new(value).unwrap();
        let condition = score.condition().unwrap();
        assert_eq!(StandUpScore::from_condition(condition), score);
    }
}

#[test]
fn two_step_result_derives_score() {
    let result = TwoStepResult::measure(80.0, 75.0, 155.0).unwrap();
    assert!((result.score() - 1.0).abs() < 1e-12);
    assert_eq!(result.step1_cm(), 80.0);
    assert_eq!(result.step2_cm(), 75.0);
}

#[test]
fn two_step_result_zero_height_scores_zero() {
    let result = TwoStepResult::measure(80.0, 75.0, 0.0).unwrap();
    assert_eq!(result.score(), 0.0);
}

#[test]
fn two_step_result_rejects_non_positive_strides() {
    assert!(TwoStepResult::measure(0.0, 75.0, 160.0).is_err());
    assert!(TwoStepResult::measure(80.0, -1.0, 160.0).is_err());

    let err = TwoStepResult::measure(-5.0, 75.0, 160.0).unwrap_err();
    assert_eq!(
        err.to_string(),
        "step1_cm must be a positive length in cm, got -5"
    );
    let err = TwoStepResult::measure(80.0, 75.0, -1.0).unwrap_err();
    assert_eq!(err.to_string(), "height_cm must not be negative, got -1");
}

#[test]
fn two_step_result_recomputes_score_on_load() {
    let json = r#"{"step1_cm":90.0,"step2_cm":90.0,"height_cm":150.0,"score":99.0}"#;
    let result: TwoStepResult = serde_json::from_str(json).unwrap();
    assert!((result.score() - 1.2).abs() < 1e-12);
}

#[test]
fn locomo25_answers_track_completion() {
    let mut answers = Locomo25Answers::new();
    assert!(!answers.is_complete());
    assert_eq!(answers.unanswered().len(), 25);

    for i in 0..24 {
        answers.answer(i, 1).unwrap();
    }
    assert_eq!(answers.unanswered(), vec![24]);
    assert!(matches!(answers.finish(), Err(CoreError::Incomplete(_))));

    answers.answer(24, 4).unwrap();
    let result = answers.finish().unwrap();
    assert_eq!(result.total_score(), 28);
    assert_eq!(result.answers()[24], 4);
}

#[test]
fn locomo25_answers_reject_bad_index_and_value() {
    let mut answers = Locomo25Answers::new();
    assert!(answers.answer(25, 0).is_err());
    assert!(answers.answer(0, 5).is_err());
    assert_eq!(answers.get(0), None);
}

#[test]
fn locomo25_result_total_is_recomputed_on_load() {
    let json = format!(r#"{{"answers":{:?},"total_score":0}}"#, vec![2u8; 25]);
    let result: Locomo25Result = serde_json::from_str(&json).unwrap();
    assert_eq!(result.total_score(), 50);

    let short = format!(r#"{{"answers":{:?}}}"#, vec![2u8; 24]);
    assert!(serde_json::from_str::<Locomo25Result>(&short).is_err());
}

#[test]
fn level_serializes_as_integer() {
    assert_eq!(serde_json::to_string(&LocomoLevel::Two).unwrap(), "2");
    assert_eq!(
        serde_json::from_str::<LocomoLevel>("3").unwrap(),
        LocomoLevel::Three
    );
    assert!(serde_json::from_str::<LocomoLevel>("4").is_err());
    assert_eq!(LocomoLevel::One.to_string(), "Locomo level 1");
}
