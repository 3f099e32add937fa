use locomo_core::error::CoreError;
use locomo_core::models::locomo25::Locomo25Answers;
use locomo_core::models::profile::{Gender, UserProfile};
use locomo_core::models::session::AssessmentSession;
use locomo_core::models::stand_up::StandUpScore;
use locomo_core::wizard::{Step, Wizard};

fn profile() -> UserProfile {
    UserProfile::new("Taro", 72, Gender::Male, 160.0).unwrap()
}

fn answers(value: u8) -> Locomo25Answers {
    let mut answers = Locomo25Answers::new();
    for i in 0..25 {
        answers.answer(i, value).unwrap();
    }
    answers
}

#[test]
fn new_session_is_empty() {
    let session = AssessmentSession::new();
    assert!(!session.is_complete());
    assert_eq!(
        session.missing(),
        vec!["profile", "stand_up", "two_step", "locomo25"]
    );
}

#[test]
fn fields_can_only_be_recorded_once() {
    let mut session = AssessmentSession::new();
    session.record_profile(profile()).unwrap();
    assert!(matches!(
        session.record_profile(profile()),
        Err(CoreError::AlreadyRecorded("profile"))
    ));

    session.record_stand_up(StandUpScore::new(5).unwrap()).unwrap();
    assert!(matches!(
        session.record_stand_up(StandUpScore::new(6).unwrap()),
        Err(CoreError::AlreadyRecorded("stand_up"))
    ));
    assert_eq!(session.stand_up().unwrap().value(), 5);
}

#[test]
fn two_step_requires_profile_height() {
    let mut session = AssessmentSession::new();
    assert!(matches!(
        session.record_two_step(80.0, 80.0),
        Err(CoreError::MissingField("profile"))
    ));

    session.record_profile(profile()).unwrap();
    let result = session.record_two_step(80.0, 80.0).unwrap();
    assert!((result.score() - 1.0).abs() < 1e-12);
    assert_eq!(result.height_cm(), 160.0);
}

#[test]
fn reset_clears_all_inputs_and_issues_new_id() {
    let mut session = AssessmentSession::new();
    let first_id = session.id();
    session.record_profile(profile()).unwrap();
    session.record_stand_up(StandUpScore::new(3).unwrap()).unwrap();

    session.reset();
    assert_ne!(session.id(), first_id);
    assert!(session.profile().is_none());
    assert!(session.stand_up().is_none());
    assert_eq!(session.missing().len(), 4);
}

#[test]
fn complete_session_survives_json() {
    let mut session = AssessmentSession::new();
    session.record_profile(profile()).unwrap();
    session.record_stand_up(StandUpScore::new(2).unwrap()).unwrap();
    session.record_two_step(85.0, 83.0).unwrap();
    session.record_locomo25(answers(1).finish().unwrap()).unwrap();
    assert!(session.is_complete());

    let json = session.to_json().unwrap();
    let loaded = AssessmentSession::from_json(&json).unwrap();
    assert_eq!(loaded.id(), session.id());
    assert_eq!(loaded.locomo25().unwrap().total_score(), 25);
    assert_eq!(loaded.two_step(), session.two_step());
}

fn saved_complete_session() -> serde_json::Value {
    let mut session = AssessmentSession::new();
    session.record_profile(profile()).unwrap();
    session.record_stand_up(StandUpScore::new(8).unwrap()).unwrap();
    session.record_two_step(110.0, 110.0).unwrap();
    session.record_locomo25(answers(0).finish().unwrap()).unwrap();
    serde_json::from_str(&session.to_json().unwrap()).unwrap()
}

#[test]
fn loading_rejects_two_step_measured_against_another_height() {
    let mut value = saved_complete_session();
    value["two_step"]["height_cm"] = serde_json::json!(0.0);

    let err = AssessmentSession::from_json(&value.to_string()).unwrap_err();
    assert!(err.to_string().contains("profile height is 160 cm"));

    value["two_step"]["height_cm"] = serde_json::json!(150.0);
    assert!(AssessmentSession::from_json(&value.to_string()).is_err());
}

#[test]
fn loading_rejects_two_step_without_profile() {
    let mut value = saved_complete_session();
    value["profile"] = serde_json::Value::Null;

    let err = AssessmentSession::from_json(&value.to_string()).unwrap_err();
    assert!(err.to_string().contains("without a profile"));
}

#[test]
fn loading_accepts_partial_session_without_two_step() {
    let mut value = saved_complete_session();
    value["two_step"] = serde_json::Value::Null;
    value["profile"] = serde_json::Value::Null;

    let loaded = AssessmentSession::from_json(&value.to_string()).unwrap();
    assert_eq!(loaded.missing(), vec!["profile", "two_step"]);
}

#[test]
fn wizard_walks_through_every_step() {
    let mut wizard = Wizard::new();
    assert_eq!(wizard.step(), Step::Intro);
    assert_eq!(wizard.progress_percent(), 0);

    wizard.begin().unwrap();
    assert_eq!(wizard.step(), Step::Profile);
    wizard.submit_profile(profile()).unwrap();
    wizard.submit_stand_up(StandUpScore::new(6).unwrap()).unwrap();
    assert_eq!(wizard.progress_percent(), 60);
    wizard.submit_two_step(100.0, 100.0).unwrap();
    wizard.submit_locomo25(answers(0).finish().unwrap()).unwrap();

    assert_eq!(wizard.step(), Step::Result);
    assert_eq!(wizard.progress_percent(), 100);
    assert!(wizard.session().is_complete());
}

#[test]
fn wizard_rejects_out_of_order_submission() {
    let mut wizard = Wizard::new();
    let err = wizard
        .submit_stand_up(StandUpScore::new(4).unwrap())
        .unwrap_err();
    assert!(matches!(
        err,
        CoreError::WrongStep {
            expected: Step::StandUp,
            actual: Step::Intro
        }
    ));
    assert!(wizard.session().stand_up().is_none());
}

#[test]
fn wizard_stays_put_on_invalid_input() {
    let mut wizard = Wizard::new();
    wizard.begin().unwrap();
    wizard.submit_profile(profile()).unwrap();
    wizard.submit_stand_up(StandUpScore::new(6).unwrap()).unwrap();

    assert!(wizard.submit_two_step(0.0, 80.0).is_err());
    assert_eq!(wizard.step(), Step::TwoStep);
    assert!(wizard.session().two_step().is_none());
}

#[test]
fn wizard_restart_clears_session() {
    let mut wizard = Wizard::new();
    wizard.begin().unwrap();
    wizard.submit_profile(profile()).unwrap();

    wizard.restart();
    assert_eq!(wizard.step(), Step::Intro);
    assert!(wizard.session().profile().is_none());
}
