use serde::{Deserialize, Serialize};
use uuid::Uuid;

use locomo_core::models::profile::Gender;
use locomo_instruments::level::AssessmentOutcome;

/// Bump when the payload shape changes.
pub const SCHEMA_VERSION: u32 = 1;

/// The result record sent to the logging endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultPayload {
    pub schema_version: u32,
    pub session_id: Uuid,
    pub recorded_at: jiff::Timestamp,
    pub profile: ProfilePayload,
    pub stand_up: StandUpPayload,
    pub two_step: TwoStepPayload,
    pub locomo25: Locomo25Payload,
    pub level: u8,
    pub level_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfilePayload {
    pub name: String,
    pub age: u32,
    pub gender: Gender,
    pub height_cm: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandUpPayload {
    pub score: u8,
    pub label: String,
    pub risk: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TwoStepPayload {
    pub step1_cm: f64,
    pub step2_cm: f64,
    pub score: f64,
    pub risk: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Locomo25Payload {
    pub total_score: u32,
    pub answers: Vec<u8>,
    pub severity: String,
}

impl ResultPayload {
    pub fn from_outcome(outcome: &AssessmentOutcome, recorded_at: jiff::Timestamp) -> Self {
        let profile = &outcome.profile;
        Self {
            schema_version: SCHEMA_VERSION,
            session_id: outcome.session_id,
            recorded_at,
            profile: ProfilePayload {
                name: profile.name().to_string(),
                age: profile.age(),
                gender: profile.gender(),
                height_cm: profile.height_cm(),
            },
            stand_up: StandUpPayload {
                score: outcome.stand_up.value(),
                label: outcome.stand_up_label().to_string(),
                risk: outcome.ratings.stand_up.label.clone(),
            },
            two_step: TwoStepPayload {
                step1_cm: outcome.two_step.step1_cm(),
                step2_cm: outcome.two_step.step2_cm(),
                score: outcome.two_step.score(),
                risk: outcome.ratings.two_step.label.clone(),
            },
            locomo25: Locomo25Payload {
                total_score: outcome.locomo25.total_score(),
                answers: outcome.locomo25.answers().to_vec(),
                severity: outcome.ratings.locomo25.label.clone(),
            },
            level: outcome.level.as_u8(),
            level_label: outcome.level.to_string(),
        }
    }
}
