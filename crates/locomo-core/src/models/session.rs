use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::locomo25::Locomo25Result;
use super::profile::UserProfile;
use super::stand_up::StandUpScore;
use super::two_step::TwoStepResult;
use crate::error::CoreError;

/// Everything collected during one run of the check.
///
/// Each result moves from absent to present exactly once; the only way to
/// change a recorded value is [`AssessmentSession::reset`].
///
/// Loading from JSON checks that a two-step result was measured against the
/// recorded profile height.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(try_from = "SessionRecord", into = "SessionRecord")]
#[ts(export)]
pub struct AssessmentSession {
    id: Uuid,
    started_at: jiff::Timestamp,
    profile: Option<UserProfile>,
    stand_up: Option<StandUpScore>,
    two_step: Option<TwoStepResult>,
    locomo25: Option<Locomo25Result>,
}

impl Default for AssessmentSession {
    fn default() -> Self {
        Self::new()
    }
}

impl AssessmentSession {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            started_at: jiff::Timestamp::now(),
            profile: None,
            stand_up: None,
            two_step: None,
            locomo25: None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn started_at(&self) -> jiff::Timestamp {
        self.started_at
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    pub fn stand_up(&self) -> Option<StandUpScore> {
        self.stand_up
    }

    pub fn two_step(&self) -> Option<&TwoStepResult> {
        self.two_step.as_ref()
    }

    pub fn locomo25(&self) -> Option<&Locomo25Result> {
        self.locomo25.as_ref()
    }

    pub fn record_profile(&mut self, profile: UserProfile) -> Result<(), CoreError> {
        if self.profile.is_some() {
            return Err(CoreError::AlreadyRecorded("profile"));
        }
        self.profile = Some(profile);
        Ok(())
    }

    pub fn record_stand_up(&mut self, score: StandUpScore) -> Result<(), CoreError> {
        if self.stand_up.is_some() {
            return Err(CoreError::AlreadyRecorded("stand_up"));
        }
        self.stand_up = Some(score);
        Ok(())
    }

    /// Measure the two-step result against the recorded profile height.
    pub fn record_two_step(
        &mut self,
        step1_cm: f64,
        step2_cm: f64,
    ) -> Result<&TwoStepResult, CoreError> {
        if self.two_step.is_some() {
            return Err(CoreError::AlreadyRecorded("two_step"));
        }
        let height_cm = self
            .profile
            .as_ref()
            .map(UserProfile::height_cm)
            .ok_or(CoreError::MissingField("profile"))?;

        let result = TwoStepResult::measure(step1_cm, step2_cm, height_cm)?;
        Ok(self.two_step.insert(result))
    }

    pub fn record_locomo25(&mut self, result: Locomo25Result) -> Result<(), CoreError> {
        if self.locomo25.is_some() {
            return Err(CoreError::AlreadyRecorded("locomo25"));
        }
        self.locomo25 = Some(result);
        Ok(())
    }

    /// Names of the inputs that are still absent, in collection order.
    pub fn missing(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.profile.is_none() {
            missing.push("profile");
        }
        if self.stand_up.is_none() {
            missing.push("stand_up");
        }
        if self.two_step.is_none() {
            missing.push("two_step");
        }
        if self.locomo25.is_none() {
            missing.push("locomo25");
        }
        missing
    }

    pub fn is_complete(&self) -> bool {
        self.missing().is_empty()
    }

    /// Discard every recorded input and start a fresh session.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn to_json(&self) -> Result<String, CoreError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[derive(Serialize, Deserialize)]
struct SessionRecord {
    id: Uuid,
    started_at: jiff::Timestamp,
    profile: Option<UserProfile>,
    stand_up: Option<StandUpScore>,
    two_step: Option<TwoStepResult>,
    locomo25: Option<Locomo25Result>,
}

impl TryFrom<SessionRecord> for AssessmentSession {
    type Error = CoreError;

    fn try_from(r: SessionRecord) -> Result<Self, Self::Error> {
        if let Some(two_step) = &r.two_step {
            let Some(profile) = &r.profile else {
                return Err(CoreError::InconsistentSession(
                    "two_step is recorded without a profile".to_string(),
                ));
            };
            if two_step.height_cm() != profile.height_cm() {
                return Err(CoreError::InconsistentSession(format!(
                    "two_step was measured against {} cm but the profile height is {} cm",
                    two_step.height_cm(),
                    profile.height_cm()
                )));
            }
        }

        Ok(Self {
            id: r.id,
            started_at: r.started_at,
            profile: r.profile,
            stand_up: r.stand_up,
            two_step: r.two_step,
            locomo25: r.locomo25,
        })
    }
}

impl From<AssessmentSession> for SessionRecord {
    fn from(s: AssessmentSession) -> Self {
        Self {
            id: s.id,
            started_at: s.started_at,
            profile: s.profile,
            stand_up: s.stand_up,
            two_step: s.two_step,
            locomo25: s.locomo25,
        }
    }
}
