//! Step sequencing for the guided check.
//!
//! The wizard is a current-step value plus the session it fills. Each
//! submit is only accepted at its own step and advances on success;
//! rejected input leaves both the step and the session untouched.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::models::locomo25::Locomo25Result;
use crate::models::profile::UserProfile;
use crate::models::session::AssessmentSession;
use crate::models::stand_up::StandUpScore;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Step {
    #[default]
    Intro,
    Profile,
    StandUp,
    TwoStep,
    Locomo25,
    Result,
}

impl Step {
    fn index(self) -> u32 {
        match self {
            Step::Intro => 0,
            Step::Profile => 1,
            Step::StandUp => 2,
            Step::TwoStep => 3,
            Step::Locomo25 => 4,
            Step::Result => 5,
        }
    }

    fn next(self) -> Step {
        match self {
            Step::Intro => Step::Profile,
            Step::Profile => Step::StandUp,
            Step::StandUp => Step::TwoStep,
            Step::TwoStep => Step::Locomo25,
            Step::Locomo25 | Step::Result => Step::Result,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Wizard {
    step: Step,
    session: AssessmentSession,
}

impl Wizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn session(&self) -> &AssessmentSession {
        &self.session
    }

    pub fn into_session(self) -> AssessmentSession {
        self.session
    }

    /// Share of the flow already completed, 0–100.
    pub fn progress_percent(&self) -> u32 {
        (self.step.index() * 100 / Step::Result.index()).min(100)
    }

    pub fn begin(&mut self) -> Result<(), CoreError> {
        self.require_step(Step::Intro)?;
        self.step = self.step.next();
        Ok(())
    }

    pub fn submit_profile(&mut self, profile: UserProfile) -> Result<(), CoreError> {
        self.require_step(Step::Profile)?;
        self.session.record_profile(profile)?;
        self.step = self.step.next();
        Ok(())
    }

    pub fn submit_stand_up(&mut self, score: StandUpScore) -> Result<(), CoreError> {
        self.require_step(Step::StandUp)?;
        self.session.record_stand_up(score)?;
        self.step = self.step.next();
        Ok(())
    }

    pub fn submit_two_step(&mut self, step1_cm: f64, step2_cm: f64) -> Result<(), CoreError> {
        self.require_step(Step::TwoStep)?;
        self.session.record_two_step(step1_cm, step2_cm)?;
        self.step = self.step.next();
        Ok(())
    }

    pub fn submit_locomo25(&mut self, result: Locomo25Result) -> Result<(), CoreError> {
        self.require_step(Step::Locomo25)?;
        self.session.record_locomo25(result)?;
        self.step = self.step.next();
        Ok(())
    }

    /// Clear all collected data and go back to the intro, from any step.
    pub fn restart(&mut self) {
        self.session.reset();
        self.step = Step::Intro;
    }

    fn require_step(&self, expected: Step) -> Result<(), CoreError> {
        if self.step != expected {
            return Err(CoreError::WrongStep {
                expected,
                actual: self.step,
            });
        }
        Ok(())
    }
}
