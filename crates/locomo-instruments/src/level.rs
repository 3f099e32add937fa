//! Locomo-level classification.
//!
//! Levels are checked from most to least severe and the first tier with any
//! matching criterion wins. The stand-up and two-step criteria are strict
//! (`<`) while the questionnaire criterion is inclusive (`>=`).

use serde::Serialize;
use ts_rs::TS;
use uuid::Uuid;

use locomo_core::models::level::LocomoLevel;
use locomo_core::models::locomo25::Locomo25Result;
use locomo_core::models::profile::UserProfile;
use locomo_core::models::session::AssessmentSession;
use locomo_core::models::stand_up::StandUpScore;
use locomo_core::models::two_step::TwoStepResult;

use crate::error::InstrumentError;
use crate::instruments::locomo25::{self, Locomo25};
use crate::instruments::stand_up::{self, StandUpTest};
use crate::instruments::two_step::{self, TwoStepTest};
use crate::Instrument;

/// Classify three completed test results into a level.
pub fn classify(stand_up: u8, two_step_score: f64, locomo25_total: u32) -> LocomoLevel {
    let su = f64::from(stand_up);
    let ts = two_step_score;
    let l25 = f64::from(locomo25_total);
    let (s, t, q) = (stand_up::CUTOFFS, two_step::CUTOFFS, locomo25::CUTOFFS);

    if su < s.level3 || ts < t.level3 || l25 >= q.level3 {
        return LocomoLevel::Three;
    }
    if su < s.level2 || ts < t.level2 || l25 >= q.level2 {
        return LocomoLevel::Two;
    }
    if su < s.level1 || ts < t.level1 || l25 >= q.level1 {
        return LocomoLevel::One;
    }
    LocomoLevel::None
}

/// Level for a session, or `None` until all three tests are recorded.
///
/// A missing test is never treated as a score of zero.
pub fn classify_session(session: &AssessmentSession) -> Option<LocomoLevel> {
    let stand_up = session.stand_up()?;
    let two_step = session.two_step()?;
    let locomo25 = session.locomo25()?;
    Some(classify(
        stand_up.value(),
        two_step.score(),
        locomo25.total_score(),
    ))
}

/// How one axis rates on its own.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct AxisRating {
    pub instrument_id: String,
    #[ts(type = "number")]
    pub level: LocomoLevel,
    pub label: String,
}

impl AxisRating {
    fn rate(instrument: &dyn Instrument, value: f64) -> Self {
        let level = instrument.axis_level(value);
        Self {
            instrument_id: instrument.id().to_string(),
            level,
            label: instrument.rating_label(level),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct AxisRatings {
    pub stand_up: AxisRating,
    pub two_step: AxisRating,
    pub locomo25: AxisRating,
}

/// A completed session together with its classification.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct AssessmentOutcome {
    pub session_id: Uuid,
    pub started_at: jiff::Timestamp,
    pub profile: UserProfile,
    pub stand_up: StandUpScore,
    pub two_step: TwoStepResult,
    pub locomo25: Locomo25Result,
    #[ts(type = "number")]
    pub level: LocomoLevel,
    pub ratings: AxisRatings,
}

impl AssessmentOutcome {
    pub fn stand_up_label(&self) -> &'static str {
        stand_up::label_for(self.stand_up)
    }
}

/// Classify a complete session. Fails with the list of missing inputs if
/// any of the four steps has not been recorded, or with a validation error
/// if a result lies outside its instrument's range.
pub fn evaluate(session: &AssessmentSession) -> Result<AssessmentOutcome, InstrumentError> {
    let (Some(profile), Some(stand_up), Some(two_step), Some(locomo25)) = (
        session.profile(),
        session.stand_up(),
        session.two_step(),
        session.locomo25(),
    ) else {
        return Err(InstrumentError::Incomplete(session.missing()));
    };

    let stand_up_value = f64::from(stand_up.value());
    let locomo25_total = f64::from(locomo25.total_score());
    StandUpTest.validate(stand_up_value)?;
    TwoStepTest.validate(two_step.score())?;
    Locomo25.validate(locomo25_total)?;

    let level = classify(stand_up.value(), two_step.score(), locomo25.total_score());
    let ratings = AxisRatings {
        stand_up: AxisRating::rate(&StandUpTest, stand_up_value),
        two_step: AxisRating::rate(&TwoStepTest, two_step.score()),
        locomo25: AxisRating::rate(&Locomo25, locomo25_total),
    };

    Ok(AssessmentOutcome {
        session_id: session.id(),
        started_at: session.started_at(),
        profile: profile.clone(),
        stand_up,
        two_step: *two_step,
        locomo25: locomo25.clone(),
        level,
        ratings,
    })
}
