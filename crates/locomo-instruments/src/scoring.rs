use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// Which way a measurement improves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Direction {
    /// Stand-up ordinal and two-step ratio.
    HigherIsBetter,
    /// Locomo25 questionnaire total.
    LowerIsBetter,
}

/// Defines the valid range for a score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreRange {
    pub min: f64,
    pub max: f64,
    pub step: Option<f64>,
}

impl ScoreRange {
    pub fn contains(&self, value: f64) -> bool {
        if !(self.min..=self.max).contains(&value) {
            return false;
        }
        if let Some(step) = self.step {
            let remainder = (value - self.min) % step;
            // Allow floating point tolerance
            remainder < 1e-9 || (step - remainder) < 1e-9
        } else {
            true
        }
    }
}

/// Level boundaries for one axis, most severe first.
///
/// How a value is compared against them depends on the instrument's
/// [`Direction`]: strictly below for higher-is-better axes, at or above for
/// lower-is-better ones.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Cutoffs {
    pub level3: f64,
    pub level2: f64,
    pub level1: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    pub instrument_id: String,
    pub value: f64,
    pub expected_range: ScoreRange,
    pub message: String,
}
