use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::calc;
use crate::error::CoreError;

/// Two-step test measurement. `score` is always derived from the stride
/// lengths and the height it was measured against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(try_from = "TwoStepRecord", into = "TwoStepRecord")]
#[ts(export)]
pub struct TwoStepResult {
    step1_cm: f64,
    step2_cm: f64,
    height_cm: f64,
    score: f64,
}

impl TwoStepResult {
    pub fn measure(step1_cm: f64, step2_cm: f64, height_cm: f64) -> Result<Self, CoreError> {
        for (field, value) in [("step1_cm", step1_cm), ("step2_cm", step2_cm)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(CoreError::InvalidMeasurement {
                    field,
                    value,
                    message: "must be a positive length in cm",
                });
            }
        }
        if !height_cm.is_finite() || height_cm < 0.0 {
            return Err(CoreError::InvalidMeasurement {
                field: "height_cm",
                value: height_cm,
                message: "must not be negative",
            });
        }

        Ok(Self {
            step1_cm,
            step2_cm,
            height_cm,
            score: calc::two_step_score(step1_cm, step2_cm, height_cm),
        })
    }

    pub fn step1_cm(&self) -> f64 {
        self.step1_cm
    }

    pub fn step2_cm(&self) -> f64 {
        self.step2_cm
    }

    pub fn height_cm(&self) -> f64 {
        self.height_cm
    }

    pub fn score(&self) -> f64 {
        self.score
    }
}

#[derive(Serialize, Deserialize)]
struct TwoStepRecord {
    step1_cm: f64,
    step2_cm: f64,
    height_cm: f64,
    /// Written for readers of the JSON; recomputed on load.
    #[serde(default)]
    score: f64,
}

impl TryFrom<TwoStepRecord> for TwoStepResult {
    type Error = CoreError;

    fn try_from(r: TwoStepRecord) -> Result<Self, Self::Error> {
        TwoStepResult::measure(r.step1_cm, r.step2_cm, r.height_cm)
    }
}

impl From<TwoStepResult> for TwoStepRecord {
    fn from(t: TwoStepResult) -> Self {
        Self {
            step1_cm: t.step1_cm,
            step2_cm: t.step2_cm,
            height_cm: t.height_cm,
            score: t.score,
        }
    }
}
