use thiserror::Error;

use crate::wizard::Step;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid profile: {0}")]
    InvalidProfile(String),

    #[error("{field} value {value} is outside range [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{field} {message}, got {value}")]
    InvalidMeasurement {
        field: &'static str,
        value: f64,
        message: &'static str,
    },

    #[error("inconsistent session: {0}")]
    InconsistentSession(String),

    #[error("incomplete input: {0}")]
    Incomplete(String),

    #[error("{0} has already been recorded for this session")]
    AlreadyRecorded(&'static str),

    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("cannot submit at step {actual:?}; expected step {expected:?}")]
    WrongStep { expected: Step, actual: Step },
}
