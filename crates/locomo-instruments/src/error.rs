use thiserror::Error;

use crate::scoring::ValidationError;

#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("assessment incomplete, missing: {}", .0.join(", "))]
    Incomplete(Vec<&'static str>),

    #[error("invalid advice catalog: {0}")]
    Catalog(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
