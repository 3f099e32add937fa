use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransmitError {
    #[error("no logging endpoint configured")]
    NotConfigured,

    #[error("invalid endpoint URL: {0}")]
    InvalidEndpoint(String),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("endpoint responded with HTTP {0}")]
    Status(u16),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl TransmitError {
    /// Whether the same request may succeed if the user tries again.
    pub fn is_retryable(&self) -> bool {
        match self {
            TransmitError::Transport(_) => true,
            TransmitError::Status(code) => *code == 429 || *code >= 500,
            TransmitError::NotConfigured
            | TransmitError::InvalidEndpoint(_)
            | TransmitError::Serialization(_) => false,
        }
    }
}

impl From<ureq::Error> for TransmitError {
    fn from(e: ureq::Error) -> Self {
        match e {
            ureq::Error::StatusCode(code) => TransmitError::Status(code),
            other => TransmitError::Transport(other.to_string()),
        }
    }
}
