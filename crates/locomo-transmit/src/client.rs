use std::time::Duration;

use tracing::{info, warn};

use crate::error::TransmitError;
use crate::payload::ResultPayload;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Posts result payloads to the logging endpoint as JSON.
pub struct ResultTransmitter {
    agent: ureq::Agent,
    endpoint: String,
}

impl ResultTransmitter {
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, TransmitError> {
        let endpoint = endpoint.trim();
        if endpoint.is_empty() {
            return Err(TransmitError::NotConfigured);
        }
        if !(endpoint.starts_with("https://") || endpoint.starts_with("http://")) {
            return Err(TransmitError::InvalidEndpoint(endpoint.to_string()));
        }

        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(Some(timeout))
            .build()
            .into();

        Ok(Self {
            agent,
            endpoint: endpoint.to_string(),
        })
    }

    /// Build from an optional configured endpoint.
    pub fn from_config(endpoint: Option<&str>) -> Result<Self, TransmitError> {
        let endpoint = endpoint.ok_or(TransmitError::NotConfigured)?;
        Self::new(endpoint, DEFAULT_TIMEOUT)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send one payload. A single attempt; the caller decides whether to
    /// offer a retry based on [`TransmitError::is_retryable`].
    pub fn send(&self, payload: &ResultPayload) -> Result<(), TransmitError> {
        let body = serde_json::to_string(payload)?;

        let result = self
            .agent
            .post(self.endpoint.as_str())
            .header("Content-Type", "application/json")
            .send(body.as_str());

        match result {
            Ok(response) => {
                info!(
                    session_id = %payload.session_id,
                    level = payload.level,
                    status = response.status().as_u16(),
                    "result payload delivered"
                );
                Ok(())
            }
            Err(e) => {
                let err = TransmitError::from(e);
                warn!(
                    session_id = %payload.session_id,
                    retryable = err.is_retryable(),
                    error = %err,
                    "result payload not delivered"
                );
                Err(err)
            }
        }
    }
}
