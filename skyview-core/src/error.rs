//! Failure kinds of a single forecast fetch.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Invalid forecast endpoint '{url}': {reason}")]
    InvalidEndpoint { url: String, reason: String },

    #[error("Forecast request failed: {0}")]
    TransportFailure(#[from] reqwest::Error),

    #[error("Forecast request failed with status {status}: {body}")]
    UnexpectedStatus { status: StatusCode, body: String },

    #[error("Failed to decode forecast response: {0}")]
    MalformedPayload(String),
}

impl FetchError {
    /// Stable short name for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidEndpoint { .. } => "invalid_endpoint",
            Self::TransportFailure(_) => "transport_failure",
            Self::UnexpectedStatus { .. } => "unexpected_status",
            Self::MalformedPayload(_) => "malformed_payload",
        }
    }

    /// User-friendly error message for the screen.
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidEndpoint { .. } => "Weather service address is invalid.".to_string(),
            Self::TransportFailure(_) => {
                "Could not reach the weather service. Check your connection.".to_string()
            }
            Self::UnexpectedStatus { status, .. } => {
                format!("Weather service is unavailable (HTTP {}). Try later.", status.as_u16())
            }
            Self::MalformedPayload(_) => "Weather service sent invalid data. Try later.".to_string(),
        }
    }
}
