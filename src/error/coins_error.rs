//! Error type for page fetches.

use thiserror::Error;

use super::transport::TransportError;

/// Failures surfaced to callers of [`crate::content::CoinsContent`] page
/// operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoinsError {
    /// The listing service could not be reached or answered with an error status.
    #[error("{0}")]
    Transport(#[from] TransportError),

    /// The listing service answered but the payload could not be decoded.
    #[error("Invalid response from {url}: {message}")]
    InvalidResponse { url: String, message: String },

    /// The request URL could not be built.
    #[error("Invalid request URL {url}: {message}")]
    InvalidRequest { url: String, message: String },
}

impl CoinsError {
    /// Check if a user-triggered retry is likely to succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            CoinsError::Transport(err) => err.is_retryable(),
            CoinsError::InvalidResponse { .. } => false,
            CoinsError::InvalidRequest { .. } => false,
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            CoinsError::Transport(err) => err.error_code(),
            CoinsError::InvalidResponse { .. } => "E_RESP_INVALID",
            CoinsError::InvalidRequest { .. } => "E_REQ_INVALID",
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            CoinsError::Transport(err) => err.user_message(),
            CoinsError::InvalidResponse { .. } => {
                "Received an unexpected response from the price service.".to_string()
            }
            CoinsError::InvalidRequest { .. } => {
                "The price service address is misconfigured.".to_string()
            }
        }
    }
}
