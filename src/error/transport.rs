//! Transport-level error types.
//!
//! Failures that happen while talking to the listing service: the request
//! never completed, or the server answered with a non-2xx status.

use std::fmt;

use crate::traits::HttpError;

/// Transport error variants.
#[derive(Debug, Clone, PartialEq)]
pub enum TransportError {
    /// Connection to the server failed.
    ConnectionFailed { url: String, message: String },

    /// Request timed out.
    Timeout { url: String, message: String },

    /// HTTP status error (non-2xx response).
    HttpStatus { status: u16, message: String },

    /// Generic transport error.
    Other { message: String },
}

impl TransportError {
    /// Build a transport error from an [`HttpError`] raised while requesting `url`.
    pub fn from_http(url: &str, err: HttpError) -> Self {
        match err {
            HttpError::ConnectionFailed(message) => TransportError::ConnectionFailed {
                url: url.to_string(),
                message,
            },
            HttpError::Timeout(message) => TransportError::Timeout {
                url: url.to_string(),
                message,
            },
            HttpError::InvalidUrl(message) | HttpError::Other(message) => {
                TransportError::Other { message }
            }
        }
    }

    /// Check if this error is likely transient.
    ///
    /// Nothing in the crate retries automatically; this only informs the
    /// caller whether a user-triggered retry is worth offering.
    pub fn is_retryable(&self) -> bool {
        match self {
            TransportError::ConnectionFailed { .. } => true,
            TransportError::Timeout { .. } => true,
            TransportError::HttpStatus { status, .. } => {
                *status >= 500 || *status == 429 || *status == 408
            }
            TransportError::Other { .. } => false,
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            TransportError::ConnectionFailed { .. } => {
                "Unable to reach the price service. Please check your internet connection."
                    .to_string()
            }
            TransportError::Timeout { .. } => {
                "The price service took too long to respond. Pull to refresh to try again."
                    .to_string()
            }
            TransportError::HttpStatus { status, .. } => match *status {
                404 => "The requested page of coins was not found.".to_string(),
                429 => "Too many requests. Please wait a moment and try again.".to_string(),
                500..=599 => {
                    "The price service is experiencing issues. Please try again later.".to_string()
                }
                _ => format!(
                    "The price service returned an error (HTTP {}). Please try again.",
                    status
                ),
            },
            TransportError::Other { message } => format!("Network error: {}", message),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            TransportError::ConnectionFailed { .. } => "E_NET_CONN",
            TransportError::Timeout { .. } => "E_NET_TIMEOUT",
            TransportError::HttpStatus { .. } => "E_NET_HTTP",
            TransportError::Other { .. } => "E_NET_OTHER",
        }
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::ConnectionFailed { url, message } => {
                write!(f, "Connection to {} failed: {}", url, message)
            }
            TransportError::Timeout { url, message } => {
                write!(f, "Request to {} timed out: {}", url, message)
            }
            TransportError::HttpStatus { status, message } => {
                write!(f, "HTTP {}: {}", status, message)
            }
            TransportError::Other { message } => write!(f, "Transport error: {}", message),
        }
    }
}

impl std::error::Error for TransportError {}
