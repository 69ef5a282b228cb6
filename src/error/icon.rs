//! Icon fetch errors.
//!
//! These never fail a page fetch. The coordinator logs them and moves on.

use thiserror::Error;

/// Failure to obtain an icon for one symbol.
///
/// `Clone` because one in-flight request result is handed to every waiter.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IconError {
    /// The request itself failed.
    #[error("icon request for {symbol} failed: {message}")]
    Fetch { symbol: String, message: String },

    /// The icon service has no icon for this symbol.
    #[error("no icon for {symbol} (HTTP {status})")]
    NotFound { symbol: String, status: u16 },

    /// The bytes returned are not a decodable image.
    #[error("icon for {symbol} could not be decoded: {message}")]
    Decode { symbol: String, message: String },
}

impl IconError {
    /// Symbol the failure relates to.
    pub fn symbol(&self) -> &str {
        match self {
            IconError::Fetch { symbol, .. }
            | IconError::NotFound { symbol, .. }
            | IconError::Decode { symbol, .. } => symbol,
        }
    }
}
