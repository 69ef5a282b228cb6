//! Error handling for the coins crate.
//!
//! | Type | Raised by | Reaches the caller |
//! |------|-----------|--------------------|
//! | [`TransportError`] | listing requests that never completed or got a non-2xx | yes, inside [`CoinsError::Transport`] |
//! | [`CoinsError::InvalidResponse`] | undecodable listing payloads | yes |
//! | [`CoinsError::InvalidRequest`] | URLs that cannot be built | yes |
//! | [`IconError`] | icon requests | no, logged and dropped |

mod coins_error;
mod icon;
mod transport;

pub use coins_error::CoinsError;
pub use icon::IconError;
pub use transport::TransportError;

/// Type alias for Results using [`CoinsError`].
pub type CoinsResult<T> = Result<T, CoinsError>;
