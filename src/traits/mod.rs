//! Trait abstractions for dependency injection and testability.
//!
//! - [`HttpClient`] - raw HTTP GET transport
//! - [`CoinRepository`] - pages of coin records from the listing service
//! - [`IconRepository`] - icon images by symbol

pub mod http;
pub mod repository;

pub use http::{Headers, HttpClient, HttpError, Response};
pub use repository::{CoinRepository, IconRepository};
