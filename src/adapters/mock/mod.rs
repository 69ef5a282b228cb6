//! Mock implementations for testing.
//!
//! - [`MockHttpClient`] - HTTP client with configurable responses
//! - [`MockCoinRepository`] - listing pages served from an in-memory universe
//! - [`MockIconRepository`] - icons with per-symbol call counting

pub mod http;
pub mod repository;

pub use http::{MockHttpClient, MockResponse, RecordedRequest};
pub use repository::{coin, MockCoinRepository, MockIconRepository};
