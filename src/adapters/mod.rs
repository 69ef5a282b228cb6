//! Concrete implementations of the trait seams in [`crate::traits`].
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//! - [`CoinCapApi`] - listing pages from a coincap-style API
//! - [`CoinIconApi`] - icon downloads and decoding
//!
//! The [`mock`] submodule provides test doubles for all of them.

pub mod coin_icons;
pub mod coincap;
pub mod mock;
pub mod reqwest_http;

pub use coin_icons::CoinIconApi;
pub use coincap::CoinCapApi;
pub use mock::{MockCoinRepository, MockHttpClient, MockIconRepository};
pub use reqwest_http::ReqwestHttpClient;
