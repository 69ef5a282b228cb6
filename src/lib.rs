//! Coins - paginated cryptocurrency listing with an in-memory icon cache.
//!
//! [`content::CoinsContent`] fetches pages from the listing service and
//! prefetches icons; [`view_model::CoinsViewModel`] layers search on top.

pub mod adapters;
pub mod cache;
pub mod cli;
pub mod config;
pub mod content;
pub mod error;
pub mod models;
pub mod search;
pub mod traits;
pub mod view_model;

pub use config::{CoinsConfig, CursorPolicy};
pub use content::{CoinsContent, Page};
pub use error::{CoinsError, CoinsResult};
pub use view_model::CoinsViewModel;
