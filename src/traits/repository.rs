//! Remote data service seams.
//!
//! The coordinator only talks to these two traits. Production code wires in
//! [`crate::adapters::CoinCapApi`] and [`crate::adapters::CoinIconApi`]; tests
//! use the scripted repositories in [`crate::adapters::mock`].

use async_trait::async_trait;

use crate::error::{CoinsResult, IconError};
use crate::models::{Coin, Icon};

/// Source of coin listing pages.
#[async_trait]
pub trait CoinRepository: Send + Sync {
    /// Fetch `limit` coin records starting at `offset`.
    async fn fetch_coins(&self, offset: usize, limit: usize) -> CoinsResult<Vec<Coin>>;
}

/// Source of coin icons.
#[async_trait]
pub trait IconRepository: Send + Sync {
    /// Fetch and decode the icon for a lowercase symbol.
    async fn fetch_icon(&self, symbol: &str) -> Result<Icon, IconError>;
}
