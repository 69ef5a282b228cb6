//! Scripted repositories for coordinator tests.

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::error::{CoinsError, CoinsResult, IconError};
use crate::models::{blank_png, Coin, Icon};
use crate::traits::{CoinRepository, IconRepository};

/// Build a coin with only the fields tests care about.
pub fn coin(symbol: &str, name: &str) -> Coin {
    Coin {
        id: name.to_lowercase(),
        rank: "0".to_string(),
        symbol: symbol.to_string(),
        name: name.to_string(),
        supply: "0".to_string(),
        max_supply: None,
        market_cap_usd: "0".to_string(),
        volume_usd_24hr: "0".to_string(),
        price_usd: "1.00".to_string(),
        change_percent_24hr: "0.00".to_string(),
        vwap_24hr: "0".to_string(),
        explorer: None,
    }
}

/// Listing repository that serves a fixed universe of coins by offset/limit.
///
/// Queued failures are returned (in order) before falling back to the universe.
#[derive(Debug, Clone, Default)]
pub struct MockCoinRepository {
    universe: Arc<Mutex<Vec<Coin>>>,
    failures: Arc<Mutex<VecDeque<CoinsError>>>,
    requests: Arc<Mutex<Vec<(usize, usize)>>>,
    delay: Option<Duration>,
}

impl MockCoinRepository {
    pub fn new(universe: Vec<Coin>) -> Self {
        Self {
            universe: Arc::new(Mutex::new(universe)),
            ..Self::default()
        }
    }

    /// `count` coins named `Coin 0`, `Coin 1`, ... with symbols `C0`, `C1`, ...
    pub fn numbered(count: usize) -> Self {
        Self::new(
            (0..count)
                .map(|i| coin(&format!("C{}", i), &format!("Coin {}", i)))
                .collect(),
        )
    }

    /// Delay every response, to hold requests in flight.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Make the next request fail with `err`.
    pub fn fail_next(&self, err: CoinsError) {
        self.failures.lock().unwrap().push_back(err);
    }

    /// Replace the served coins.
    pub fn set_universe(&self, universe: Vec<Coin>) {
        *self.universe.lock().unwrap() = universe;
    }

    /// `(offset, limit)` of every request made so far.
    pub fn requests(&self) -> Vec<(usize, usize)> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl CoinRepository for MockCoinRepository {
    async fn fetch_coins(&self, offset: usize, limit: usize) -> CoinsResult<Vec<Coin>> {
        self.requests.lock().unwrap().push((offset, limit));
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if let Some(err) = self.failures.lock().unwrap().pop_front() {
            return Err(err);
        }
        let universe = self.universe.lock().unwrap();
        Ok(universe.iter().skip(offset).take(limit).cloned().collect())
    }
}

/// Icon repository that returns a tiny PNG for every symbol except those
/// marked missing, and counts requests per symbol.
#[derive(Debug, Clone, Default)]
pub struct MockIconRepository {
    missing: Arc<Mutex<Vec<String>>>,
    calls: Arc<Mutex<HashMap<String, usize>>>,
    delay: Option<Duration>,
}

impl MockIconRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Answer requests for `symbol` with [`IconError::NotFound`].
    pub fn set_missing(&self, symbol: &str) {
        self.missing.lock().unwrap().push(symbol.to_string());
    }

    /// Requests made for `symbol`.
    pub fn calls_for(&self, symbol: &str) -> usize {
        self.calls.lock().unwrap().get(symbol).copied().unwrap_or(0)
    }

    /// Requests made across all symbols.
    pub fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().values().sum()
    }
}

#[async_trait]
impl IconRepository for MockIconRepository {
    async fn fetch_icon(&self, symbol: &str) -> Result<Icon, IconError> {
        *self
            .calls
            .lock()
            .unwrap()
            .entry(symbol.to_string())
            .or_insert(0) += 1;
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.missing.lock().unwrap().iter().any(|s| s == symbol) {
            return Err(IconError::NotFound {
                symbol: symbol.to_string(),
                status: 404,
            });
        }
        Ok(Icon::new(symbol, blank_png(1, 1), 1, 1))
    }
}
