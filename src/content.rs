//! Paginated coin content.
//!
//! [`CoinsContent`] owns the accumulated coin list and the page cursor. Each
//! page operation fetches one page, prefetches the icons of its coins, waits
//! for every icon request to settle, and then merges the page in a single
//! critical section.
//!
//! Page operations are serialized: a `fetch_next_page` issued while a
//! `refresh` is running waits for it and then fetches the page after it.
//! Operations run on their own tokio task, so a caller that stops waiting
//! does not cancel the fetch; the page is still merged and only the caller's
//! copy of the result is lost.

use futures_util::StreamExt;
use std::collections::HashSet;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tokio::sync::Mutex;

use crate::adapters::{CoinCapApi, CoinIconApi};
use crate::cache::IconCache;
use crate::config::{CoinsConfig, CursorPolicy};
use crate::error::{CoinsError, CoinsResult, TransportError};
use crate::models::{Coin, Icon};
use crate::traits::{CoinRepository, IconRepository};

/// One fetched page.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    /// 1-based page number; 0 for a page that was never requested
    pub number: usize,
    pub coins: Vec<Coin>,
}

impl Page {
    /// A page standing in for a suppressed request.
    pub fn empty() -> Self {
        Self {
            number: 0,
            coins: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.coins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coins.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Merge {
    Replace,
    Append,
}

#[derive(Debug)]
struct PageState {
    /// Next page to fetch
    cursor: usize,
    coins: Vec<Coin>,
}

struct ContentInner {
    repository: Arc<dyn CoinRepository>,
    icons: IconCache,
    page_size: usize,
    icon_concurrency: usize,
    cursor_policy: CursorPolicy,
    /// Held for the whole of a page operation
    operation: Mutex<()>,
    state: RwLock<PageState>,
}

/// Handle to the accumulated coin list. Clones share the same state.
#[derive(Clone)]
pub struct CoinsContent {
    inner: Arc<ContentInner>,
}

impl std::fmt::Debug for CoinsContent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.inner.read_state();
        f.debug_struct("CoinsContent")
            .field("cursor", &state.cursor)
            .field("len", &state.coins.len())
            .field("page_size", &self.inner.page_size)
            .finish()
    }
}

impl CoinsContent {
    /// Create content over the given repositories. Nothing is fetched until
    /// [`initial_load`](Self::initial_load) or [`refresh`](Self::refresh).
    pub fn new(
        config: &CoinsConfig,
        repository: Arc<dyn CoinRepository>,
        icon_repository: Arc<dyn IconRepository>,
    ) -> Self {
        Self {
            inner: Arc::new(ContentInner {
                repository,
                icons: IconCache::new(icon_repository),
                page_size: config.page_size.max(1),
                icon_concurrency: config.icon_concurrency.max(1),
                cursor_policy: config.cursor_policy,
                operation: Mutex::new(()),
                state: RwLock::new(PageState {
                    cursor: 1,
                    coins: Vec::new(),
                }),
            }),
        }
    }

    /// Create content backed by the HTTP listing and icon services.
    pub fn from_config(config: &CoinsConfig) -> CoinsResult<Self> {
        let listing = CoinCapApi::from_config(config)?;
        let icons = CoinIconApi::from_config(config).map_err(|e| CoinsError::InvalidRequest {
            url: config.icon_base_url.clone(),
            message: e.to_string(),
        })?;
        Ok(Self::new(config, Arc::new(listing), Arc::new(icons)))
    }

    /// First load of the list. Same as [`refresh`](Self::refresh).
    pub async fn initial_load(&self) -> CoinsResult<Page> {
        tracing::info!(page_size = self.inner.page_size, "Loading initial coin page");
        self.refresh().await
    }

    /// Fetch page 1 and replace the accumulated list with it.
    ///
    /// On failure the list and cursor are left as they were.
    pub async fn refresh(&self) -> CoinsResult<Page> {
        self.run(Merge::Replace).await
    }

    /// Fetch the page at the cursor and append it.
    pub async fn fetch_next_page(&self) -> CoinsResult<Page> {
        self.run(Merge::Append).await
    }

    async fn run(&self, merge: Merge) -> CoinsResult<Page> {
        let inner = Arc::clone(&self.inner);
        let handle = tokio::spawn(async move { inner.page_operation(merge).await });
        match handle.await {
            Ok(result) => result,
            Err(err) if err.is_panic() => std::panic::resume_unwind(err.into_panic()),
            Err(err) => Err(TransportError::Other {
                message: format!("page fetch aborted: {}", err),
            }
            .into()),
        }
    }

    /// Snapshot of the accumulated list.
    pub fn coins(&self) -> Vec<Coin> {
        self.inner.read_state().coins.clone()
    }

    /// Coin at `index` in the accumulated list.
    pub fn coin(&self, index: usize) -> Option<Coin> {
        self.inner.read_state().coins.get(index).cloned()
    }

    pub fn len(&self) -> usize {
        self.inner.read_state().coins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Next page number to fetch.
    pub fn cursor(&self) -> usize {
        self.inner.read_state().cursor
    }

    pub fn page_size(&self) -> usize {
        self.inner.page_size
    }

    pub fn icon_for(&self, symbol: &str) -> Option<Icon> {
        self.inner.icons.get(symbol)
    }

    pub fn icons(&self) -> &IconCache {
        &self.inner.icons
    }
}

/// Offset of `page` and the page after it, or an error when either does
/// not fit in `usize`.
fn page_window(page: usize, page_size: usize) -> CoinsResult<(usize, usize)> {
    let offset = page.saturating_sub(1).checked_mul(page_size);
    let next = page.checked_add(1);
    match (offset, next) {
        (Some(offset), Some(next)) => Ok((offset, next)),
        _ => Err(CoinsError::InvalidRequest {
            url: format!("assets page {}", page),
            message: format!("offset overflows with page size {}", page_size),
        }),
    }
}

impl ContentInner {
    fn read_state(&self) -> RwLockReadGuard<'_, PageState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, PageState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    async fn page_operation(&self, merge: Merge) -> CoinsResult<Page> {
        let _operation = self.operation.lock().await;

        let (page_number, offset, next_cursor) = match merge {
            Merge::Replace => (1, 0, 2),
            Merge::Append => {
                let mut state = self.write_state();
                let page = state.cursor;
                let (offset, next) = page_window(page, self.page_size)?;
                if self.cursor_policy == CursorPolicy::AdvanceAlways {
                    state.cursor = next;
                }
                (page, offset, next)
            }
        };

        let coins = match self.repository.fetch_coins(offset, self.page_size).await {
            Ok(coins) => coins,
            Err(err) => {
                tracing::warn!(
                    page = page_number,
                    code = err.error_code(),
                    error = %err,
                    "Coin page fetch failed"
                );
                return Err(err);
            }
        };

        self.prefetch_icons(&coins).await;

        let total = {
            let mut state = self.write_state();
            match merge {
                Merge::Replace => {
                    state.coins = coins.clone();
                    state.cursor = next_cursor;
                }
                Merge::Append => {
                    state.coins.extend(coins.iter().cloned());
                    state.cursor = next_cursor;
                }
            }
            state.coins.len()
        };

        tracing::info!(
            page = page_number,
            fetched = coins.len(),
            total,
            replaced = merge == Merge::Replace,
            "Merged coin page"
        );

        Ok(Page {
            number: page_number,
            coins,
        })
    }

    /// Fetch icons for every coin not yet cached. Returns once all requests
    /// have settled. Failures are logged and dropped.
    async fn prefetch_icons(&self, coins: &[Coin]) {
        let mut seen = HashSet::new();
        let symbols: Vec<String> = coins
            .iter()
            .map(Coin::icon_key)
            .filter(|symbol| !self.icons.contains(symbol) && seen.insert(symbol.clone()))
            .collect();

        if symbols.is_empty() {
            return;
        }
        tracing::debug!(count = symbols.len(), "Prefetching icons");

        let results: Vec<_> = futures::stream::iter(symbols)
            .map(|symbol| {
                let icons = self.icons.clone();
                async move {
                    let result = icons.ensure(&symbol).await;
                    (symbol, result)
                }
            })
            .buffer_unordered(self.icon_concurrency)
            .collect()
            .await;

        for (symbol, result) in results {
            if let Err(err) = result {
                tracing::warn!(symbol = %symbol, error = %err, "Icon fetch failed");
            }
        }
    }
}
