//! In-memory icon cache.
//!
//! Icons are keyed by lowercase symbol and kept for the lifetime of the
//! cache. Concurrent requests for the same missing symbol share one fetch.

use futures::future::{BoxFuture, FutureExt, Shared};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use crate::error::IconError;
use crate::models::Icon;
use crate::traits::IconRepository;

type PendingIcon = Shared<BoxFuture<'static, Result<(), IconError>>>;

struct IconCacheInner {
    repository: Arc<dyn IconRepository>,
    icons: RwLock<HashMap<String, Icon>>,
    in_flight: Mutex<HashMap<String, PendingIcon>>,
}

/// Memoizing icon store. Cloning yields another handle to the same cache.
#[derive(Clone)]
pub struct IconCache {
    inner: Arc<IconCacheInner>,
}

impl std::fmt::Debug for IconCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IconCache")
            .field("len", &self.len())
            .finish()
    }
}

impl IconCache {
    pub fn new(repository: Arc<dyn IconRepository>) -> Self {
        Self {
            inner: Arc::new(IconCacheInner {
                repository,
                icons: RwLock::new(HashMap::new()),
                in_flight: Mutex::new(HashMap::new()),
            }),
        }
    }

    /// Cached icon for `symbol`, any case.
    pub fn get(&self, symbol: &str) -> Option<Icon> {
        self.inner
            .icons
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&symbol.to_lowercase())
            .cloned()
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.inner
            .icons
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(&symbol.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.inner
            .icons
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Make sure the icon for `symbol` is cached.
    ///
    /// Returns immediately when it already is. Otherwise joins the in-flight
    /// request for that symbol or starts one. Failures are not cached, so a
    /// later call tries again.
    pub async fn ensure(&self, symbol: &str) -> Result<(), IconError> {
        let key = symbol.to_lowercase();
        if self.contains(&key) {
            tracing::trace!(symbol = %key, "Icon cache hit");
            return Ok(());
        }

        let pending = {
            let mut in_flight = self
                .inner
                .in_flight
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            // A fetch may have stored the icon between the check above and this lock
            if self.contains(&key) {
                return Ok(());
            }
            match in_flight.get(&key) {
                Some(pending) => {
                    tracing::debug!(symbol = %key, "Joining in-flight icon request");
                    pending.clone()
                }
                None => {
                    let pending = Self::fetch_and_store(Arc::clone(&self.inner), key.clone())
                        .boxed()
                        .shared();
                    in_flight.insert(key, pending.clone());
                    pending
                }
            }
        };

        pending.await
    }

    async fn fetch_and_store(inner: Arc<IconCacheInner>, key: String) -> Result<(), IconError> {
        tracing::debug!(symbol = %key, "Fetching icon");
        let result = inner.repository.fetch_icon(&key).await;

        if let Ok(icon) = &result {
            inner
                .icons
                .write()
                .unwrap_or_else(PoisonError::into_inner)
                .insert(key.clone(), icon.clone());
        }
        // Icon is stored before the in-flight entry goes away; `ensure` relies on this order
        inner
            .in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&key);

        result.map(|_| ())
    }
}
