//! Configuration for the coins client.

use std::time::Duration;

pub const DEFAULT_LISTING_BASE_URL: &str = "https://api.coincap.io/v2";
pub const DEFAULT_ICON_BASE_URL: &str = "https://coinicons-api.vercel.app";
pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const DEFAULT_ICON_CONCURRENCY: usize = 8;

/// How `fetch_next_page` moves the page cursor when a fetch fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorPolicy {
    /// The cursor only moves once a page has been merged. A failed fetch
    /// leaves it in place so the same page is retried.
    #[default]
    AdvanceOnSuccess,
    /// The cursor moves once per call whatever the outcome, so a failed
    /// page is skipped on the next call.
    AdvanceAlways,
}

/// Configuration for [`crate::content::CoinsContent`] and the HTTP adapters.
///
/// # Example
///
/// ```ignore
/// use coins::config::CoinsConfig;
///
/// let config = CoinsConfig::default()
///     .with_page_size(25)
///     .with_icon_concurrency(4);
/// ```
#[derive(Debug, Clone)]
pub struct CoinsConfig {
    /// Base URL of the listing API (default: coincap v2)
    pub listing_base_url: String,
    /// Base URL of the icon API
    pub icon_base_url: String,
    /// Records per page, never zero
    pub page_size: usize,
    /// Upper bound on concurrent icon requests for one page
    pub icon_concurrency: usize,
    /// Per-request timeout applied by the reqwest client
    pub request_timeout: Duration,
    pub cursor_policy: CursorPolicy,
}

impl Default for CoinsConfig {
    fn default() -> Self {
        Self {
            listing_base_url: DEFAULT_LISTING_BASE_URL.to_string(),
            icon_base_url: DEFAULT_ICON_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            icon_concurrency: DEFAULT_ICON_CONCURRENCY,
            request_timeout: Duration::from_secs(15),
            cursor_policy: CursorPolicy::default(),
        }
    }
}

impl CoinsConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page size. Zero is clamped to one.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn with_listing_base_url(mut self, url: impl Into<String>) -> Self {
        self.listing_base_url = url.into();
        self
    }

    pub fn with_icon_base_url(mut self, url: impl Into<String>) -> Self {
        self.icon_base_url = url.into();
        self
    }

    /// Set the icon fan-out bound. Zero is clamped to one.
    pub fn with_icon_concurrency(mut self, concurrency: usize) -> Self {
        self.icon_concurrency = concurrency.max(1);
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_cursor_policy(mut self, policy: CursorPolicy) -> Self {
        self.cursor_policy = policy;
        self
    }

    /// Build config from `COINS_LISTING_URL`, `COINS_ICON_URL` and
    /// `COINS_PAGE_SIZE`. Missing or unparsable values keep their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(url) = lookup("COINS_LISTING_URL").filter(|v| !v.trim().is_empty()) {
            config = config.with_listing_base_url(url.trim().trim_end_matches('/'));
        }
        if let Some(url) = lookup("COINS_ICON_URL").filter(|v| !v.trim().is_empty()) {
            config = config.with_icon_base_url(url.trim().trim_end_matches('/'));
        }
        if let Some(size) = lookup("COINS_PAGE_SIZE").and_then(|v| v.trim().parse::<usize>().ok()) {
            config = config.with_page_size(size);
        }
        config
    }
}
