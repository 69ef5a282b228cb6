//! Consumer-facing view over [`CoinsContent`] with search.
//!
//! The view model keeps its own snapshot of the accumulated list and a
//! filtered copy while a search is active. Both are rebuilt from the
//! content, never shared with it.

use crate::content::{CoinsContent, Page};
use crate::error::CoinsResult;
use crate::models::{Coin, CoinCellModel, CoinDetailModel, Icon};
use crate::search::filter_coins;

/// Rows from the end of the list at which the next page is requested.
pub const LOAD_MORE_THRESHOLD: usize = 4;

#[derive(Debug)]
pub struct CoinsViewModel {
    content: CoinsContent,
    coins: Vec<Coin>,
    filtered: Vec<Coin>,
    search_text: String,
}

impl CoinsViewModel {
    pub fn new(content: CoinsContent) -> Self {
        let coins = content.coins();
        Self {
            content,
            coins,
            filtered: Vec::new(),
            search_text: String::new(),
        }
    }

    pub fn content(&self) -> &CoinsContent {
        &self.content
    }

    pub fn is_searching(&self) -> bool {
        !self.search_text.is_empty()
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// Update the search text and recompute the filtered list.
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
        self.apply_filter();
    }

    /// Number of coins in the active view.
    pub fn count(&self) -> usize {
        self.active().len()
    }

    /// Coin at `index` in the active view.
    pub fn item_at(&self, index: usize) -> Option<&Coin> {
        self.active().get(index)
    }

    /// Row model for the coin at `index`, with its icon if cached.
    pub fn cell_at(&self, index: usize) -> Option<CoinCellModel> {
        let coin = self.item_at(index)?;
        Some(CoinCellModel::new(coin, self.icon_for(&coin.symbol)))
    }

    /// Detail figures for the coin at `index` in the active view.
    pub fn detail_at(&self, index: usize) -> Option<CoinDetailModel> {
        self.item_at(index).map(CoinDetailModel::new)
    }

    pub fn icon_for(&self, symbol: &str) -> Option<Icon> {
        self.content.icon_for(symbol)
    }

    /// Whether showing `row` should trigger [`load_next_page`](Self::load_next_page).
    ///
    /// True only for the row [`LOAD_MORE_THRESHOLD`] from the end of the list,
    /// so scrolling past it fires once per page. Never true while searching
    /// or when the list is shorter than the threshold.
    pub fn should_load_more(&self, row: usize) -> bool {
        if self.is_searching() {
            return false;
        }
        self.count()
            .checked_sub(LOAD_MORE_THRESHOLD)
            .is_some_and(|trigger| row == trigger)
    }

    /// Pull-to-refresh: reload page 1 and rebuild the view.
    pub async fn refresh(&mut self) -> CoinsResult<Page> {
        let page = self.content.refresh().await?;
        self.reload();
        Ok(page)
    }

    /// Infinite scroll: append the next page. Does nothing while searching.
    pub async fn load_next_page(&mut self) -> CoinsResult<Page> {
        if self.is_searching() {
            tracing::debug!(search = %self.search_text, "Skipping next page while searching");
            return Ok(Page::empty());
        }
        let page = self.content.fetch_next_page().await?;
        self.reload();
        Ok(page)
    }

    /// Re-read the accumulated list from the content, e.g. after another
    /// handle changed it.
    pub fn reload(&mut self) {
        self.coins = self.content.coins();
        self.apply_filter();
    }

    fn active(&self) -> &[Coin] {
        if self.is_searching() {
            &self.filtered
        } else {
            &self.coins
        }
    }

    fn apply_filter(&mut self) {
        self.filtered = filter_coins(&self.coins, &self.search_text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{coin, MockCoinRepository, MockIconRepository};
    use crate::config::CoinsConfig;
    use std::sync::Arc;

    fn view_model(repo: &MockCoinRepository) -> CoinsViewModel {
        let content = CoinsContent::new(
            &CoinsConfig::default(),
            Arc::new(repo.clone()),
            Arc::new(MockIconRepository::new()),
        );
        CoinsViewModel::new(content)
    }

    #[tokio::test]
    async fn test_search_eth() {
        let repo = MockCoinRepository::new(vec![coin("BTC", "Bitcoin"), coin("ETH", "Ethereum")]);
        let mut vm = view_model(&repo);
        vm.refresh().await.unwrap();

        vm.set_search_text("eth");
        assert_eq!(vm.count(), 1);
        assert_eq!(vm.item_at(0).unwrap().symbol, "ETH");
        assert!(vm.item_at(1).is_none());
    }

    #[tokio::test]
    async fn test_clearing_search_restores_full_list() {
        let repo = MockCoinRepository::new(vec![coin("BTC", "Bitcoin"), coin("ETH", "Ethereum")]);
        let mut vm = view_model(&repo);
        vm.refresh().await.unwrap();

        vm.set_search_text("btc");
        assert_eq!(vm.count(), 1);
        vm.set_search_text("");
        assert!(!vm.is_searching());
        assert_eq!(vm.count(), 2);
        assert!(vm.filtered.is_empty());
    }

    #[tokio::test]
    async fn test_no_match_is_empty_view() {
        let repo = MockCoinRepository::new(vec![coin("BTC", "Bitcoin")]);
        let mut vm = view_model(&repo);
        vm.refresh().await.unwrap();

        vm.set_search_text("doge");
        assert_eq!(vm.count(), 0);
        assert!(vm.item_at(0).is_none());
    }

    #[tokio::test]
    async fn test_load_next_page_suppressed_while_searching() {
        let repo = MockCoinRepository::numbered(30);
        let mut vm = view_model(&repo);
        vm.refresh().await.unwrap();

        vm.set_search_text("coin 1");
        let page = vm.load_next_page().await.unwrap();
        assert!(page.is_empty());
        assert_eq!(repo.requests().len(), 1);
        assert_eq!(vm.content().cursor(), 2);
    }

    #[tokio::test]
    async fn test_filter_recomputed_after_new_page() {
        let repo = MockCoinRepository::numbered(20);
        let mut vm = view_model(&repo);
        vm.refresh().await.unwrap();
        vm.set_search_text("c1");
        // C1 only on the first page
        assert_eq!(vm.count(), 1);

        vm.set_search_text("");
        vm.load_next_page().await.unwrap();
        vm.set_search_text("c1");
        // C1 and C10..C19
        assert_eq!(vm.count(), 11);
    }

    #[tokio::test]
    async fn test_cell_at_includes_icon() {
        let repo = MockCoinRepository::new(vec![coin("BTC", "Bitcoin")]);
        let mut vm = view_model(&repo);
        vm.refresh().await.unwrap();

        let cell = vm.cell_at(0).unwrap();
        assert_eq!(cell.symbol, "BTC");
        assert!(cell.icon.is_some());
        assert!(vm.cell_at(1).is_none());
    }

    #[tokio::test]
    async fn test_reload_picks_up_other_handle() {
        let repo = MockCoinRepository::numbered(20);
        let mut vm = view_model(&repo);
        let other = vm.content().clone();

        other.refresh().await.unwrap();
        assert_eq!(vm.count(), 0);
        vm.reload();
        assert_eq!(vm.count(), 10);
    }

    #[tokio::test]
    async fn test_should_load_more_near_end() {
        let repo = MockCoinRepository::numbered(30);
        let mut vm = view_model(&repo);
        assert!(!vm.should_load_more(0));

        vm.refresh().await.unwrap();
        assert!(vm.should_load_more(6));
        assert!(!vm.should_load_more(5));
        assert!(!vm.should_load_more(9));

        vm.load_next_page().await.unwrap();
        assert!(!vm.should_load_more(6));
        assert!(vm.should_load_more(16));
    }

    #[tokio::test]
    async fn test_should_load_more_false_while_searching() {
        let repo = MockCoinRepository::numbered(30);
        let mut vm = view_model(&repo);
        vm.refresh().await.unwrap();

        vm.set_search_text("coin");
        assert_eq!(vm.count(), 10);
        assert!(!vm.should_load_more(6));
    }

    #[tokio::test]
    async fn test_should_load_more_short_list() {
        let repo = MockCoinRepository::numbered(3);
        let mut vm = view_model(&repo);
        vm.refresh().await.unwrap();
        assert!((0..3).all(|row| !vm.should_load_more(row)));
    }

    #[tokio::test]
    async fn test_detail_at_follows_active_view() {
        let repo = MockCoinRepository::new(vec![coin("BTC", "Bitcoin"), coin("ETH", "Ethereum")]);
        let mut vm = view_model(&repo);
        vm.refresh().await.unwrap();

        vm.set_search_text("eth");
        let detail = vm.detail_at(0).unwrap();
        assert_eq!(detail.symbol, "ETH");
        assert_eq!(detail.formatted_price(), "$ 1.00");
        assert_eq!(detail.max_supply, "1.0");
        assert!(vm.detail_at(1).is_none());
    }
}
