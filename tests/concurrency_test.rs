//! Concurrent use of a shared CoinsContent handle.

use coins::adapters::mock::{MockCoinRepository, MockIconRepository};
use coins::{CoinsConfig, CoinsContent};
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

fn delayed_content(universe: usize, delay_ms: u64) -> (CoinsContent, MockCoinRepository, MockIconRepository) {
    let repo = MockCoinRepository::numbered(universe).with_delay(Duration::from_millis(delay_ms));
    let icons = MockIconRepository::new().with_delay(Duration::from_millis(delay_ms));
    let content = CoinsContent::new(
        &CoinsConfig::default(),
        Arc::new(repo.clone()),
        Arc::new(icons.clone()),
    );
    (content, repo, icons)
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_next_pages_are_distinct_and_ordered() {
    let (content, repo, _) = delayed_content(40, 10);
    content.refresh().await.unwrap();

    let (a, b, c) = tokio::join!(
        content.fetch_next_page(),
        content.fetch_next_page(),
        content.fetch_next_page()
    );
    let mut numbers = vec![a.unwrap().number, b.unwrap().number, c.unwrap().number];
    numbers.sort_unstable();
    assert_eq!(numbers, vec![2, 3, 4]);

    let symbols: Vec<String> = content.coins().into_iter().map(|c| c.symbol).collect();
    let expected: Vec<String> = (0..40).map(|i| format!("C{}", i)).collect();
    assert_eq!(symbols, expected);
    assert_eq!(content.cursor(), 5);

    let offsets: HashSet<usize> = repo.requests().into_iter().map(|(offset, _)| offset).collect();
    assert_eq!(offsets.len(), 4);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_refresh_racing_next_page_never_duplicates() {
    let (content, _, _) = delayed_content(40, 5);
    content.refresh().await.unwrap();
    content.fetch_next_page().await.unwrap();

    let (refreshed, next) = tokio::join!(content.refresh(), content.fetch_next_page());
    assert!(refreshed.is_ok());
    assert!(next.is_ok());

    let coins = content.coins();
    let unique: HashSet<&str> = coins.iter().map(|c| c.symbol.as_str()).collect();
    assert_eq!(unique.len(), coins.len());
    assert!(coins.len() == 10 || coins.len() == 20 || coins.len() == 30);
    assert_eq!(coins[0].symbol, "C0");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_abandoned_fetch_still_merges() {
    let (content, _, _) = delayed_content(30, 50);
    content.refresh().await.unwrap();

    let abandoned =
        tokio::time::timeout(Duration::from_millis(5), content.fetch_next_page()).await;
    assert!(abandoned.is_err());
    assert_eq!(content.len(), 10);

    // The fetch keeps running on its own task
    for _ in 0..50 {
        if content.len() == 20 {
            break;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    assert_eq!(content.len(), 20);
    assert_eq!(content.cursor(), 3);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_shared_symbols_across_handles_fetch_icon_once() {
    let (content, _, icons) = delayed_content(10, 30);
    let other = content.clone();

    let (a, b) = tokio::join!(content.refresh(), other.refresh());
    assert!(a.is_ok() && b.is_ok());

    assert_eq!(icons.total_calls(), 10);
    assert_eq!(content.icons().len(), 10);
    assert_eq!(content.len(), 10);
}
