//! End-to-end tests for CoinsContent and CoinsViewModel over real HTTP
//! against a wiremock server.

mod common;

use coins::error::TransportError;
use coins::{CoinsContent, CoinsError, CoinsViewModel};
use common::*;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_refresh_and_next_page_over_http() {
    let server = MockServer::start().await;
    let coins = ranked_coins();
    mount_page(&server, 0, 5, &coins[0..5]).await;
    mount_page(&server, 5, 5, &coins[5..10]).await;
    mount_icons(&server).await;

    let content = http_content(&config_for(&server, 5));

    let first = content.refresh().await.unwrap();
    assert_eq!(first.number, 1);
    assert_eq!(first.coins[0].name, "Bitcoin");
    assert_eq!(content.cursor(), 2);

    let second = content.fetch_next_page().await.unwrap();
    assert_eq!(second.coins[0].symbol, "USDC");
    assert_eq!(content.len(), 10);
    assert_eq!(content.cursor(), 3);

    // Every coin's icon is cached by the time the page completes
    for coin in content.coins() {
        let icon = content.icon_for(&coin.symbol).unwrap();
        assert_eq!((icon.width, icon.height), (8, 8));
    }
}

#[tokio::test]
async fn test_missing_icon_does_not_fail_page() {
    let server = MockServer::start().await;
    let coins = ranked_coins();
    mount_page(&server, 0, 3, &coins[0..3]).await;
    mount_missing_icon(&server, "usdt").await;
    mount_icons(&server).await;

    let content = http_content(&config_for(&server, 3));
    let page = content.refresh().await.unwrap();

    assert_eq!(page.len(), 3);
    assert!(content.icon_for("BTC").is_some());
    assert!(content.icon_for("USDT").is_none());
    assert_eq!(content.icons().len(), 2);
}

#[tokio::test]
async fn test_server_error_surfaces_as_transport() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/assets"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&server)
        .await;

    let content = http_content(&config_for(&server, 10));
    let err = content.refresh().await.unwrap_err();

    assert!(matches!(
        err,
        CoinsError::Transport(TransportError::HttpStatus { status: 502, .. })
    ));
    assert!(err.is_retryable());
    assert!(content.is_empty());
    assert_eq!(content.cursor(), 1);
}

#[tokio::test]
async fn test_malformed_payload_surfaces_as_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/assets"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"data\": [ {\"id\": 1 } ]"))
        .mount(&server)
        .await;

    let content = http_content(&config_for(&server, 10));
    let err = content.refresh().await.unwrap_err();

    assert!(matches!(err, CoinsError::InvalidResponse { .. }));
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn test_unreachable_listing_service() {
    let config = coins::CoinsConfig::default()
        .with_listing_base_url("http://127.0.0.1:59998/v2")
        .with_icon_base_url("http://127.0.0.1:59998");
    let content = CoinsContent::from_config(&config).unwrap();

    let err = content.refresh().await.unwrap_err();
    assert!(matches!(err, CoinsError::Transport(_)));
}

#[tokio::test]
async fn test_view_model_search_over_http() {
    let server = MockServer::start().await;
    let coins = ranked_coins();
    mount_page(&server, 0, 6, &coins[0..6]).await;
    mount_page(&server, 6, 6, &coins[6..12]).await;
    mount_icons(&server).await;

    let mut view = CoinsViewModel::new(http_content(&config_for(&server, 6)));
    view.refresh().await.unwrap();
    view.load_next_page().await.unwrap();
    assert_eq!(view.count(), 12);

    view.set_search_text("bit");
    let names: Vec<_> = (0..view.count())
        .filter_map(|i| view.item_at(i))
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(names, vec!["Bitcoin", "Wrapped Bitcoin"]);

    let cell = view.cell_at(0).unwrap();
    assert_eq!(cell.symbol, "BTC");
    assert!(cell.icon.is_some());

    // Load-more is a no-op while filtering: no third page is requested
    let page = view.load_next_page().await.unwrap();
    assert!(page.is_empty());
    assert_eq!(view.content().cursor(), 3);

    view.set_search_text("");
    assert_eq!(view.count(), 12);
}
