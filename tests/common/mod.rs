//! Common fixtures for integration tests.
//!
//! Builds listing payloads in the wire format and mounts them on a wiremock
//! server alongside an icon endpoint.

#![allow(dead_code)]

use coins::adapters::mock::coin;
use coins::adapters::{CoinCapApi, CoinIconApi, ReqwestHttpClient};
use coins::models::{blank_png, Coin};
use coins::{CoinsConfig, CoinsContent};
use std::sync::Arc;
use wiremock::matchers::{method, path, path_regex, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Coins named after real assets, in rank order.
pub fn ranked_coins() -> Vec<Coin> {
    [
        ("BTC", "Bitcoin"),
        ("ETH", "Ethereum"),
        ("USDT", "Tether"),
        ("BNB", "BNB"),
        ("SOL", "Solana"),
        ("USDC", "USD Coin"),
        ("XRP", "XRP"),
        ("DOGE", "Dogecoin"),
        ("TON", "Toncoin"),
        ("ADA", "Cardano"),
        ("WBTC", "Wrapped Bitcoin"),
        ("AVAX", "Avalanche"),
    ]
    .iter()
    .enumerate()
    .map(|(i, (symbol, name))| {
        let mut c = coin(symbol, name);
        c.rank = (i + 1).to_string();
        c
    })
    .collect()
}

/// Mount one listing page (`offset`/`limit` query) answering with `coins`.
pub async fn mount_page(server: &MockServer, offset: usize, limit: usize, coins: &[Coin]) {
    Mock::given(method("GET"))
        .and(path("/v2/assets"))
        .and(query_param("offset", offset.to_string()))
        .and(query_param("limit", limit.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": coins,
            "timestamp": 1718000000000u64
        })))
        .mount(server)
        .await;
}

/// Mount a 404 for one icon. Must be mounted before [`mount_icons`].
pub async fn mount_missing_icon(server: &MockServer, symbol: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/api/icon/{}", symbol)))
        .respond_with(ResponseTemplate::new(404))
        .mount(server)
        .await;
}

/// Mount a PNG for every icon request.
pub async fn mount_icons(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path_regex(r"^/api/icon/[a-z0-9]+$"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(blank_png(8, 8).to_vec(), "image/png"))
        .mount(server)
        .await;
}

/// Config pointing both services at `server`.
pub fn config_for(server: &MockServer, page_size: usize) -> CoinsConfig {
    CoinsConfig::default()
        .with_listing_base_url(format!("{}/v2", server.uri()))
        .with_icon_base_url(server.uri())
        .with_page_size(page_size)
}

/// Content wired to the HTTP adapters, as production builds it.
pub fn http_content(config: &CoinsConfig) -> CoinsContent {
    let client = ReqwestHttpClient::from_config(config).unwrap();
    CoinsContent::new(
        config,
        Arc::new(CoinCapApi::new(client.clone(), config.listing_base_url.clone())),
        Arc::new(CoinIconApi::new(client, config.icon_base_url.clone())),
    )
}
