//! Search filtering over coin lists.

use crate::models::Coin;

/// Coins whose name or symbol contains `query`, ignoring case, in their
/// original order.
///
/// An empty query yields an empty list, not the full one. Callers fall back
/// to the unfiltered list when they are not searching.
pub fn filter_coins(coins: &[Coin], query: &str) -> Vec<Coin> {
    if query.is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();
    coins
        .iter()
        .filter(|coin| coin.matches(&needle))
        .cloned()
        .collect()
}
