//! Row projection handed to list renderers.

use super::{parse_decimal, Coin, Icon};

/// Everything a list row needs to draw one coin.
#[derive(Debug, Clone, PartialEq)]
pub struct CoinCellModel {
    pub name: String,
    pub symbol: String,
    pub price_usd: String,
    pub change_percent_24hr: String,
    pub icon: Option<Icon>,
}

impl CoinCellModel {
    pub fn new(coin: &Coin, icon: Option<Icon>) -> Self {
        Self {
            name: coin.name.clone(),
            symbol: coin.symbol.clone(),
            price_usd: coin.price_usd.clone(),
            change_percent_24hr: coin.change_percent_24hr.clone(),
            icon,
        }
    }

    /// Price with two decimals, e.g. `$ 64376.20`. Falls back to the raw string.
    pub fn formatted_price(&self) -> String {
        match parse_decimal(&self.price_usd) {
            Some(price) => format!("$ {:.2}", price),
            None => self.price_usd.clone(),
        }
    }

    /// 24h change with two decimals, e.g. `1.25%`. Empty when unknown.
    pub fn formatted_change(&self) -> String {
        match parse_decimal(&self.change_percent_24hr) {
            Some(change) => format!("{:.2}%", change),
            None => String::new(),
        }
    }

    pub fn is_price_up(&self) -> bool {
        parse_decimal(&self.change_percent_24hr).is_some_and(|c| c >= 0.0)
    }
}
