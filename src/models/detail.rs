//! Detail projection for a single selected coin.

use super::{parse_decimal, Coin};

/// Placeholder used when the listing omits market cap or max supply.
const MISSING_FIGURE: &str = "1.0";

const BILLION: f64 = 1_000_000_000.0;
const MILLION: f64 = 1_000_000.0;

/// Figures shown on the detail screen of one coin.
///
/// Values stay as the raw decimal strings from the listing; the
/// `formatted_*` methods scale and round them for display and return an
/// empty string when a value does not parse.
#[derive(Debug, Clone, PartialEq)]
pub struct CoinDetailModel {
    pub name: String,
    pub symbol: String,
    pub price_usd: String,
    pub change_percent_24hr: String,
    pub market_cap_usd: String,
    pub max_supply: String,
    pub volume_usd_24hr: String,
}

impl CoinDetailModel {
    pub fn new(coin: &Coin) -> Self {
        let market_cap_usd = if coin.market_cap_usd.is_empty() {
            MISSING_FIGURE.to_string()
        } else {
            coin.market_cap_usd.clone()
        };
        Self {
            name: coin.name.clone(),
            symbol: coin.symbol.clone(),
            price_usd: coin.price_usd.clone(),
            change_percent_24hr: coin.change_percent_24hr.clone(),
            market_cap_usd,
            max_supply: coin
                .max_supply
                .clone()
                .unwrap_or_else(|| MISSING_FIGURE.to_string()),
            volume_usd_24hr: coin.volume_usd_24hr.clone(),
        }
    }

    /// e.g. `$ 64376.20`
    pub fn formatted_price(&self) -> String {
        scaled(&self.price_usd, 1.0, "$ ", "")
    }

    /// e.g. `-0.42%`
    pub fn formatted_change(&self) -> String {
        scaled(&self.change_percent_24hr, 1.0, "", "%")
    }

    /// Market cap in billions, e.g. `$ 1265.00b`
    pub fn formatted_market_cap(&self) -> String {
        scaled(&self.market_cap_usd, BILLION, "$ ", "b")
    }

    /// Max supply in millions, e.g. `$ 21.00m`
    pub fn formatted_supply(&self) -> String {
        scaled(&self.max_supply, MILLION, "$ ", "m")
    }

    /// 24h volume in billions, e.g. `$ 12.35b`
    pub fn formatted_volume(&self) -> String {
        scaled(&self.volume_usd_24hr, BILLION, "$ ", "b")
    }

    pub fn is_price_up(&self) -> bool {
        parse_decimal(&self.change_percent_24hr).is_some_and(|c| c >= 0.0)
    }
}

fn scaled(raw: &str, divisor: f64, prefix: &str, suffix: &str) -> String {
    match parse_decimal(raw) {
        Some(value) => format!("{}{:.2}{}", prefix, value / divisor, suffix),
        None => String::new(),
    }
}
