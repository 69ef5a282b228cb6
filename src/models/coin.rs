//! Coin records as returned by the listing service.

use serde::{Deserialize, Deserializer, Serialize};

/// A single coin listing.
///
/// Numeric values arrive as decimal strings and are kept that way; use the
/// `parse_*` helpers at the presentation edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coin {
    pub id: String,
    pub rank: String,
    pub symbol: String,
    pub name: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub supply: String,
    #[serde(default, alias = "max_supply")]
    pub max_supply: Option<String>,
    #[serde(default, alias = "market_cap_usd", deserialize_with = "string_or_empty")]
    pub market_cap_usd: String,
    #[serde(
        default,
        rename = "volumeUsd24Hr",
        alias = "volume_usd_24hr",
        deserialize_with = "string_or_empty"
    )]
    pub volume_usd_24hr: String,
    #[serde(alias = "price_usd")]
    pub price_usd: String,
    #[serde(
        default,
        rename = "changePercent24Hr",
        alias = "change_percent_24hr",
        deserialize_with = "string_or_empty"
    )]
    pub change_percent_24hr: String,
    #[serde(
        default,
        rename = "vwap24Hr",
        alias = "vwap_24hr",
        deserialize_with = "string_or_empty"
    )]
    pub vwap_24hr: String,
    #[serde(default)]
    pub explorer: Option<String>,
}

/// The listing service wraps each page in a `data` array.
#[derive(Debug, Clone, Deserialize)]
pub struct CoinsEnvelope {
    pub data: Vec<Coin>,
    #[serde(default)]
    pub timestamp: Option<u64>,
}

fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Parse a decimal string field, treating empty or malformed values as absent.
pub fn parse_decimal(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

impl Coin {
    /// Symbol in the form used as the icon cache key.
    pub fn icon_key(&self) -> String {
        self.symbol.to_lowercase()
    }

    pub fn price(&self) -> Option<f64> {
        parse_decimal(&self.price_usd)
    }

    pub fn change_percent(&self) -> Option<f64> {
        parse_decimal(&self.change_percent_24hr)
    }

    pub fn market_cap(&self) -> Option<f64> {
        parse_decimal(&self.market_cap_usd)
    }

    pub fn volume_24h(&self) -> Option<f64> {
        parse_decimal(&self.volume_usd_24hr)
    }

    /// Maximum supply, `None` for uncapped coins.
    pub fn max_supply_value(&self) -> Option<f64> {
        self.max_supply.as_deref().and_then(parse_decimal)
    }

    /// Case-insensitive substring match on name or symbol.
    ///
    /// `needle` must already be lowercase.
    pub fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.symbol.to_lowercase().contains(needle)
    }
}
