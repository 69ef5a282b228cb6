//! Data types shared across the crate.

mod cell;
pub mod coin;
mod detail;
mod icon;

pub use cell::CoinCellModel;
pub use coin::{parse_decimal, Coin, CoinsEnvelope};
pub use detail::CoinDetailModel;
pub use icon::{blank_png, Icon};
