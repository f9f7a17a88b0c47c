use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::error::ProductError;

/// Marketplace a product is listed on. The fee table is the exhaustive match
/// in [`Platform::fee_rate_tenths`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    #[default]
    Rakuten,
    Amazon,
    YahooShopping,
    Mercari,
}

impl Platform {
    pub const ALL: [Platform; 4] = [
        Platform::Rakuten,
        Platform::Amazon,
        Platform::YahooShopping,
        Platform::Mercari,
    ];

    /// Stable identifier used as the `<option>` value and in preferences.
    pub fn key(&self) -> &'static str {
        match self {
            Platform::Rakuten => "rakuten",
            Platform::Amazon => "amazon",
            Platform::YahooShopping => "yahoo_shopping",
            Platform::Mercari => "mercari",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Platform::Rakuten => "楽天市場",
            Platform::Amazon => "Amazon",
            Platform::YahooShopping => "Yahoo!ショッピング",
            Platform::Mercari => "メルカリ",
        }
    }

    /// Commission in tenths of a percent (100 == 10.0%).
    pub fn fee_rate_tenths(&self) -> u32 {
        match self {
            Platform::Rakuten => 100,
            Platform::Amazon => 150,
            Platform::YahooShopping => 80,
            Platform::Mercari => 100,
        }
    }

    /// Commission as a percentage, e.g. `10.0` for 10%.
    pub fn fee_rate(&self) -> f64 {
        self.fee_rate_tenths() as f64 / 10.0
    }

    /// Fee on a sale, truncated to whole currency units.
    pub fn fee_for(&self, selling_price: u32) -> u64 {
        selling_price as u64 * self.fee_rate_tenths() as u64 / 1000
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Platform {
    type Err = ProductError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Platform::ALL
            .into_iter()
            .find(|platform| {
                platform.key().eq_ignore_ascii_case(trimmed) || platform.label() == trimmed
            })
            .ok_or_else(|| ProductError::UnknownPlatform(trimmed.to_string()))
    }
}
