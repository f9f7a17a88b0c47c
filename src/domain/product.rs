use super::{error::ProductError, platform::Platform};

/// One tracked candidate product. The derived figures are fixed when the
/// record is built and there is no way to edit them afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct ProductRecord {
    name: String,
    cost_price: u32,
    selling_price: u32,
    platform: Platform,
    fee_rate: f64,
    fee: u64,
    profit: i64,
    profit_margin: f64,
}

impl ProductRecord {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cost_price(&self) -> u32 {
        self.cost_price
    }

    pub fn selling_price(&self) -> u32 {
        self.selling_price
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Fee rate (percent) captured when the record was created.
    pub fn fee_rate(&self) -> f64 {
        self.fee_rate
    }

    pub fn fee(&self) -> u64 {
        self.fee
    }

    pub fn profit(&self) -> i64 {
        self.profit
    }

    /// Profit relative to cost price, in percent with one decimal.
    pub fn profit_margin(&self) -> f64 {
        self.profit_margin
    }
}

pub fn compute_record(
    name: &str,
    cost_price: u32,
    selling_price: u32,
    platform: Platform,
) -> ProductRecord {
    let fee = platform.fee_for(selling_price);
    let profit = selling_price as i64 - cost_price as i64 - fee as i64;
    let profit_margin = if cost_price > 0 {
        round_one_decimal(profit as f64 / cost_price as f64 * 100.0)
    } else {
        0.0
    };

    ProductRecord {
        name: name.trim().to_string(),
        cost_price,
        selling_price,
        platform,
        fee_rate: platform.fee_rate(),
        fee,
        profit,
        profit_margin,
    }
}

pub fn validate_name(raw: &str) -> Result<&str, ProductError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Err(ProductError::NameRequired)
    } else {
        Ok(trimmed)
    }
}

pub fn parse_price(field: &'static str, raw: &str) -> Result<u32, ProductError> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| ProductError::InvalidPrice {
            field,
            value: raw.to_string(),
        })
}

// Exact ties go to the even digit (6.25 -> 6.2).
fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn rakuten_reference_case() {
        let record = compute_record("Wireless earbuds", 1000, 2000, Platform::Rakuten);
        assert_close(record.fee_rate(), 10.0);
        assert_eq!(record.fee(), 200);
        assert_eq!(record.profit(), 800);
        assert_close(record.profit_margin(), 80.0);
    }

    #[test]
    fn zero_cost_price_has_zero_margin() {
        let record = compute_record("Freebie", 0, 500, Platform::Amazon);
        assert_eq!(record.fee(), 75);
        assert_eq!(record.profit(), 425);
        assert_close(record.profit_margin(), 0.0);
    }

    #[test]
    fn profit_uses_truncated_fee() {
        let record = compute_record("Cable", 500, 1234, Platform::YahooShopping);
        assert_eq!(record.fee(), 98);
        assert_eq!(record.profit(), 1234 - 500 - 98);
    }

    #[test]
    fn loss_has_negative_margin() {
        let record = compute_record("Overpriced", 3000, 2000, Platform::Amazon);
        assert_eq!(record.fee(), 300);
        assert_eq!(record.profit(), -1300);
        assert_close(record.profit_margin(), -43.3);
    }

    #[test]
    fn margin_rounds_to_one_decimal() {
        // 2000 - 1500 - 200 = 300; 300 / 1500 = 20%
        let even = compute_record("Lamp", 1500, 2000, Platform::Mercari);
        assert_close(even.profit_margin(), 20.0);

        // 2000 - 1300 - 200 = 500; 500 / 1300 = 38.4615..
        let odd = compute_record("Desk", 1300, 2000, Platform::Mercari);
        assert_close(odd.profit_margin(), 38.5);
    }

    #[test]
    fn margin_ties_round_to_even() {
        // 18 - 16 - 1 = 1; 1 / 16 = 6.25%
        let gain = compute_record("Sticker", 16, 18, Platform::Rakuten);
        assert_eq!(gain.profit(), 1);
        assert_close(gain.profit_margin(), 6.2);

        // 3 - 16 - 0 = -13; -13 / 16 = -81.25%
        for platform in Platform::ALL {
            let loss = compute_record("Sticker", 16, 3, platform);
            assert_eq!(loss.profit(), -13);
            assert_close(loss.profit_margin(), -81.2);
        }

        // 21 - 16 - 2 = 3; 3 / 16 = 18.75%
        let up = compute_record("Sticker", 16, 21, Platform::Rakuten);
        assert_eq!(up.profit(), 3);
        assert_close(up.profit_margin(), 18.8);
    }

    #[test]
    fn profit_identity_holds_across_inputs() {
        for platform in Platform::ALL {
            for cost in [0_u32, 1, 99, 1000, 54_321] {
                for selling in [0_u32, 1, 101, 2000, 99_999] {
                    let record = compute_record("x", cost, selling, platform);
                    let expected_fee = (selling as f64 * platform.fee_rate() / 100.0).floor();
                    assert_eq!(record.fee() as f64, expected_fee);
                    assert_eq!(
                        record.profit(),
                        selling as i64 - cost as i64 - record.fee() as i64
                    );
                    if cost == 0 {
                        assert_close(record.profit_margin(), 0.0);
                    }
                }
            }
        }
    }

    #[test]
    fn name_is_trimmed_on_creation() {
        let record = compute_record("  ワイヤレスイヤホン  ", 1000, 2000, Platform::Mercari);
        assert_eq!(record.name(), "ワイヤレスイヤホン");
    }

    #[test]
    fn blank_name_is_rejected() {
        assert_eq!(validate_name("   \t"), Err(ProductError::NameRequired));
        assert_eq!(validate_name(""), Err(ProductError::NameRequired));
        assert_eq!(validate_name(" Mug "), Ok("Mug"));
        assert!(ProductError::NameRequired.is_validation());
    }

    #[test]
    fn prices_must_be_non_negative_integers() {
        assert_eq!(parse_price("Cost price", " 1200 "), Ok(1200));
        assert_eq!(parse_price("Cost price", "0"), Ok(0));
        for bad in ["-1", "12.5", "", "abc"] {
            let err = parse_price("Cost price", bad).unwrap_err();
            assert!(matches!(err, ProductError::InvalidPrice { field: "Cost price", .. }));
            assert!(err.is_validation());
        }
    }
}
