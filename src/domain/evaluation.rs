use super::product::ProductRecord;

/// Display classification of a single record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarginStatus {
    HighMargin,
    Good,
    Normal,
    BreakEven,
    Loss,
}

impl MarginStatus {
    pub const HIGH_MARGIN_PCT: f64 = 30.0;
    pub const GOOD_MARGIN_PCT: f64 = 20.0;

    pub fn classify(profit: i64, profit_margin: f64) -> Self {
        match profit {
            p if p > 0 && profit_margin >= Self::HIGH_MARGIN_PCT => MarginStatus::HighMargin,
            p if p > 0 && profit_margin >= Self::GOOD_MARGIN_PCT => MarginStatus::Good,
            p if p > 0 => MarginStatus::Normal,
            0 => MarginStatus::BreakEven,
            _ => MarginStatus::Loss,
        }
    }

    pub fn of(record: &ProductRecord) -> Self {
        Self::classify(record.profit(), record.profit_margin())
    }

    pub fn label(&self) -> &'static str {
        match self {
            MarginStatus::HighMargin => "High margin",
            MarginStatus::Good => "Good",
            MarginStatus::Normal => "Normal",
            MarginStatus::BreakEven => "Break-even",
            MarginStatus::Loss => "Loss",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            MarginStatus::HighMargin => "🔥",
            MarginStatus::Good => "👍",
            MarginStatus::Normal => "ℹ️",
            MarginStatus::BreakEven => "⚖️",
            MarginStatus::Loss => "❌",
        }
    }
}

/// Sign of the session's total profit, used for the totals card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProfitBalance {
    Surplus,
    Deficit,
    Even,
}

impl ProfitBalance {
    pub fn from_total(total_profit: i64) -> Self {
        match total_profit {
            t if t > 0 => ProfitBalance::Surplus,
            t if t < 0 => ProfitBalance::Deficit,
            _ => ProfitBalance::Even,
        }
    }
}
