//! Shared class names so pages and components style status the same way.

use crate::domain::{MarginStatus, ProfitBalance};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Neutral,
    Positive,
    Info,
    Warning,
    Negative,
}

pub fn tone_class(tone: Tone) -> &'static str {
    match tone {
        Tone::Neutral => "tone-neutral",
        Tone::Positive => "tone-positive",
        Tone::Info => "tone-info",
        Tone::Warning => "tone-warning",
        Tone::Negative => "tone-negative",
    }
}

pub fn margin_tone(status: MarginStatus) -> Tone {
    match status {
        MarginStatus::HighMargin | MarginStatus::Good => Tone::Positive,
        MarginStatus::Normal => Tone::Info,
        MarginStatus::BreakEven => Tone::Warning,
        MarginStatus::Loss => Tone::Negative,
    }
}

pub fn balance_tone(balance: ProfitBalance) -> Tone {
    match balance {
        ProfitBalance::Surplus => Tone::Positive,
        ProfitBalance::Deficit => Tone::Negative,
        ProfitBalance::Even => Tone::Neutral,
    }
}

// ============================================
// BUTTONS
// ============================================

pub const BTN_PRIMARY: &str = "btn btn-primary";
pub const BTN_SECONDARY: &str = "btn btn-secondary";
pub const BTN_DANGER: &str = "btn btn-danger";

pub fn nav_button(active: bool) -> &'static str {
    if active {
        "nav-button nav-button--active"
    } else {
        "nav-button"
    }
}

// ============================================
// FORMS / PANELS
// ============================================

pub const PANEL: &str = "panel";
pub const LABEL: &str = "field-label";
pub const INPUT: &str = "field-input";
pub const HINT: &str = "field-hint";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_tones_follow_severity() {
        assert_eq!(margin_tone(MarginStatus::HighMargin), Tone::Positive);
        assert_eq!(margin_tone(MarginStatus::Good), Tone::Positive);
        assert_eq!(margin_tone(MarginStatus::Normal), Tone::Info);
        assert_eq!(margin_tone(MarginStatus::BreakEven), Tone::Warning);
        assert_eq!(margin_tone(MarginStatus::Loss), Tone::Negative);
    }

    #[test]
    fn balance_tones() {
        assert_eq!(balance_tone(ProfitBalance::Surplus), Tone::Positive);
        assert_eq!(balance_tone(ProfitBalance::Deficit), Tone::Negative);
        assert_eq!(balance_tone(ProfitBalance::Even), Tone::Neutral);
    }
}
