use dioxus::prelude::*;

use crate::{
    domain::{MarginStatus, ProductRecord},
    ui::theme,
    util::format::{format_percent, format_yen},
};

#[component]
pub fn MarginBanner(record: ProductRecord) -> Element {
    let status = MarginStatus::of(&record);
    let tone = theme::tone_class(theme::margin_tone(status));
    let text = banner_text(status, record.profit(), record.profit_margin());

    rsx! {
        div {
            class: "margin-banner {tone}",
            span { class: "margin-banner__icon", "{status.emoji()}" }
            p { class: "margin-banner__text", "{text}" }
            span { class: "margin-banner__label", "{status.label()}" }
        }
    }
}

fn banner_text(status: MarginStatus, profit: i64, profit_margin: f64) -> String {
    match status {
        MarginStatus::BreakEven => "Profit: ±0円 (break-even)".to_string(),
        MarginStatus::Loss => format!(
            "Loss: {} (margin: {})",
            format_yen(profit.saturating_abs()),
            format_percent(profit_margin)
        ),
        _ => format!(
            "Profit: {} (margin: {})",
            format_yen(profit),
            format_percent(profit_margin)
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loss_is_reported_as_a_positive_amount() {
        assert_eq!(
            banner_text(MarginStatus::Loss, -1300, -43.3),
            "Loss: 1,300円 (margin: -43.3%)"
        );
    }

    #[test]
    fn profit_and_break_even_text() {
        assert_eq!(
            banner_text(MarginStatus::HighMargin, 800, 80.0),
            "Profit: 800円 (margin: 80.0%)"
        );
        assert_eq!(
            banner_text(MarginStatus::BreakEven, 0, 0.0),
            "Profit: ±0円 (break-even)"
        );
    }
}
