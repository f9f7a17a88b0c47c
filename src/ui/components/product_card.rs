use dioxus::prelude::*;

use super::margin_banner::MarginBanner;
use crate::{
    domain::ProductRecord,
    util::format::{format_percent, format_yen},
};

#[component]
pub fn ProductCards(rows: Vec<ProductRecord>, on_remove: EventHandler<usize>) -> Element {
    if rows.is_empty() {
        return rsx! {
            p {
                class: "empty-state",
                "📭 No products yet. Add one with the form on the left."
            }
        };
    }

    rsx! {
        div {
            class: "product-list",
            for (index, record) in rows.into_iter().enumerate() {
                ProductCard {
                    key: "{card_key(index, &record)}",
                    index,
                    record,
                    on_remove: on_remove.clone(),
                }
            }
        }
    }
}

// Distinct per record so a card's open state stays with its record.
fn card_key(index: usize, record: &ProductRecord) -> String {
    format!("{index}:{}", record.name())
}

#[derive(Props, Clone, PartialEq)]
struct ProductCardProps {
    index: usize,
    record: ProductRecord,
    on_remove: EventHandler<usize>,
}

#[component]
fn ProductCard(props: ProductCardProps) -> Element {
    let record = props.record;
    let index = props.index;
    let summary = format!(
        "{}. {} · profit {} ({})",
        index + 1,
        record.name(),
        format_yen(record.profit()),
        format_percent(record.profit_margin())
    );
    let fee_line = format!(
        "{} ({:.1}%)",
        format_yen(record.fee() as i64),
        record.fee_rate()
    );

    rsx! {
        details {
            class: "product-card",
            summary { class: "product-card__summary", "{summary}" }
            div {
                class: "product-card__grid",
                DetailLine { label: "🛒 Cost price", value: format_yen(record.cost_price() as i64) }
                DetailLine { label: "🏪 Platform", value: record.platform().to_string() }
                DetailLine { label: "💴 Selling price", value: format_yen(record.selling_price() as i64) }
                DetailLine { label: "💸 Fee", value: fee_line }
            }
            MarginBanner { record: record.clone() }
            div {
                class: "product-card__actions",
                button {
                    class: "btn btn-danger",
                    onclick: move |evt| {
                        evt.stop_propagation();
                        props.on_remove.call(index);
                    },
                    "🗑️ Delete this product"
                }
            }
        }
    }
}

#[component]
fn DetailLine(label: &'static str, value: String) -> Element {
    rsx! {
        p {
            class: "detail-line",
            span { class: "detail-line__label", "{label}" }
            span { class: "detail-line__value", "{value}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{compute_record, Platform};

    #[test]
    fn card_key_changes_when_a_different_record_takes_the_slot() {
        let lamp = compute_record("Lamp", 100, 200, Platform::Amazon);
        let mug = compute_record("Mug", 100, 200, Platform::Amazon);
        assert_ne!(card_key(0, &lamp), card_key(0, &mug));
        assert_eq!(card_key(1, &mug), card_key(1, &mug.clone()));
    }
}
