use dioxus::prelude::*;
use tracing::error;

use crate::{
    domain::{
        parse_price, validate_name, AppState, Platform, ProductError, ProductRecord,
        ProfitBalance,
    },
    infra::export::CsvExport,
    ui::{
        components::{
            kpi_card::KpiCard,
            product_card::ProductCards,
            toast::{push_toast, ToastKind, ToastMessage},
        },
        theme::{self, Tone},
    },
    util::format::{capitalize, format_yen, group_thousands},
};

#[component]
pub fn ProductsPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let preferences = state.with(|st| st.preferences.clone());
    let mut name_input = use_signal(String::new);
    let mut cost_input = use_signal(|| preferences.default_cost_price.to_string());
    let mut selling_input = use_signal(|| preferences.default_selling_price.to_string());
    let mut platform_input = use_signal(|| preferences.default_platform);

    let records: Vec<ProductRecord> = state.with(|st| st.products.records().to_vec());
    let summary = state.with(|st| st.products.aggregate());
    let balance = ProfitBalance::from_total(summary.total_profit);
    let (profit_title, profit_value, profit_caption) = match balance {
        ProfitBalance::Surplus => ("💰 Total profit", format_yen(summary.total_profit), "In the black"),
        ProfitBalance::Deficit => (
            "💸 Total loss",
            format_yen(summary.total_profit.saturating_abs()),
            "In the red",
        ),
        ProfitBalance::Even => ("⚖️ Profit / loss", "±0円".to_string(), "Break-even"),
    };
    let has_products = !records.is_empty();
    let step = preferences.price_step.max(1).to_string();

    let platform_options: Vec<(Platform, String)> = Platform::ALL
        .into_iter()
        .map(|platform| {
            (
                platform,
                format!("{platform} (fee {:.1}%)", platform.fee_rate()),
            )
        })
        .collect();

    let on_submit = {
        let mut state = state;
        let defaults = preferences.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let outcome = submit_product(
                &mut state,
                &name_input(),
                &cost_input(),
                &selling_input(),
                platform_input(),
            );
            match outcome {
                Ok(record) => {
                    push_toast(
                        toasts,
                        ToastKind::Success,
                        format!("Added “{}” to the list.", record.name()),
                    );
                    name_input.set(String::new());
                    cost_input.set(defaults.default_cost_price.to_string());
                    selling_input.set(defaults.default_selling_price.to_string());
                    platform_input.set(defaults.default_platform);
                }
                Err(err) => report_error(toasts, &err),
            }
        }
    };

    let on_remove = {
        let mut state = state;
        move |index: usize| match state.with_mut(|st| st.remove_product(index)) {
            Ok(removed) => push_toast(
                toasts,
                ToastKind::Success,
                format!("Removed “{}”.", removed.name()),
            ),
            Err(err) => report_error(toasts, &err),
        }
    };

    let on_clear = {
        let mut state = state;
        move |_| {
            let removed = state.with_mut(|st| st.clear_products());
            let (kind, text) = clear_message(removed);
            push_toast(toasts, kind, text);
        }
    };

    let on_export = move |_| {
        let outcome = state.with(|st| {
            CsvExport::from_list(&st.products)
                .and_then(|export| export.save_to(&st.preferences.resolved_export_dir()))
        });
        match outcome {
            Ok(path) => push_toast(
                toasts,
                ToastKind::Success,
                format!("Saved CSV to {}", path.display()),
            ),
            Err(err) => {
                error!(error = %err, "CSV export failed");
                push_toast(toasts, ToastKind::Error, format!("Export failed: {err}"));
            }
        }
    };

    rsx! {
        div { class: "page-grid",
            section {
                class: "{theme::PANEL} add-form",
                h2 { class: "panel__title", "➕ Add a product" }
                form {
                    onsubmit: on_submit,
                    div { class: "field",
                        label { class: theme::LABEL, "Product name" }
                        input {
                            class: theme::INPUT,
                            value: name_input(),
                            placeholder: "e.g. Wireless earbuds",
                            oninput: move |evt| name_input.set(evt.value()),
                        }
                        p { class: theme::HINT, "Name of the product you want to track" }
                    }
                    div { class: "field",
                        label { class: theme::LABEL, "🛒 Cost price (円)" }
                        input {
                            class: theme::INPUT,
                            r#type: "number",
                            min: "0",
                            step: "{step}",
                            value: cost_input(),
                            oninput: move |evt| cost_input.set(evt.value()),
                        }
                    }
                    div { class: "field",
                        label { class: theme::LABEL, "💴 Selling price (円)" }
                        input {
                            class: theme::INPUT,
                            r#type: "number",
                            min: "0",
                            step: "{step}",
                            value: selling_input(),
                            oninput: move |evt| selling_input.set(evt.value()),
                        }
                    }
                    div { class: "field",
                        label { class: theme::LABEL, "🏪 Sales platform" }
                        select {
                            class: theme::INPUT,
                            value: platform_input().key(),
                            onchange: move |evt| match evt.value().parse::<Platform>() {
                                Ok(platform) => platform_input.set(platform),
                                Err(err) => error!(error = %err, "platform selector produced an unknown value"),
                            },
                            for (platform, label) in platform_options {
                                option {
                                    value: platform.key(),
                                    selected: platform == platform_input(),
                                    "{label}"
                                }
                            }
                        }
                    }
                    button {
                        class: theme::BTN_PRIMARY,
                        r#type: "submit",
                        "➕ Add to list"
                    }
                }
            }

            section {
                class: "product-column",
                h2 { class: "panel__title", "📋 Product list" }
                if has_products {
                    div { class: "kpi-grid",
                        KpiCard {
                            title: "📦 Products".to_string(),
                            value: format!("{} items", group_thousands(summary.count as i64)),
                            tone: Tone::Neutral,
                        }
                        KpiCard {
                            title: "🛒 Total cost".to_string(),
                            value: format_yen(summary.total_cost as i64),
                            tone: Tone::Neutral,
                        }
                        KpiCard {
                            title: "💴 Total selling".to_string(),
                            value: format_yen(summary.total_selling as i64),
                            tone: Tone::Neutral,
                        }
                        KpiCard {
                            title: profit_title.to_string(),
                            value: profit_value,
                            description: Some(profit_caption.to_string()),
                            tone: theme::balance_tone(balance),
                        }
                    }
                }
                ProductCards { rows: records, on_remove }
            }
        }

        div { class: "bulk-actions",
            button {
                class: theme::BTN_DANGER,
                onclick: on_clear,
                "🗑️ Delete all products"
            }
            if has_products {
                button {
                    class: theme::BTN_SECONDARY,
                    onclick: on_export,
                    "📥 Export CSV"
                }
            }
        }
    }
}

/// Validates the raw form values and appends the record. Nothing is changed
/// when any field is rejected.
fn submit_product(
    state: &mut Signal<AppState>,
    name: &str,
    cost_raw: &str,
    selling_raw: &str,
    platform: Platform,
) -> Result<ProductRecord, ProductError> {
    validate_name(name)?;
    let cost_price = parse_price("Cost price", cost_raw)?;
    let selling_price = parse_price("Selling price", selling_raw)?;
    state.with_mut(|st| st.add_product(name, cost_price, selling_price, platform))
}

fn report_error(toasts: Signal<Vec<ToastMessage>>, err: &ProductError) {
    if err.is_validation() {
        push_toast(toasts, ToastKind::Error, capitalize(&err.to_string()));
    } else {
        error!(error = %err, "product list operation rejected");
        push_toast(toasts, ToastKind::Error, format!("Unexpected error: {err}"));
    }
}

fn clear_message(removed: usize) -> (ToastKind, String) {
    match removed {
        0 => (ToastKind::Info, "The list is already empty.".to_string()),
        n => (ToastKind::Success, format!("Removed all products ({n}).")),
    }
}
