use dioxus::prelude::*;

use crate::ui::theme::{self, Tone};

#[component]
pub fn KpiCard(title: String, value: String, description: Option<String>, tone: Tone) -> Element {
    rsx! {
        div {
            class: "kpi-card {theme::tone_class(tone)}",
            h3 { class: "kpi-card__title", "{title}" }
            p { class: "kpi-card__value", "{value}" }
            if let Some(desc) = description {
                p { class: "kpi-card__description", "{desc}" }
            }
        }
    }
}
