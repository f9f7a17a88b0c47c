use std::path::PathBuf;

use dioxus::prelude::*;
use tracing::{error, info};

use crate::{
    domain::{parse_price, AppState, Platform, Preferences, ProductError},
    ui::{
        components::toast::{push_toast, ToastKind, ToastMessage},
        theme,
    },
    util::{format::capitalize, persistence::save_preferences},
};

#[component]
pub fn SettingsPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let initial = state.with(|st| st.preferences.clone());

    let mut cost_input = use_signal(|| initial.default_cost_price.to_string());
    let mut selling_input = use_signal(|| initial.default_selling_price.to_string());
    let mut step_input = use_signal(|| initial.price_step.to_string());
    let mut platform_input = use_signal(|| initial.default_platform);
    let mut export_dir_input = use_signal(|| {
        initial
            .export_dir
            .as_ref()
            .map(|dir| dir.display().to_string())
            .unwrap_or_default()
    });
    let resolved_dir = initial.resolved_export_dir().display().to_string();

    let on_apply = {
        let mut state = state;
        move |_| {
            let parsed = parse_preferences(
                &cost_input(),
                &selling_input(),
                &step_input(),
                platform_input(),
                &export_dir_input(),
            );
            match parsed {
                Ok(preferences) => {
                    state.with_mut(|st| st.apply_preferences(preferences.clone()));
                    persist(toasts, &preferences, "Saved preferences.");
                }
                Err(err) => push_toast(toasts, ToastKind::Error, err.to_string()),
            }
        }
    };

    let on_reset = {
        let mut state = state;
        move |_| {
            let defaults = Preferences::default();
            cost_input.set(defaults.default_cost_price.to_string());
            selling_input.set(defaults.default_selling_price.to_string());
            step_input.set(defaults.price_step.to_string());
            platform_input.set(defaults.default_platform);
            export_dir_input.set(String::new());
            state.with_mut(|st| st.apply_preferences(defaults.clone()));
            persist(toasts, &defaults, "Restored default preferences.");
        }
    };

    rsx! {
        div { class: "settings",
            section {
                class: theme::PANEL,
                h2 { class: "panel__title", "Form defaults" }
                div { class: "settings-grid",
                    div { class: "field",
                        label { class: theme::LABEL, "Default cost price (円)" }
                        input {
                            class: theme::INPUT,
                            r#type: "number",
                            min: "0",
                            value: cost_input(),
                            oninput: move |evt| cost_input.set(evt.value()),
                        }
                    }
                    div { class: "field",
                        label { class: theme::LABEL, "Default selling price (円)" }
                        input {
                            class: theme::INPUT,
                            r#type: "number",
                            min: "0",
                            value: selling_input(),
                            oninput: move |evt| selling_input.set(evt.value()),
                        }
                    }
                    div { class: "field",
                        label { class: theme::LABEL, "Price step" }
                        input {
                            class: theme::INPUT,
                            r#type: "number",
                            min: "1",
                            value: step_input(),
                            oninput: move |evt| step_input.set(evt.value()),
                        }
                    }
                    div { class: "field",
                        label { class: theme::LABEL, "Default platform" }
                        select {
                            class: theme::INPUT,
                            value: platform_input().key(),
                            onchange: move |evt| match evt.value().parse::<Platform>() {
                                Ok(platform) => platform_input.set(platform),
                                Err(err) => error!(error = %err, "platform selector produced an unknown value"),
                            },
                            for platform in Platform::ALL {
                                option {
                                    value: platform.key(),
                                    selected: platform == platform_input(),
                                    "{platform.label()}"
                                }
                            }
                        }
                    }
                }
            }

            section {
                class: theme::PANEL,
                h2 { class: "panel__title", "CSV export" }
                div { class: "field",
                    label { class: theme::LABEL, "Export directory" }
                    input {
                        class: theme::INPUT,
                        value: export_dir_input(),
                        placeholder: "Leave empty to use your downloads folder",
                        oninput: move |evt| export_dir_input.set(evt.value()),
                    }
                    p { class: theme::HINT, "Current target: {resolved_dir}" }
                }
            }

            div { class: "settings-actions",
                button { class: theme::BTN_PRIMARY, onclick: on_apply, "Apply" }
                button { class: theme::BTN_SECONDARY, onclick: on_reset, "Reset defaults" }
            }
        }
    }
}

fn persist(toasts: Signal<Vec<ToastMessage>>, preferences: &Preferences, message: &str) {
    match save_preferences(preferences) {
        Ok(path) => {
            info!(path = %path.display(), "saved preferences");
            push_toast(toasts, ToastKind::Success, message);
        }
        Err(err) => {
            error!(error = %err, "failed to save preferences");
            push_toast(
                toasts,
                ToastKind::Warning,
                format!("Applied for this session, but could not save: {err}"),
            );
        }
    }
}

#[derive(Debug, PartialEq, thiserror::Error)]
enum PreferencesInputError {
    #[error("{}", capitalize(&.0.to_string()))]
    Price(#[from] ProductError),
    #[error("Price step must be at least 1")]
    ZeroStep,
}

fn parse_preferences(
    cost: &str,
    selling: &str,
    step: &str,
    platform: Platform,
    export_dir: &str,
) -> Result<Preferences, PreferencesInputError> {
    let default_cost_price = parse_price("Default cost price", cost)?;
    let default_selling_price = parse_price("Default selling price", selling)?;
    let price_step = parse_price("Price step", step)?;
    if price_step == 0 {
        return Err(PreferencesInputError::ZeroStep);
    }
    let export_dir = Some(export_dir.trim())
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from);

    Ok(Preferences {
        default_cost_price,
        default_selling_price,
        price_step,
        default_platform: platform,
        export_dir,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_preferences() {
        let prefs = parse_preferences(" 500 ", "1500", "50", Platform::Amazon, "  ").unwrap();
        assert_eq!(
            prefs,
            Preferences {
                default_cost_price: 500,
                default_selling_price: 1500,
                price_step: 50,
                default_platform: Platform::Amazon,
                export_dir: None,
            }
        );
    }

    #[test]
    fn keeps_custom_export_dir() {
        let prefs = parse_preferences("0", "0", "1", Platform::Mercari, "/data/csv").unwrap();
        assert_eq!(prefs.export_dir, Some(PathBuf::from("/data/csv")));
    }

    #[test]
    fn rejects_bad_numbers() {
        let err = parse_preferences("-5", "100", "10", Platform::Rakuten, "").unwrap_err();
        assert!(matches!(err, PreferencesInputError::Price(ProductError::InvalidPrice { .. })));
        assert!(err.to_string().starts_with("Default cost price must be"));

        assert_eq!(
            parse_preferences("100", "100", "0", Platform::Rakuten, ""),
            Err(PreferencesInputError::ZeroStep)
        );
    }
}
