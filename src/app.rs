use dioxus::prelude::*;
use tracing::info;

use crate::{
    domain::AppState,
    ui::{
        components::toast::{Toast, ToastMessage},
        pages::{ProductsPage, SettingsPage},
        shell::Shell,
    },
    util::{assets, persistence::load_preferences},
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Products {},
    #[route("/settings")]
    Settings {},
}

/// Root component. Each window gets its own `AppState`, so product lists are
/// never shared between sessions.
#[component]
pub fn App() -> Element {
    let state = use_signal(AppState::default);
    use_hook({
        let mut state = state;
        move || {
            let preferences = load_preferences().unwrap_or_default();
            state.with_mut(|st| {
                info!(session = %st.session_id, "session started");
                st.apply_preferences(preferences);
            });
        }
    });
    use_context_provider(|| state);

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts);

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::main_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

#[component]
pub fn Products() -> Element {
    rsx! { Shell { ProductsPage {} } }
}

#[component]
pub fn Settings() -> Element {
    rsx! { Shell { SettingsPage {} } }
}
