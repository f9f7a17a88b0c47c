use dioxus::prelude::*;

use crate::app::Route;
use crate::ui::theme;
use crate::util::version::{version_label, APP_NAME};

#[component]
pub fn Shell(children: Element) -> Element {
    let current_route = use_route::<Route>();
    let nav = use_navigator();

    rsx! {
        div { class: "app",
            header {
                class: "app-header",
                div { class: "app-header__brand",
                    span { class: "app-header__icon", "📦" }
                    div {
                        h1 { class: "app-header__title", "{APP_NAME}" }
                        p {
                            class: "app-header__tagline",
                            "Track candidate products and see your profit at a glance."
                        }
                    }
                }
                nav { class: "app-header__nav",
                    NavButton {
                        active: matches!(current_route, Route::Products {}),
                        onclick: move |_| { nav.push(Route::Products {}); },
                        label: "📋 Products",
                    }
                    NavButton {
                        active: matches!(current_route, Route::Settings {}),
                        onclick: move |_| { nav.push(Route::Settings {}); },
                        label: "⚙️ Settings",
                    }
                }
            }
            main { class: "app-main",
                {children}
            }
            footer { class: "app-footer",
                p { "💡 Products are kept only while this window is open. Export a CSV to keep them." }
                p { class: "app-footer__version", "{APP_NAME} {version_label()}" }
            }
        }
    }
}

#[component]
fn NavButton(active: bool, onclick: EventHandler<()>, label: &'static str) -> Element {
    rsx! {
        button {
            class: theme::nav_button(active),
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
