use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::{
    Route,
    common::current_year,
    components::modal::{ModalPlacement, OverlayModal},
};

pub const MENU_OVERLAY: &str = "menu";

#[derive(Clone, PartialEq, Props)]
struct MenuLinkProps {
    name: String,
    icon: String,
    target: Route,
    open: Signal<bool>,
}

#[component]
fn MenuLink(props: MenuLinkProps) -> Element {
    let mut open = props.open;

    rsx! {
        li {
            Link {
                to: props.target,
                onclick: move |_| open.set(false),
                span { "aria-hidden": "true", "{props.icon}" }
                span { "{props.name}" }
            }
        }
    }
}

// navigation drawer for narrow screens, hidden by the stylesheet above 640px
#[component]
pub fn MobileMenu() -> Element {
    let mut open = use_signal(|| false);
    let year = current_year();

    let (label, icon) = if open() {
        ("Fechar menu", "✕")
    } else {
        ("Abrir menu", "☰")
    };

    rsx! {
        button {
            class: "btn-icon menu-toggle",
            "aria-label": "{label}",
            "aria-expanded": "{open}",
            onclick: move |_| open.toggle(),
            "{icon}"
        }

        OverlayModal {
            name: MENU_OVERLAY.to_string(),
            open,
            title: "Menu".to_string(),
            placement: ModalPlacement::Left,
            header_class: "plain".to_string(),

            nav {
                ul { class: "mobile-nav",
                    MenuLink {
                        name: "Início".to_string(),
                        icon: "⌂".to_string(),
                        target: Route::Home {},
                        open,
                    }
                    MenuLink {
                        name: "Cronologia".to_string(),
                        icon: "🕒".to_string(),
                        target: Route::Chronology {},
                        open,
                    }
                    MenuLink {
                        name: "Sobre o Caso".to_string(),
                        icon: "📖".to_string(),
                        target: Route::About {},
                        open,
                    }
                }
            }
            div { class: "mobile-footer", "© {year} Caso Campeonato" }
        }
    }
}
