use dioxus::prelude::*;
use dioxus_router::prelude::*;

use content::CASE_TITLE;

use crate::{
    Route,
    components::{footer::Footer, mobile_menu::MobileMenu, theme_toggle::ThemeToggle},
};

#[derive(Clone, PartialEq, Props)]
struct NavBarButtonProps {
    name: String,
    target: Route,
}

#[component]
fn NavBarButton(props: NavBarButtonProps) -> Element {
    let name = props.name;
    let target = props.target;

    let current_path: Route = use_route();
    rsx! {
        Link {
            class: if current_path == target { "nav-link active" } else { "nav-link" },
            to: target,
            "{name}"
        }
    }
}

#[component]
fn NavBarInner() -> Element {
    rsx! {
        header { class: "app-header",
            div { class: "container nav-container",
                div { class: "nav-links",
                    MobileMenu {}
                    Link { class: "brand", to: Route::Home {},
                        span { "aria-hidden": "true", "⚖" }
                        span { "{CASE_TITLE}" }
                    }
                }

                nav { class: "nav-links",
                    NavBarButton { name: "Início".to_owned(), target: Route::Home {} }
                    NavBarButton {
                        name: "Cronologia".to_owned(),
                        target: Route::Chronology {},
                    }
                    NavBarButton {
                        name: "Sobre o Caso".to_owned(),
                        target: Route::About {},
                    }
                    ThemeToggle {}
                }
            }
        }
    }
}

#[component]
pub fn NavBar() -> Element {
    rsx! {
        div { class: "app-shell",
            NavBarInner {}
            div { class: "divider" }
            main { class: "app-main", Outlet::<Route> {} }
            Footer {}
        }
    }
}
