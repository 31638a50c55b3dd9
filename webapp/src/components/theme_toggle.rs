use dioxus::prelude::*;
use tracing::debug;

use crate::common::theme::DarkMode;

#[component]
pub fn ThemeToggle() -> Element {
    let DarkMode(mut dark) = use_context::<DarkMode>();

    let (label, icon, class) = if dark() {
        ("Mudar para modo claro", "☾", "btn-icon theme-toggle dark")
    } else {
        ("Mudar para modo escuro", "☀", "btn-icon theme-toggle")
    };

    rsx! {
        button {
            class: "{class}",
            "aria-label": "{label}",
            onclick: move |_| {
                let next = !dark();
                debug!("switching to {} theme", if next { "dark" } else { "light" });
                dark.set(next);
            },
            "{icon}"
        }
    }
}
