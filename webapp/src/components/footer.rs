use dioxus::prelude::*;

use content::{CASE_SUMMARY, CASE_TITLE};

use crate::common::current_year;

#[component]
pub fn Footer() -> Element {
    let year = current_year();

    rsx! {
        footer { class: "app-footer",
            div { class: "container",
                h2 { class: "footer-title",
                    span { "aria-hidden": "true", "⚖" }
                    "{CASE_TITLE}"
                }
                p { class: "footer-summary", "{CASE_SUMMARY}" }
                div { class: "footer-legal",
                    p { "© {year} {CASE_TITLE}. Todos os direitos reservados." }
                }
            }
        }
    }
}
