use dioxus::prelude::*;

use content::CASE_TITLE;

use crate::religion::CenarioSocial;

#[component]
pub fn Home() -> Element {
    rsx! {
        div { class: "page",
            div { class: "container",
                div { class: "page-intro animate-drop",
                    h1 { class: "page-title", "{CASE_TITLE}" }
                    p { class: "page-lead",
                        "Bem-vindo ao estudo de caso sobre as religiões minoritárias de Novas Veredas e seus impactos sociais."
                    }
                }
            }

            CenarioSocial {}
        }
    }
}
