use dioxus::prelude::*;
use tracing::{debug, error};

use content::religion::{Religion, load_religions};

mod card;
mod detail;

pub use card::ReligionCard;
pub use detail::ReligionModal;

// CenarioSocial
//
// the religion cards and the drawer that opens over them.  the drawer stays mounted
// once something has been picked, so closing it only flips the open flag and the last
// selection is kept until another card is chosen
#[component]
pub fn CenarioSocial() -> Element {
    let religions = use_hook(|| load_religions().map_err(|err| err.to_string()));

    let mut selected: Signal<Option<Religion>> = use_signal(|| None);
    let mut open = use_signal(|| false);

    let religions = match religions {
        Ok(religions) => religions,
        Err(err) => {
            error!("failed to load religions: {err}");
            return rsx! {
                div { class: "error-panel", "Não foi possível carregar as religiões: {err}" }
            };
        }
    };

    rsx! {
        section { class: "container",
            div { class: "page-intro",
                h2 { class: "page-title", "Cenário Social" }
                p { class: "page-lead",
                    "Conheça as religiões minoritárias de Novas Veredas e seus aspectos fundamentais."
                }
            }

            div { class: "religion-grid",
                for religion in religions {
                    ReligionCard {
                        key: "{religion.id}",
                        religion: religion.clone(),
                        on_select: {
                            let religion = religion.clone();
                            move |_| {
                                debug!("selected religion {}", religion.id);
                                selected.set(Some(religion.clone()));
                                open.set(true);
                            }
                        },
                    }
                }
            }
        }

        if let Some(religion) = selected() {
            ReligionModal { religion, open }
        }
    }
}
