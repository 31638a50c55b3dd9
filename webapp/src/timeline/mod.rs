use dioxus::prelude::*;
use tracing::error;

use content::timeline::load_timeline;

mod block;
mod event;

use block::TimelineBlockView;

// "Decurso Fático", the chronology of the case
#[component]
pub fn Chronology() -> Element {
    let timeline = use_hook(|| load_timeline().map_err(|err| err.to_string()));

    let timeline = match timeline {
        Ok(timeline) => timeline,
        Err(err) => {
            error!("failed to load timeline: {err}");
            return rsx! {
                div { class: "error-panel", "Não foi possível carregar a cronologia: {err}" }
            };
        }
    };

    rsx! {
        div { class: "page timeline",
            div { class: "container narrow",
                div { class: "page-intro",
                    span { class: "badge", "🕒 Cronologia" }
                    h1 { class: "page-title animate-drop", "Decurso Fático" }
                    p { class: "page-lead animate-fade", "Cronologia dos eventos relevantes para o caso" }
                }

                div { class: "timeline-blocks",
                    for block in timeline.blocks {
                        TimelineBlockView { key: "{block.id}", block }
                    }
                }
            }
        }
    }
}
