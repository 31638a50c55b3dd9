use dioxus::prelude::*;

use content::timeline::TimelineBlock;

use super::event::TimelineEventView;

#[derive(Clone, PartialEq, Props)]
pub struct TimelineBlockViewProps {
    block: TimelineBlock,
}

#[component]
pub fn TimelineBlockView(props: TimelineBlockViewProps) -> Element {
    let block = props.block;

    rsx! {
        div { class: "timeline-block animate-fade",
            div { class: "timeline-dot" }
            div { class: "card",
                h3 { class: "timeline-block-title", "{block.title}" }
                div { class: "timeline-events",
                    for (idx, event) in block.events.into_iter().enumerate() {
                        TimelineEventView { key: "{block.id}-event-{idx}", event }
                    }
                }
            }
        }
    }
}
