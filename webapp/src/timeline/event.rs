use dioxus::prelude::*;
use tracing::{debug, error};

use common::config::SiteConfig;
use content::timeline::TimelineEvent;

use crate::common::dom::open_in_new_tab;

#[derive(Clone, PartialEq, Props)]
pub struct TimelineEventViewProps {
    event: TimelineEvent,
}

#[component]
pub fn TimelineEventView(props: TimelineEventViewProps) -> Element {
    let event = props.event;
    let config = use_context::<SiteConfig>();

    // events may point into a document other than the case file
    let document_url = event.pdf_page.map(|page| match &event.pdf_path {
        Some(path) => format!("{}#page={page}", config.asset_url(path)),
        None => config.document_page_url(page),
    });

    let paragraphs: Vec<String> = event
        .paragraphs()
        .into_iter()
        .map(String::from)
        .collect();

    rsx! {
        div { class: "timeline-event animate-rise",
            div { class: "timeline-date", "{event.date}" }
            div { class: "timeline-text",
                for (idx, paragraph) in paragraphs.into_iter().enumerate() {
                    p { class: if idx == 0 { "headline" } else { "" }, "{paragraph}" }
                }
                if let (Some(page), Some(url)) = (event.pdf_page, document_url) {
                    DocumentPageLink { page, url }
                }
                if let Some(url) = event.external_url.clone() {
                    a {
                        class: "btn-link",
                        href: "{url}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "Ver notícia"
                    }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct DocumentPageLinkProps {
    page: u32,
    url: String,
}

#[component]
fn DocumentPageLink(props: DocumentPageLinkProps) -> Element {
    let page = props.page;
    let url = props.url;

    rsx! {
        button {
            class: "btn-link",
            title: "Abrir PDF na página {page}",
            "aria-label": "Abrir PDF na página {page}",
            onclick: move |_| {
                debug!("opening document at page {page}");
                if let Err(err) = open_in_new_tab(&url) {
                    error!("failed to open {url}: {err}");
                }
            },
            "📄 pág. {page}"
        }
    }
}
