use dioxus::prelude::*;
use tracing::error;

use common::config::SiteConfig;
use content::religion::{AudioClip, Figure, RadicalWing, Religion};

use crate::{
    common::dom::open_in_new_tab,
    components::modal::{ModalPlacement, OverlayModal},
};

pub const RELIGION_OVERLAY: &str = "religion";

#[derive(Clone, PartialEq, Props)]
pub struct ReligionModalProps {
    religion: Religion,
    open: Signal<bool>,
}

#[component]
pub fn ReligionModal(props: ReligionModalProps) -> Element {
    let religion = props.religion;
    let detail = religion.detail.clone();

    rsx! {
        OverlayModal {
            name: RELIGION_OVERLAY.to_string(),
            open: props.open,
            title: religion.name.clone(),
            subtitle: religion.followers.clone(),
            placement: ModalPlacement::Right,
            header_class: religion.accent.class().to_string(),

            section { class: "overlay-section",
                h3 { "Dogma Central" }
                div { class: "panel",
                    p { "{religion.dogma}" }
                }
            }

            section { class: "overlay-section",
                h3 { "História" }
                p { "{detail.history}" }
            }

            section { class: "overlay-section",
                h3 { "Figuras Importantes" }
                for (idx, figure) in detail.figures.into_iter().enumerate() {
                    FigureEntry { key: "{idx}", figure }
                }
            }

            section { class: "overlay-section",
                h3 { "Práticas" }
                ul {
                    for practice in detail.practices {
                        li { "{practice}" }
                    }
                }
            }

            if let Some(wing) = detail.radical_wing {
                RadicalWingSection { wing }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct FigureEntryProps {
    figure: Figure,
}

#[component]
fn FigureEntry(props: FigureEntryProps) -> Element {
    let figure = props.figure;

    rsx! {
        div { class: "figure",
            h4 { "{figure.name}" }
            p { class: "figure-role", "{figure.role}" }
            p { "{figure.description}" }
            if let Some(clip) = figure.audio {
                AudioEntry { clip }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct AudioEntryProps {
    clip: AudioClip,
}

#[component]
fn AudioEntry(props: AudioEntryProps) -> Element {
    let clip = props.clip;
    let config = use_context::<SiteConfig>();

    let src = config.asset_url(&clip.src);
    let heading = match clip.transcript_page {
        Some(page) => format!("{} (Pág. {page})", clip.title),
        None => clip.title.clone(),
    };

    rsx! {
        div { class: "figure-audio",
            p { "♪ {heading}" }
            audio {
                controls: true,
                preload: "auto",
                "aria-label": "Áudio: {clip.title}",
                source { src: "{src}", r#type: "audio/mpeg" }
                "Seu navegador não suporta o elemento de áudio."
            }
            if let Some(page) = clip.transcript_page {
                button {
                    class: "btn btn-primary btn-block",
                    onclick: move |_| {
                        let url = config.document_page_url(page);
                        if let Err(err) = open_in_new_tab(&url) {
                            error!("failed to open transcript at {url}: {err}");
                        }
                    },
                    "Ver transcrição na página {page}"
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct RadicalWingSectionProps {
    wing: RadicalWing,
}

#[component]
fn RadicalWingSection(props: RadicalWingSectionProps) -> Element {
    let wing = props.wing;

    rsx! {
        section { class: "overlay-section",
            h3 { "Ala Radicalizada - \"{wing.name}\"" }
            div { class: "radical-wing",
                p { class: "warning", "⚠ {wing.warning}" }
                for paragraph in wing.paragraphs {
                    p { "{paragraph}" }
                }
            }
        }
    }
}
