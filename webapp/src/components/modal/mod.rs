use std::{cell::RefCell, rc::Rc};

use dioxus::prelude::*;

use common::{
    config::SiteConfig,
    overlay::{KeyRouter, OverlayController, ScrollLock},
    overlay_close_id, overlay_root_id, overlay_title_id,
};

use crate::common::dom::DomFocusScope;

// use_overlay
//
// ties an OverlayController to the lifetime of the calling component.  the caller owns
// the open flag; the controller follows it through an effect, and the controller's close
// request (escape) is just a write of false back into that same flag.  when the
// component goes away the session is dropped no matter what state the flag is in
pub fn use_overlay(name: &str, open: Signal<bool>) {
    let config = use_context::<SiteConfig>();
    let keys = use_context::<KeyRouter>();
    let scroll = use_context::<ScrollLock>();

    let controller = use_hook(|| {
        let host = DomFocusScope::new(overlay_root_id(name), overlay_close_id(name));

        let controller = OverlayController::new(host, keys, scroll, move || {
            let mut open = open;
            open.set(false);
        })
        .with_focus_delay(config.focus_delay());

        Rc::new(RefCell::new(controller))
    });

    let effect_controller = controller.clone();
    use_effect(move || {
        let is_open = open();
        effect_controller.borrow_mut().set_open(is_open);
    });

    use_drop(move || controller.borrow_mut().close());
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ModalPlacement {
    #[default]
    Right,
    Left,
    Center,
}

impl ModalPlacement {
    fn class(self) -> &'static str {
        match self {
            ModalPlacement::Right => "placement-right",
            ModalPlacement::Left => "placement-left",
            ModalPlacement::Center => "placement-center",
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct OverlayModalProps {
    // unique among the overlays on a page, the dom ids are derived from it
    name: String,
    open: Signal<bool>,
    title: String,
    #[props(default)]
    subtitle: Option<String>,
    #[props(default)]
    placement: ModalPlacement,
    // extra classes for the header, e.g. the religion accent colour
    #[props(default)]
    header_class: String,
    children: Element,
}

#[component]
pub fn OverlayModal(props: OverlayModalProps) -> Element {
    let mut open = props.open;

    use_overlay(&props.name, open);

    let close_on_backdrop = use_context::<SiteConfig>().overlay.close_on_backdrop;

    if !open() {
        return rsx! {};
    }

    let root_id = overlay_root_id(&props.name);
    let close_id = overlay_close_id(&props.name);
    let title_id = overlay_title_id(&props.name);
    let panel_class = format!("overlay-panel {}", props.placement.class());
    let header_class = format!("overlay-header {}", props.header_class);

    rsx! {
        div {
            class: "overlay-backdrop",
            onclick: move |_| {
                if close_on_backdrop {
                    open.set(false);
                }
            },
        }
        div {
            id: "{root_id}",
            class: "{panel_class}",
            role: "dialog",
            "aria-modal": "true",
            "aria-labelledby": "{title_id}",

            div { class: "{header_class}",
                div { class: "overlay-header-row",
                    h2 { id: "{title_id}", class: "overlay-title", "{props.title}" }
                    button {
                        id: "{close_id}",
                        class: "btn-icon",
                        "aria-label": "Fechar",
                        onclick: move |_| open.set(false),
                        "×"
                    }
                }
                if let Some(subtitle) = &props.subtitle {
                    p { class: "overlay-subtitle", "{subtitle}" }
                }
            }

            div { class: "overlay-body", {props.children} }
        }
    }
}
