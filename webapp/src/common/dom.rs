use std::time::Duration;

use gloo_timers::callback::Timeout;
use tracing::{debug, warn};
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{CssStyleDeclaration, Document, HtmlElement, KeyboardEvent, Window};

use common::overlay::{
    Key, KeyPress, KeyRouter, OverlayHost, ScrollTarget, focus::FOCUSABLE_SELECTOR,
};

// browser glue for the overlay controller
//
// everything in here talks to web_sys directly.  none of it can usefully fail in a
// working browser, so errors are logged and the call degrades to a no-op

fn js_error(err: JsValue) -> anyhow::Error {
    anyhow::Error::msg(format!("{err:?}"))
}

fn window() -> anyhow::Result<Window> {
    web_sys::window().ok_or_else(|| anyhow::Error::msg("no global window exists"))
}

fn document() -> Option<Document> {
    web_sys::window()?.document()
}

fn body_style() -> anyhow::Result<CssStyleDeclaration> {
    let body = document()
        .and_then(|doc| doc.body())
        .ok_or_else(|| anyhow::Error::msg("document has no body"))?;

    Ok(body.style())
}

pub fn open_in_new_tab(url: &str) -> anyhow::Result<()> {
    window()?
        .open_with_url_and_target(url, "_blank")
        .map_err(js_error)?;

    Ok(())
}

// scroll lock target: overflow on <body>
//
// reset removes the property entirely instead of restoring an earlier value, so the
// stylesheet default applies again
pub struct DocumentScroll;

impl ScrollTarget for DocumentScroll {
    fn suppress(&self) {
        let result =
            body_style().and_then(|style| style.set_property("overflow", "hidden").map_err(js_error));

        if let Err(err) = result {
            warn!("failed to lock page scroll: {err}");
        }
    }

    fn reset(&self) {
        let result = body_style()
            .and_then(|style| style.remove_property("overflow").map_err(js_error))
            .map(|_| ());

        if let Err(err) = result {
            warn!("failed to unlock page scroll: {err}");
        }
    }
}

// DomFocusScope
//
// the overlay's view of the document.  it keeps element ids rather than node handles,
// since the dialog subtree is created and destroyed by dioxus as the overlay toggles
pub struct DomFocusScope {
    root_id: String,
    initial_id: String,
}

impl DomFocusScope {
    pub fn new(root_id: String, initial_id: String) -> Self {
        DomFocusScope {
            root_id,
            initial_id,
        }
    }
}

impl OverlayHost for DomFocusScope {
    type Element = HtmlElement;
    type Timer = Timeout;

    fn focusables(&self) -> Vec<HtmlElement> {
        let Some(root) = document().and_then(|doc| doc.get_element_by_id(&self.root_id)) else {
            return Vec::new();
        };

        let nodes = match root.query_selector_all(FOCUSABLE_SELECTOR) {
            Ok(nodes) => nodes,
            Err(err) => {
                warn!("failed to query focusable elements: {err:?}");
                return Vec::new();
            }
        };

        (0..nodes.length())
            .filter_map(|idx| nodes.item(idx))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .collect()
    }

    fn active_element(&self) -> Option<HtmlElement> {
        document()?
            .active_element()?
            .dyn_into::<HtmlElement>()
            .ok()
    }

    fn focus(&self, element: &HtmlElement) {
        if let Err(err) = element.focus() {
            warn!("failed to move focus: {err:?}");
        }
    }

    fn initial_focus(&self) -> Option<HtmlElement> {
        document()?
            .get_element_by_id(&self.initial_id)?
            .dyn_into::<HtmlElement>()
            .ok()
    }

    fn defer(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Timeout {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);

        Timeout::new(millis, task)
    }
}

// KeyBridge
//
// the one window keydown listener in the app.  it translates the DOM event and hands it
// to the KeyRouter, which forwards it to whichever overlay is open on top
pub struct KeyBridge {
    window: Window,
    callback: Closure<dyn FnMut(KeyboardEvent)>,
}

impl KeyBridge {
    pub fn install(router: KeyRouter) -> anyhow::Result<Self> {
        let window = window()?;

        let callback = Closure::<dyn FnMut(KeyboardEvent)>::new(move |evt: KeyboardEvent| {
            let press = KeyPress {
                key: Key::from_name(&evt.key()),
                shift: evt.shift_key(),
            };

            if router.dispatch(&press).prevents_default() {
                evt.prevent_default();
            }
        });

        window
            .add_event_listener_with_callback("keydown", callback.as_ref().unchecked_ref())
            .map_err(js_error)?;

        debug!("installed window keydown bridge");

        Ok(KeyBridge { window, callback })
    }
}

impl Drop for KeyBridge {
    fn drop(&mut self) {
        let result = self
            .window
            .remove_event_listener_with_callback("keydown", self.callback.as_ref().unchecked_ref());

        if let Err(err) = result {
            warn!("failed to remove keydown bridge: {err:?}");
        }
    }
}
