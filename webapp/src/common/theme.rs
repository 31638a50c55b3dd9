use dioxus::prelude::*;
use tracing::warn;

// light/dark switch
//
// the stylesheet keys off a data-theme attribute on <html>.  the starting value follows
// the system preference and the choice is not remembered between visits
#[derive(Clone, Copy)]
pub struct DarkMode(pub Signal<bool>);

pub fn read_preference() -> bool {
    web_sys::window()
        .and_then(|window| window.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .is_some_and(|query| query.matches())
}

pub fn apply(dark: bool) {
    let Some(root) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|doc| doc.document_element())
    else {
        return;
    };

    if let Err(err) = root.set_attribute("data-theme", if dark { "dark" } else { "light" }) {
        warn!("failed to set theme attribute: {err:?}");
    }
}
