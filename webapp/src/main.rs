#![allow(non_snake_case)]
use std::{rc::Rc, sync::OnceLock};

use dioxus::prelude::*;
use dioxus_router::prelude::*;
use tracing::{error, info};

use ::common::{
    config::{SiteConfig, parse_config},
    overlay::{KeyRouter, ScrollLock},
};

mod common;
use crate::common::{
    dom::{DocumentScroll, KeyBridge},
    theme::{self, DarkMode},
};

mod components;
use components::navigation::NavBar;

mod about;
use about::About;

mod home;
use home::Home;

mod religion;

mod timeline;
use timeline::Chronology;

// site settings are compiled in, see site.toml
const SITE_TOML: &str = include_str!("../site.toml");

static SITE_CONFIG: OnceLock<SiteConfig> = OnceLock::new();

fn main() {
    let parsed = parse_config(SITE_TOML);
    let config = parsed.as_ref().cloned().unwrap_or_default();

    dioxus_logger::init(config.log_level()).expect("failed to init logger");

    if let Err(err) = parsed {
        error!("failed to parse site.toml, using defaults: {err}");
    }

    info!("starting site with base path {}", config.base_path);

    let _ = SITE_CONFIG.set(config);
    launch(App);
}

#[derive(Clone, PartialEq, Routable)]
#[rustfmt::skip]
enum Route {
    #[layout(NavBar)]
        #[route("/")]
        Home {},
        #[route("/cronologia")]
        Chronology {},
        #[route("/about")]
        About {},
}

#[component]
pub fn App() -> Element {
    use_context_provider(|| SITE_CONFIG.get().cloned().unwrap_or_default());
    let keys = use_context_provider(KeyRouter::new);
    use_context_provider(|| ScrollLock::new(DocumentScroll));

    let DarkMode(dark) = use_context_provider(|| DarkMode(Signal::new(theme::read_preference())));
    use_effect(move || theme::apply(dark()));

    // one window listener for the whole app, overlays subscribe to the router
    use_hook(move || {
        KeyBridge::install(keys)
            .map(Rc::new)
            .inspect_err(|err| error!("failed to install keyboard listener: {err}"))
            .ok()
    });

    rsx! {
        style { "{common::style::MODERN_STYLES}" }
        style { "{common::style::HOME_STYLES}" }
        Router::<Route> { config: RouterConfig::default }
    }
}
