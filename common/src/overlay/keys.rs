use std::{
    cell::RefCell,
    rc::{Rc, Weak},
};

use tracing::debug;

// the keys an overlay cares about; everything else passes through untouched
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Escape,
    Tab,
    Other,
}

impl Key {
    // map a DOM KeyboardEvent.key value
    //
    // "Esc" is what older Edge/IE builds report for the escape key
    pub fn from_name(name: &str) -> Key {
        match name {
            "Escape" | "Esc" => Key::Escape,
            "Tab" => Key::Tab,
            _ => Key::Other,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Key,
    pub shift: bool,
}

impl KeyPress {
    pub fn new(key: Key) -> Self {
        KeyPress { key, shift: false }
    }

    pub fn shifted(key: Key) -> Self {
        KeyPress { key, shift: true }
    }
}

// what a subscription did with a key press
//
// only a wrapped focus needs the browser's own tab navigation cancelled; escape leaves
// the event alone so that other page handlers still see it
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum KeyOutcome {
    #[default]
    Pass,
    Dismissed,
    Wrapped,
}

impl KeyOutcome {
    pub fn prevents_default(self) -> bool {
        self == KeyOutcome::Wrapped
    }
}

type Handler = Rc<dyn Fn(&KeyPress) -> KeyOutcome>;

#[derive(Default)]
struct KeyRouterInner {
    next_id: u64,
    handlers: Vec<(u64, Handler)>,
}

// KeyRouter
//
// instead of every overlay hanging its own listener off the window, the app owns one
// bridge from the window keydown event into this router, and overlays hold a
// KeySubscription for as long as they are open.  dropping the subscription is the only
// way to unregister, so a session cannot leak its handler.
//
// presses go to the newest subscription only, so with stacked overlays the topmost one
// handles escape and the tab trap while the ones underneath stay quiet
#[derive(Clone, Default)]
pub struct KeyRouter {
    inner: Rc<RefCell<KeyRouterInner>>,
}

impl KeyRouter {
    pub fn new() -> Self {
        KeyRouter::default()
    }

    pub fn subscribe<F>(&self, handler: F) -> KeySubscription
    where
        F: Fn(&KeyPress) -> KeyOutcome + 'static,
    {
        let mut inner = self.inner.borrow_mut();

        let id = inner.next_id;
        inner.next_id += 1;
        inner.handlers.push((id, Rc::new(handler)));

        debug!(id, listeners = inner.handlers.len(), "key subscription added");

        KeySubscription {
            id,
            router: Rc::downgrade(&self.inner),
        }
    }

    pub fn dispatch(&self, press: &KeyPress) -> KeyOutcome {
        // clone the handler out before calling it, since handling escape usually ends with
        // the overlay dropping this very subscription
        let handler = match self.inner.borrow().handlers.last() {
            Some((_, handler)) => handler.clone(),
            None => return KeyOutcome::Pass,
        };

        handler(press)
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().handlers.len()
    }
}

// handle for a live KeyRouter registration; unregisters on drop
pub struct KeySubscription {
    id: u64,
    router: Weak<RefCell<KeyRouterInner>>,
}

impl KeySubscription {
    pub fn id(&self) -> u64 {
        self.id
    }
}

impl Drop for KeySubscription {
    fn drop(&mut self) {
        if let Some(inner) = self.router.upgrade() {
            let mut inner = inner.borrow_mut();
            inner.handlers.retain(|(id, _)| *id != self.id);

            debug!(id = self.id, listeners = inner.handlers.len(), "key subscription removed");
        }
    }
}
