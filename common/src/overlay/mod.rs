use std::{rc::Rc, time::Duration};

use tracing::debug;

pub mod focus;
pub mod keys;
pub mod scroll;

pub use keys::{Key, KeyOutcome, KeyPress, KeyRouter, KeySubscription};
pub use scroll::{ScrollLock, ScrollLockGuard, ScrollTarget};

pub const DEFAULT_FOCUS_DELAY: Duration = Duration::from_millis(100);

// OverlayHost
//
// the environment an overlay controls focus in.  in the webapp this is the DOM subtree
// under the dialog root; in tests it is a plain list of names.
//
// Timer is whatever defer() hands back, and dropping it must cancel the task if it has
// not run yet (gloo's Timeout already behaves this way)
pub trait OverlayHost {
    type Element: Clone + PartialEq;
    type Timer;

    // focusable descendants of the overlay root, in tab order
    fn focusables(&self) -> Vec<Self::Element>;

    fn active_element(&self) -> Option<Self::Element>;

    fn focus(&self, element: &Self::Element);

    // the element that should receive focus once the overlay has opened, normally the
    // close button
    fn initial_focus(&self) -> Option<Self::Element>;

    fn defer(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Self::Timer;
}

// key handling for an open overlay
//
// escape asks the owner to close; it does not close anything by itself, since the owner
// holds the open flag and dropping the session happens when that flag flips
pub fn handle_key<H: OverlayHost + ?Sized>(
    host: &H,
    press: &KeyPress,
    on_close: &dyn Fn(),
) -> KeyOutcome {
    match press.key {
        Key::Escape => {
            debug!("escape pressed, requesting close");
            on_close();
            KeyOutcome::Dismissed
        }
        Key::Tab => focus::trap(host, press.shift),
        Key::Other => KeyOutcome::Pass,
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OverlayState {
    #[default]
    Closed,
    Open,
}

// everything an open overlay holds on to
//
// the fields are never read, they exist to be dropped together when the overlay closes
struct Session<T> {
    _keys: KeySubscription,
    _scroll: ScrollLockGuard,
    _focus: T,
}

// OverlayController
//
// two states, closed and open.  entering open acquires the scroll lock, subscribes to
// key presses and schedules the initial focus as a single Session; leaving open (or
// dropping the controller) drops that Session, which undoes all three no matter which
// path got us there
pub struct OverlayController<H: OverlayHost + 'static> {
    host: Rc<H>,
    keys: KeyRouter,
    scroll: ScrollLock,
    on_close: Rc<dyn Fn()>,
    focus_delay: Duration,
    session: Option<Session<H::Timer>>,
}

impl<H: OverlayHost + 'static> OverlayController<H> {
    pub fn new<F>(host: H, keys: KeyRouter, scroll: ScrollLock, on_close: F) -> Self
    where
        F: Fn() + 'static,
    {
        OverlayController {
            host: Rc::new(host),
            keys,
            scroll,
            on_close: Rc::new(on_close),
            focus_delay: DEFAULT_FOCUS_DELAY,
            session: None,
        }
    }

    pub fn with_focus_delay(mut self, delay: Duration) -> Self {
        self.focus_delay = delay;
        self
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn state(&self) -> OverlayState {
        match self.session {
            Some(_) => OverlayState::Open,
            None => OverlayState::Closed,
        }
    }

    pub fn is_open(&self) -> bool {
        self.state() == OverlayState::Open
    }

    pub fn set_open(&mut self, open: bool) {
        if open { self.open() } else { self.close() }
    }

    pub fn open(&mut self) {
        if self.session.is_some() {
            return;
        }

        debug!(focus_delay_ms = self.focus_delay.as_millis() as u64, "opening overlay");

        let scroll = self.scroll.acquire();

        let host = self.host.clone();
        let on_close = self.on_close.clone();
        let keys = self
            .keys
            .subscribe(move |press| handle_key(&*host, press, &*on_close));

        let host = self.host.clone();
        let focus = self.host.defer(
            self.focus_delay,
            Box::new(move || match host.initial_focus() {
                Some(element) => host.focus(&element),
                None => debug!("no initial focus target, skipping"),
            }),
        );

        self.session = Some(Session {
            _keys: keys,
            _scroll: scroll,
            _focus: focus,
        });
    }

    pub fn close(&mut self) {
        if let Some(session) = self.session.take() {
            debug!("closing overlay");
            drop(session);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use super::scroll::tests::RecordingTarget;
    use super::*;

    // an in-memory stand-in for the dialog subtree
    #[derive(Default)]
    struct FakeDom {
        focusables: RefCell<Vec<&'static str>>,
        active: RefCell<Option<&'static str>>,
        initial: RefCell<Option<&'static str>>,
        timers: RefCell<Vec<(Duration, Rc<Cell<bool>>, Box<dyn FnOnce()>)>>,
    }

    #[derive(Clone, Default)]
    struct FakeHost {
        dom: Rc<FakeDom>,
    }

    struct FakeTimer {
        cancelled: Rc<Cell<bool>>,
    }

    impl Drop for FakeTimer {
        fn drop(&mut self) {
            self.cancelled.set(true);
        }
    }

    impl FakeHost {
        fn with_elements(elements: &[&'static str]) -> Self {
            let host = FakeHost::default();
            *host.dom.focusables.borrow_mut() = elements.to_vec();
            *host.dom.initial.borrow_mut() = elements.first().copied();
            host
        }

        fn active(&self) -> Option<&'static str> {
            *self.dom.active.borrow()
        }

        fn set_active(&self, element: &'static str) {
            *self.dom.active.borrow_mut() = Some(element);
        }

        fn pending_delays(&self) -> Vec<Duration> {
            self.dom.timers.borrow().iter().map(|(delay, _, _)| *delay).collect()
        }

        // run everything that is still scheduled, as if the delay had elapsed
        fn fire_timers(&self) {
            let timers: Vec<_> = self.dom.timers.borrow_mut().drain(..).collect();

            for (_, cancelled, task) in timers {
                if !cancelled.get() {
                    task();
                }
            }
        }
    }

    impl OverlayHost for FakeHost {
        type Element = &'static str;
        type Timer = FakeTimer;

        fn focusables(&self) -> Vec<&'static str> {
            self.dom.focusables.borrow().clone()
        }

        fn active_element(&self) -> Option<&'static str> {
            self.active()
        }

        fn focus(&self, element: &&'static str) {
            self.set_active(element);
        }

        fn initial_focus(&self) -> Option<&'static str> {
            *self.dom.initial.borrow()
        }

        fn defer(&self, delay: Duration, task: Box<dyn FnOnce()>) -> FakeTimer {
            let cancelled = Rc::new(Cell::new(false));
            self.dom
                .timers
                .borrow_mut()
                .push((delay, cancelled.clone(), task));

            FakeTimer { cancelled }
        }
    }

    struct Harness {
        host: FakeHost,
        keys: KeyRouter,
        scroll: ScrollLock,
        target: RecordingTarget,
        closes: Rc<Cell<usize>>,
        controller: OverlayController<FakeHost>,
    }

    fn harness(elements: &[&'static str]) -> Harness {
        let host = FakeHost::with_elements(elements);
        let keys = KeyRouter::new();
        let target = RecordingTarget::default();
        let scroll = ScrollLock::new(target.clone());
        let closes = Rc::new(Cell::new(0));

        let counter = closes.clone();
        let controller = OverlayController::new(host.clone(), keys.clone(), scroll.clone(), move || {
            counter.set(counter.get() + 1)
        });

        Harness {
            host,
            keys,
            scroll,
            target,
            closes,
            controller,
        }
    }

    fn press(keys: &KeyRouter, key: Key, shift: bool) -> KeyOutcome {
        keys.dispatch(&KeyPress { key, shift })
    }

    #[test]
    fn starts_closed_without_side_effects() {
        let h = harness(&["close"]);

        assert_eq!(h.controller.state(), OverlayState::Closed);
        assert_eq!(h.keys.listener_count(), 0);
        assert!(!h.scroll.is_locked());
        assert!(h.target.calls.borrow().is_empty());
        assert!(h.host.pending_delays().is_empty());
    }

    #[test]
    fn opening_acquires_everything_together() {
        let mut h = harness(&["close"]);

        h.controller.set_open(true);

        assert!(h.controller.is_open());
        assert_eq!(h.keys.listener_count(), 1);
        assert!(h.scroll.is_locked());
        assert!(h.target.suppressed());
        assert_eq!(h.host.pending_delays(), vec![DEFAULT_FOCUS_DELAY]);
    }

    #[test]
    fn repeated_toggles_never_leak_listeners() {
        let mut h = harness(&["close"]);

        for _ in 0..5 {
            h.controller.set_open(true);
            h.controller.set_open(true);
            assert_eq!(h.keys.listener_count(), 1);

            h.controller.set_open(false);
            assert_eq!(h.keys.listener_count(), 0);
        }

        h.controller.set_open(true);
        assert_eq!(h.keys.listener_count(), 1);
        assert_eq!(h.scroll.holders(), 1);
    }

    #[test]
    fn closing_twice_leaves_scroll_at_default() {
        let mut h = harness(&["close"]);

        h.controller.close();
        assert!(h.target.calls.borrow().is_empty());

        h.controller.open();
        h.controller.close();
        h.controller.close();

        assert!(!h.scroll.is_locked());
        assert_eq!(*h.target.calls.borrow(), vec!["suppress", "reset"]);
    }

    #[test]
    fn tab_wraps_only_at_the_ends() {
        let mut h = harness(&["a", "b", "c"]);
        h.controller.open();

        h.host.set_active("a");
        assert_eq!(press(&h.keys, Key::Tab, true), KeyOutcome::Wrapped);
        assert_eq!(h.host.active(), Some("c"));

        assert_eq!(press(&h.keys, Key::Tab, false), KeyOutcome::Wrapped);
        assert_eq!(h.host.active(), Some("a"));

        h.host.set_active("b");
        assert_eq!(press(&h.keys, Key::Tab, false), KeyOutcome::Pass);
        assert_eq!(press(&h.keys, Key::Tab, true), KeyOutcome::Pass);
        assert_eq!(h.host.active(), Some("b"));
    }

    #[test]
    fn focusables_are_requeried_on_every_press() {
        let mut h = harness(&["a", "b"]);
        h.controller.open();

        h.host.set_active("b");
        *h.host.dom.focusables.borrow_mut() = vec!["a", "b", "c"];

        assert_eq!(press(&h.keys, Key::Tab, false), KeyOutcome::Pass);

        h.host.set_active("c");
        assert_eq!(press(&h.keys, Key::Tab, false), KeyOutcome::Wrapped);
        assert_eq!(h.host.active(), Some("a"));
    }

    #[test]
    fn empty_overlay_does_not_trap() {
        let mut h = harness(&[]);
        h.controller.open();

        assert_eq!(press(&h.keys, Key::Tab, false), KeyOutcome::Pass);
        assert_eq!(press(&h.keys, Key::Tab, true), KeyOutcome::Pass);
        assert_eq!(h.host.active(), None);
    }

    #[test]
    fn escape_requests_close_once_per_press() {
        let mut h = harness(&["close"]);

        assert_eq!(press(&h.keys, Key::Escape, false), KeyOutcome::Pass);
        assert_eq!(h.closes.get(), 0);

        h.controller.open();
        assert_eq!(press(&h.keys, Key::Escape, false), KeyOutcome::Dismissed);
        assert_eq!(h.closes.get(), 1);
        assert_eq!(press(&h.keys, Key::Escape, false), KeyOutcome::Dismissed);
        assert_eq!(h.closes.get(), 2);

        h.controller.close();
        assert_eq!(press(&h.keys, Key::Escape, false), KeyOutcome::Pass);
        assert_eq!(h.closes.get(), 2);
    }

    #[test]
    fn other_keys_pass_through() {
        let mut h = harness(&["close"]);
        h.controller.open();

        assert_eq!(press(&h.keys, Key::Other, false), KeyOutcome::Pass);
        assert_eq!(h.closes.get(), 0);
    }

    #[test]
    fn initial_focus_lands_after_delay() {
        let mut h = harness(&["close", "link"]);
        h.controller.open();

        assert_eq!(h.host.active(), None);

        h.host.fire_timers();
        assert_eq!(h.host.active(), Some("close"));
    }

    #[test]
    fn missing_initial_target_is_a_no_op() {
        let mut h = harness(&["link"]);
        *h.host.dom.initial.borrow_mut() = None;

        h.controller.open();
        h.host.fire_timers();

        assert_eq!(h.host.active(), None);
        assert!(h.controller.is_open());
    }

    #[test]
    fn closing_before_delay_cancels_initial_focus() {
        let mut h = harness(&["close"]);

        h.controller.open();
        h.controller.close();
        h.host.fire_timers();

        assert_eq!(h.host.active(), None);
    }

    #[test]
    fn configured_delay_is_used() {
        let h = harness(&["close"]);
        let mut controller = h.controller.with_focus_delay(Duration::from_millis(250));

        controller.open();

        assert_eq!(h.host.pending_delays(), vec![Duration::from_millis(250)]);
    }

    #[test]
    fn dropping_controller_releases_session() {
        let mut h = harness(&["close"]);
        h.controller.open();

        let Harness {
            keys,
            scroll,
            target,
            controller,
            ..
        } = h;
        drop(controller);

        assert_eq!(keys.listener_count(), 0);
        assert!(!scroll.is_locked());
        assert_eq!(*target.calls.borrow(), vec!["suppress", "reset"]);
    }

    #[test]
    fn stacked_overlays_share_lock_and_route_to_top() {
        let mut lower = harness(&["lower-close"]);

        let upper_host = FakeHost::with_elements(&["upper-close"]);
        let upper_closes = Rc::new(Cell::new(0));
        let counter = upper_closes.clone();
        let mut upper = OverlayController::new(
            upper_host,
            lower.keys.clone(),
            lower.scroll.clone(),
            move || counter.set(counter.get() + 1),
        );

        lower.controller.open();
        upper.open();
        assert_eq!(lower.scroll.holders(), 2);

        press(&lower.keys, Key::Escape, false);
        assert_eq!((lower.closes.get(), upper_closes.get()), (0, 1));

        upper.close();
        assert!(lower.scroll.is_locked());

        press(&lower.keys, Key::Escape, false);
        assert_eq!((lower.closes.get(), upper_closes.get()), (1, 1));

        lower.controller.close();
        assert!(!lower.scroll.is_locked());
    }

    // open a dialog holding [Close, Link, Submit], walk focus around and dismiss it
    #[test]
    fn dismiss_walkthrough() {
        let mut h = harness(&["close", "link", "submit"]);

        h.controller.open();
        h.host.fire_timers();
        assert_eq!(h.host.active(), Some("close"));

        assert_eq!(press(&h.keys, Key::Tab, true), KeyOutcome::Wrapped);
        assert_eq!(h.host.active(), Some("submit"));

        assert_eq!(press(&h.keys, Key::Escape, false), KeyOutcome::Dismissed);
        assert_eq!(h.closes.get(), 1);

        // the owner reacts to the close request by clearing its flag
        h.controller.set_open(false);

        assert_eq!(h.keys.listener_count(), 0);
        assert!(!h.scroll.is_locked());
        assert_eq!(*h.target.calls.borrow(), vec!["suppress", "reset"]);
    }
}
