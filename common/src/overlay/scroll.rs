use std::{cell::Cell, rc::Rc};

use tracing::debug;

// whatever actually scrolls behind the overlay
//
// reset() must restore the default behavior rather than some remembered value, which
// keeps it safe to call more than once
pub trait ScrollTarget {
    fn suppress(&self);

    fn reset(&self);
}

struct ScrollLockInner {
    holders: Cell<usize>,
    target: Box<dyn ScrollTarget>,
}

impl ScrollLockInner {
    fn release(&self) {
        let holders = self.holders.get();

        if holders == 0 {
            return;
        }

        self.holders.set(holders - 1);

        if holders == 1 {
            debug!("releasing scroll lock");
            self.target.reset();
        }
    }
}

// ScrollLock
//
// reference-counted owner of the page scroll suppression.  the first guard suppresses
// scrolling and the last one to go resets it, so two overlays open at once cannot undo
// each other's lock
#[derive(Clone)]
pub struct ScrollLock {
    inner: Rc<ScrollLockInner>,
}

impl ScrollLock {
    pub fn new<T: ScrollTarget + 'static>(target: T) -> Self {
        ScrollLock {
            inner: Rc::new(ScrollLockInner {
                holders: Cell::new(0),
                target: Box::new(target),
            }),
        }
    }

    pub fn acquire(&self) -> ScrollLockGuard {
        let holders = self.inner.holders.get();

        if holders == 0 {
            debug!("acquiring scroll lock");
            self.inner.target.suppress();
        }

        self.inner.holders.set(holders + 1);

        ScrollLockGuard {
            lock: self.inner.clone(),
            released: false,
        }
    }

    pub fn is_locked(&self) -> bool {
        self.holders() > 0
    }

    pub fn holders(&self) -> usize {
        self.inner.holders.get()
    }
}

pub struct ScrollLockGuard {
    lock: Rc<ScrollLockInner>,
    released: bool,
}

impl ScrollLockGuard {
    // safe to call any number of times; only the first call gives up the hold
    pub fn release(&mut self) {
        if self.released {
            return;
        }

        self.released = true;
        self.lock.release();
    }
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::cell::RefCell;

    use super::*;

    // records every call so tests can check both the final state and the traffic
    #[derive(Clone, Default)]
    pub(crate) struct RecordingTarget {
        pub(crate) calls: Rc<RefCell<Vec<&'static str>>>,
    }

    impl RecordingTarget {
        pub(crate) fn suppressed(&self) -> bool {
            self.calls.borrow().last() == Some(&"suppress")
        }
    }

    impl ScrollTarget for RecordingTarget {
        fn suppress(&self) {
            self.calls.borrow_mut().push("suppress");
        }

        fn reset(&self) {
            self.calls.borrow_mut().push("reset");
        }
    }

    #[test]
    fn guard_suppresses_until_dropped() {
        let target = RecordingTarget::default();
        let lock = ScrollLock::new(target.clone());

        let guard = lock.acquire();
        assert!(lock.is_locked());
        assert!(target.suppressed());

        drop(guard);
        assert!(!lock.is_locked());
        assert_eq!(*target.calls.borrow(), vec!["suppress", "reset"]);
    }

    #[test]
    fn release_is_idempotent() {
        let target = RecordingTarget::default();
        let lock = ScrollLock::new(target.clone());

        let mut guard = lock.acquire();
        guard.release();
        guard.release();
        drop(guard);

        assert_eq!(lock.holders(), 0);
        assert_eq!(*target.calls.borrow(), vec!["suppress", "reset"]);
    }

    #[test]
    fn last_holder_resets() {
        let target = RecordingTarget::default();
        let lock = ScrollLock::new(target.clone());

        let first = lock.acquire();
        let second = lock.acquire();
        assert_eq!(lock.holders(), 2);

        drop(first);
        assert!(lock.is_locked());
        assert!(target.suppressed());

        drop(second);
        assert!(!lock.is_locked());
        assert_eq!(*target.calls.borrow(), vec!["suppress", "reset"]);
    }

    #[test]
    fn reacquire_after_release_suppresses_again() {
        let target = RecordingTarget::default();
        let lock = ScrollLock::new(target.clone());

        drop(lock.acquire());
        let _guard = lock.acquire();

        assert_eq!(
            *target.calls.borrow(),
            vec!["suppress", "reset", "suppress"]
        );
    }
}
