use tracing::debug;

use super::{KeyOutcome, OverlayHost};

// interactive elements that take part in the focus trap
//
// this is intentionally the same list the browser uses for sequential navigation, minus
// anything explicitly taken out of the tab order with tabindex="-1"
pub const FOCUSABLE_SELECTOR: &str =
    r#"button, [href], input, select, textarea, [tabindex]:not([tabindex="-1"])"#;

// where focus should jump to, if anywhere
//
// only the two ends of the sequence wrap; anywhere else the browser's own tab order is
// left to do its job
pub fn wrap_target<E: Clone + PartialEq>(
    focusables: &[E],
    active: Option<&E>,
    backwards: bool,
) -> Option<E> {
    let first = focusables.first()?;
    let last = focusables.last()?;
    let active = active?;

    if backwards && active == first {
        Some(last.clone())
    } else if !backwards && active == last {
        Some(first.clone())
    } else {
        None
    }
}

// run the focus trap for a single tab press
//
// the focusable set is queried fresh every time, since the dialog contents can change
// while it is open
pub fn trap<H: OverlayHost + ?Sized>(host: &H, backwards: bool) -> KeyOutcome {
    let focusables = host.focusables();
    let active = host.active_element();

    match wrap_target(&focusables, active.as_ref(), backwards) {
        Some(target) => {
            debug!(backwards, candidates = focusables.len(), "wrapping focus");
            host.focus(&target);
            KeyOutcome::Wrapped
        }
        None => KeyOutcome::Pass,
    }
}
