//! Mobile menu open/close.

use crate::dom::{Element, Hook, Surface};

const OPEN: &str = "is-open";

/// Flip the mobile menu.
///
/// Returns `Some(open)` with the new state, or `None` when the trigger
/// button or the panel is missing.
pub fn toggle<S: Surface>(root: &S) -> Option<bool> {
    let button = root.query(Hook::MobileToggle)?;
    let panel = root.query(Hook::MobileMenu)?;

    let open = !panel.has_class(OPEN);
    set_open(&button, &panel, open);
    Some(open)
}

/// Close the panel if it is open. Returns whether anything changed.
pub fn close<S: Surface>(root: &S) -> bool {
    let Some(panel) = root.query(Hook::MobileMenu) else {
        return false;
    };
    if !panel.has_class(OPEN) {
        return false;
    }

    panel.remove_class(OPEN);
    panel.set_attr("aria-hidden", "true");
    if let Some(button) = root.query(Hook::MobileToggle) {
        button.set_attr("aria-expanded", "false");
    }
    true
}

fn set_open<E: Element>(button: &E, panel: &E, open: bool) {
    if open {
        panel.add_class(OPEN);
    } else {
        panel.remove_class(OPEN);
    }
    panel.set_attr("aria-hidden", if open { "false" } else { "true" });
    button.set_attr("aria-expanded", if open { "true" } else { "false" });
}
