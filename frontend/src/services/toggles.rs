//! Class toggles for tiles, character cards, style pills, sliders and
//! `pf-card` activation.

use crate::dom::{Element, Hook, Surface};
use crate::types::Notification;

/// Flip `active` and `glow` together. Returns the new active state.
pub fn toggle_glow<E: Element>(el: &E) -> bool {
    let active = el.toggle_class("active");
    el.toggle_class("glow");
    active
}

/// [`toggle_glow`] plus a matching `aria-pressed`.
pub fn toggle_pressed<E: Element>(el: &E) -> bool {
    toggle_glow(el);
    let active = el.has_class("active");
    el.set_attr("aria-pressed", if active { "true" } else { "false" });
    active
}

/// Make `chosen` the only active pill of `pills`.
pub fn select_pill<E: Element>(pills: &[E], chosen: &E) {
    for pill in pills {
        pill.remove_class("active");
        pill.set_attr("aria-checked", "false");
    }
    chosen.add_class("active");
    chosen.set_attr("aria-checked", "true");
}

/// Id of the label echoing a slider: `panels-slider` -> `panels-value`.
pub fn slider_label_id(slider_id: &str) -> String {
    slider_id.replacen("-slider", "-value", 1)
}

/// Copy the slider's value into its label.
pub fn echo_slider<E: Element>(slider: &E, label: &E) {
    label.set_text(&slider.value());
}

/// Card id a `.pf-card-select` proxy points at.
pub fn card_select_target<E: Element>(proxy: &E) -> Option<String> {
    proxy
        .non_empty_attr("data-target-card-id")
        .or_else(|| proxy.non_empty_attr("data-card-id"))
}

/// Make `card_id` the only active `pf-card`.
///
/// Returns false for an empty id or when no card carries it. Non-matching
/// cards are cleared either way.
pub fn activate_card<S: Surface>(root: &S, card_id: &str) -> bool {
    if card_id.is_empty() {
        return false;
    }

    let mut found = false;
    for card in root.query_all(Hook::Card) {
        if card.attr("data-card-id").as_deref() == Some(card_id) {
            card.add_class("is-active");
            card.set_attr("aria-pressed", "true");
            found = true;
        } else {
            card.remove_class("is-active");
            card.set_attr("aria-pressed", "false");
        }
    }

    if found {
        root.emit(&Notification::CardActivated {
            card_id: card_id.to_string(),
        });
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{MemoryDocument, MemoryElement};

    fn card(doc: &MemoryDocument, id: &str) -> MemoryElement {
        doc.append(MemoryElement::new("div").with_class("pf-card").with_attr("data-card-id", id))
    }

    #[test]
    fn test_activate_card_is_exclusive() {
        let doc = MemoryDocument::new("/");
        let c1 = card(&doc, "c1");
        let c2 = card(&doc, "c2");

        assert!(activate_card(&doc, "c2"));
        assert!(c2.has_class("is-active"));
        assert_eq!(c2.attr("aria-pressed").as_deref(), Some("true"));
        assert!(!c1.has_class("is-active"));
        assert_eq!(c1.attr("aria-pressed").as_deref(), Some("false"));
        assert_eq!(
            doc.notifications(),
            vec![Notification::CardActivated { card_id: "c2".into() }]
        );

        assert!(activate_card(&doc, "c1"));
        assert!(c1.has_class("is-active"));
        assert!(!c2.has_class("is-active"));
    }

    #[test]
    fn test_activate_unknown_card() {
        let doc = MemoryDocument::new("/");
        let c1 = card(&doc, "c1");
        activate_card(&doc, "c1");
        doc.take_notifications();

        assert!(!activate_card(&doc, "c9"));
        assert!(!c1.has_class("is-active"));
        assert!(doc.notifications().is_empty());
        assert!(!activate_card(&doc, ""));
    }

    #[test]
    fn test_toggle_pressed_tracks_active() {
        let el = MemoryElement::new("div").with_class("character-card");
        assert!(toggle_pressed(&el));
        assert!(el.has_class("glow"));
        assert_eq!(el.attr("aria-pressed").as_deref(), Some("true"));
        assert!(!toggle_pressed(&el));
        assert_eq!(el.attr("aria-pressed").as_deref(), Some("false"));
    }

    #[test]
    fn test_select_pill() {
        let pills: Vec<_> = (0..3).map(|_| MemoryElement::new("button").with_class("style-pill")).collect();
        select_pill(&pills, &pills[1]);
        select_pill(&pills, &pills[2]);
        let active: Vec<_> = pills.iter().map(|p| p.has_class("active")).collect();
        assert_eq!(active, vec![false, false, true]);
        assert_eq!(pills[1].attr("aria-checked").as_deref(), Some("false"));
    }

    #[test]
    fn test_slider_label_id() {
        assert_eq!(slider_label_id("panels-slider"), "panels-value");
        assert_eq!(slider_label_id("a-slider-b-slider"), "a-value-b-slider");
        assert_eq!(slider_label_id("zoom"), "zoom");
    }

    #[test]
    fn test_card_select_target_prefers_target_attr() {
        let proxy = MemoryElement::new("button")
            .with_attr("data-target-card-id", "c2")
            .with_attr("data-card-id", "c1");
        assert_eq!(card_select_target(&proxy).as_deref(), Some("c2"));
        let bare = MemoryElement::new("button").with_attr("data-card-id", "c1");
        assert_eq!(card_select_target(&bare).as_deref(), Some("c1"));
        assert_eq!(card_select_target(&MemoryElement::new("button")), None);
    }
}
