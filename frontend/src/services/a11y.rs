//! Keyboard focus trap and lazy image loading.

use std::rc::Rc;

use crate::dom::{Element, Hook, Surface, UiEvent};

/// Wrap Tab focus between the first and last focusable elements.
///
/// Returns true when focus was moved (and the event's default prevented).
pub fn trap_tab<S: Surface>(root: &S, event: &UiEvent) -> bool {
    if event.key() != Some("Tab") {
        return false;
    }
    let focusable = root.query_all(Hook::Focusable);
    let (Some(first), Some(last)) = (focusable.first(), focusable.last()) else {
        return false;
    };

    let active = root.active_element();
    let target = if event.shift() && active.as_ref() == Some(first) {
        last
    } else if !event.shift() && active.as_ref() == Some(last) {
        first
    } else {
        return false;
    };

    event.prevent_default();
    target.focus();
    true
}

/// Swap `data-src` into `src`. Returns false when there was nothing to load.
pub fn load_image<E: Element>(img: &E) -> bool {
    let Some(src) = img.attr("data-src") else {
        return false;
    };
    img.set_attr("src", &src);
    img.remove_attr("data-src");
    true
}

/// Watch every `img[data-src]` and load it once visible.
///
/// Returns how many images are being watched.
pub fn watch_lazy_images<S: Surface>(root: &S) -> usize {
    let on_visible: Rc<dyn Fn(&S::Element)> = Rc::new(|img: &S::Element| {
        load_image(img);
    });
    root.observe_visible(&root.query_all(Hook::LazyImage), on_visible)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{MemoryDocument, MemoryElement};

    fn focusables(doc: &MemoryDocument) -> (MemoryElement, MemoryElement, MemoryElement) {
        let first = doc.append(MemoryElement::new("a").with_attr("href", "index.html"));
        let middle = doc.append(MemoryElement::new("button"));
        let last = doc.append(MemoryElement::new("input").with_attr("type", "text"));
        (first, middle, last)
    }

    #[test]
    fn test_tab_from_last_wraps_to_first() {
        let doc = MemoryDocument::new("/");
        let (first, _, last) = focusables(&doc);
        last.focus();

        let ev = UiEvent::key_down("Tab", false);
        assert!(trap_tab(&doc, &ev));
        assert!(ev.default_prevented());
        assert_eq!(doc.focused(), Some(first));
    }

    #[test]
    fn test_shift_tab_from_first_wraps_to_last() {
        let doc = MemoryDocument::new("/");
        let (first, _, last) = focusables(&doc);
        first.focus();

        assert!(trap_tab(&doc, &UiEvent::key_down("Tab", true)));
        assert_eq!(doc.focused(), Some(last));
    }

    #[test]
    fn test_tab_in_the_middle_is_left_alone() {
        let doc = MemoryDocument::new("/");
        let (_, middle, _) = focusables(&doc);
        middle.focus();

        let ev = UiEvent::key_down("Tab", false);
        assert!(!trap_tab(&doc, &ev));
        assert!(!ev.default_prevented());
        assert!(!trap_tab(&doc, &UiEvent::key_down("Enter", false)));
    }

    #[test]
    fn test_lazy_images_load_when_revealed() {
        let doc = MemoryDocument::new("/");
        let img = doc.append(MemoryElement::new("img").with_attr("data-src", "/img/panel-1.webp"));
        doc.append(MemoryElement::new("img").with_attr("src", "/img/logo.svg"));

        assert_eq!(watch_lazy_images(&doc), 1);
        assert_eq!(img.attr("src"), None);

        doc.reveal(&img);
        assert_eq!(img.attr("src").as_deref(), Some("/img/panel-1.webp"));
        assert_eq!(img.attr("data-src"), None);
    }

    #[test]
    fn test_lazy_images_share_one_observer() {
        let doc = MemoryDocument::new("/");
        let first = doc.append(MemoryElement::new("img").with_attr("data-src", "a.png"));
        let second = doc.append(MemoryElement::new("img").with_attr("data-src", "b.png"));

        assert_eq!(watch_lazy_images(&doc), 2);
        assert_eq!(doc.observer_count(), 1);

        doc.reveal(&second);
        assert_eq!(second.attr("src").as_deref(), Some("b.png"));
        assert_eq!(first.attr("src"), None);
    }

    #[test]
    fn test_no_observer_without_lazy_images() {
        let doc = MemoryDocument::new("/");
        assert_eq!(watch_lazy_images(&doc), 0);
        assert_eq!(doc.observer_count(), 0);
    }

    #[test]
    fn test_lazy_images_without_observer() {
        let doc = MemoryDocument::new("/");
        doc.disable_visibility_observer();
        let img = doc.append(MemoryElement::new("img").with_attr("data-src", "a.png"));
        assert_eq!(watch_lazy_images(&doc), 0);
        assert_eq!(img.attr("data-src").as_deref(), Some("a.png"));
    }
}
