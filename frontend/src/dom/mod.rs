//! Document surface abstraction.
//!
//! The behaviour modules never touch `web_sys` directly. They run against
//! a [`Surface`] (element lookup, event subscription, notifications) whose
//! elements implement [`Element`]. Two surfaces ship with the crate:
//!
//! - [`MemoryDocument`] - in-memory document for tests and headless hosts
//! - [`BrowserDocument`] - the real DOM through `web-sys`

use std::cell::Cell;
use std::rc::Rc;

use crate::types::Notification;

mod browser;
mod memory;

pub use browser::*;
pub use memory::*;

// =============================================================================
// Markup hooks
// =============================================================================

/// Canonical markup hooks the behaviour layer binds to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Hook {
    /// Page header landmark.
    Header,
    /// Navigation link.
    NavLink,
    /// Mobile menu trigger button.
    MobileToggle,
    /// Mobile menu panel.
    MobileMenu,
    /// Hero call-to-action.
    HeroCta,
    /// Upload slot tile.
    UploadTile,
    /// Character card (legacy toggle binding).
    CharacterCard,
    /// Recent comic tile.
    ComicTile,
    /// Anything marked `data-interactive`.
    Interactive,
    /// Range input.
    RangeSlider,
    /// Selectable style pill.
    StylePill,
    /// Export modal trigger.
    ExportStart,
    /// Export modal close control.
    ExportClose,
    /// Export modal.
    ExportModal,
    /// Activatable card carrying `data-card-id`.
    Card,
    /// Proxy that activates a card by id.
    CardSelect,
    /// Keyboard focusable element.
    Focusable,
    /// Image waiting for lazy load.
    LazyImage,
}

impl Hook {
    /// CSS selector for the hook.
    pub fn selector(self) -> &'static str {
        match self {
            Hook::Header => "header",
            Hook::NavLink => "[data-pf=\"nav-link\"]",
            Hook::MobileToggle => "button.pf-mobile-toggle[data-pf=\"mobile-toggle\"]",
            Hook::MobileMenu => "#pf-mobile-menu",
            Hook::HeroCta => ".hero-cta, .cta-button, .primary-cta, [data-cta=\"create\"]",
            Hook::UploadTile => ".upload-slot, .upload-tile, [data-upload-slot]",
            Hook::CharacterCard => ".character-card, [data-character]",
            Hook::ComicTile => ".recent-comic-tile, .comic-tile, [data-comic-tile]",
            Hook::Interactive => "[data-interactive]",
            Hook::RangeSlider => "input[type=\"range\"]",
            Hook::StylePill => ".style-pill:not(.inactive)",
            Hook::ExportStart => ".pf-export-start",
            Hook::ExportClose => ".pf-export-close",
            Hook::ExportModal => "#pf-export-modal",
            Hook::Card => ".pf-card[data-card-id]",
            Hook::CardSelect => ".pf-card-select",
            Hook::Focusable => {
                "a[href], button:not([disabled]), textarea:not([disabled]), \
                 input:not([disabled]), select:not([disabled]), [tabindex]:not([tabindex=\"-1\"])"
            }
            Hook::LazyImage => "img[data-src]",
        }
    }
}

// =============================================================================
// Events
// =============================================================================

/// DOM events the behaviour layer subscribes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventKind {
    Click,
    KeyDown,
    Input,
}

impl EventKind {
    pub fn dom_name(self) -> &'static str {
        match self {
            EventKind::Click => "click",
            EventKind::KeyDown => "keydown",
            EventKind::Input => "input",
        }
    }
}

/// Toolkit-neutral view of a DOM event handed to handlers.
#[derive(Debug)]
pub struct UiEvent {
    kind: EventKind,
    key: Option<String>,
    shift: bool,
    prevented: Cell<bool>,
}

impl UiEvent {
    pub fn click() -> Self {
        Self::new(EventKind::Click, None, false)
    }

    pub fn input() -> Self {
        Self::new(EventKind::Input, None, false)
    }

    pub fn key_down(key: &str, shift: bool) -> Self {
        Self::new(EventKind::KeyDown, Some(key.to_string()), shift)
    }

    pub fn new(kind: EventKind, key: Option<String>, shift: bool) -> Self {
        Self {
            kind,
            key,
            shift,
            prevented: Cell::new(false),
        }
    }

    pub fn kind(&self) -> EventKind {
        self.kind
    }

    /// Key name for keyboard events (`"Enter"`, `" "`, `"Escape"`, `"Tab"`).
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn shift(&self) -> bool {
        self.shift
    }

    /// True for the keys that activate a focused control.
    pub fn is_activation_key(&self) -> bool {
        matches!(self.key(), Some("Enter") | Some(" "))
    }

    pub fn prevent_default(&self) {
        self.prevented.set(true);
    }

    pub fn default_prevented(&self) -> bool {
        self.prevented.get()
    }
}

/// Event handler registered on a surface.
pub type Handler = Rc<dyn Fn(&UiEvent)>;

// =============================================================================
// Capabilities
// =============================================================================

/// Element handle. Clones refer to the same underlying node.
pub trait Element: Clone + PartialEq + 'static {
    fn id(&self) -> String;
    fn attr(&self, name: &str) -> Option<String>;
    fn set_attr(&self, name: &str, value: &str);
    fn remove_attr(&self, name: &str);
    fn has_class(&self, class: &str) -> bool;
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
    /// Current form value (inputs) or `value` attribute.
    fn value(&self) -> String;
    fn set_text(&self, text: &str);
    fn focus(&self);

    /// Flip `class`, returning whether it is now present.
    fn toggle_class(&self, class: &str) -> bool {
        if self.has_class(class) {
            self.remove_class(class);
            false
        } else {
            self.add_class(class);
            true
        }
    }

    /// Attribute value, treating an empty value like a missing one.
    fn non_empty_attr(&self, name: &str) -> Option<String> {
        self.attr(name).filter(|v| !v.is_empty())
    }
}

/// Document-like root the behaviour layer runs against.
pub trait Surface: Clone + 'static {
    type Element: Element;

    /// First element matching `hook`, in document order.
    fn query(&self, hook: Hook) -> Option<Self::Element>;
    /// Every element matching `hook`, in document order.
    fn query_all(&self, hook: Hook) -> Vec<Self::Element>;
    fn by_id(&self, id: &str) -> Option<Self::Element>;

    /// Path of the current document location (`/pages/create.html`).
    fn location_path(&self) -> String;
    /// Navigate the page to `href`.
    fn navigate(&self, href: &str);
    fn active_element(&self) -> Option<Self::Element>;

    /// Publish a notification on the root's event stream.
    fn emit(&self, notification: &Notification);

    fn listen(&self, target: &Self::Element, kind: EventKind, handler: Handler);
    fn listen_document(&self, kind: EventKind, handler: Handler);

    /// Call `on_visible` once for each of `targets` as it scrolls into view.
    ///
    /// All targets share one observer. Returns how many are watched, 0 when
    /// the surface cannot observe visibility.
    fn observe_visible(&self, targets: &[Self::Element], on_visible: Rc<dyn Fn(&Self::Element)>) -> usize;

    /// Trailing segment of the location path (may be empty).
    fn location_file(&self) -> String {
        let path = self.location_path();
        path.rsplit('/').next().unwrap_or_default().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activation_keys() {
        assert!(UiEvent::key_down("Enter", false).is_activation_key());
        assert!(UiEvent::key_down(" ", false).is_activation_key());
        assert!(!UiEvent::key_down("Escape", false).is_activation_key());
        assert!(!UiEvent::click().is_activation_key());
    }

    #[test]
    fn test_prevent_default_sticks() {
        let ev = UiEvent::click();
        assert!(!ev.default_prevented());
        ev.prevent_default();
        assert!(ev.default_prevented());
    }

    #[test]
    fn test_location_file() {
        let doc = MemoryDocument::new("/site/create.html");
        assert_eq!(doc.location_file(), "create.html");
        doc.set_location("/site/");
        assert_eq!(doc.location_file(), "");
    }
}
