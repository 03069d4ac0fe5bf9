//! In-memory document surface.
//!
//! A flat, ordered list of elements with the same hook matching rules as
//! the CSS selectors in [`Hook::selector`]. Events are dispatched by hand
//! (`click`, `key_down`, `input`) and bubble from the element to document
//! listeners. Notifications are recorded in emission order.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::fmt;
use std::rc::{Rc, Weak};

use super::{Element, EventKind, Handler, Hook, Surface, UiEvent};
use crate::config::{EXPORT_MODAL_ID, MOBILE_MENU_ID};
use crate::types::Notification;

// =============================================================================
// Elements
// =============================================================================

#[derive(Default)]
struct NodeData {
    tag: String,
    classes: Vec<String>,
    attrs: BTreeMap<String, String>,
    value: String,
    text: String,
    owner: Weak<DocumentData>,
}

/// Element of a [`MemoryDocument`].
#[derive(Clone)]
pub struct MemoryElement(Rc<RefCell<NodeData>>);

impl MemoryElement {
    pub fn new(tag: &str) -> Self {
        Self(Rc::new(RefCell::new(NodeData {
            tag: tag.to_ascii_lowercase(),
            ..NodeData::default()
        })))
    }

    /// Builder: set an attribute (`class` and `value` included).
    pub fn with_attr(self, name: &str, value: &str) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Builder: add a class.
    pub fn with_class(self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    pub fn tag(&self) -> String {
        self.0.borrow().tag.clone()
    }

    pub fn text(&self) -> String {
        self.0.borrow().text.clone()
    }

    pub fn classes(&self) -> Vec<String> {
        self.0.borrow().classes.clone()
    }

    pub fn set_value(&self, value: &str) {
        self.0.borrow_mut().value = value.to_string();
    }

    fn has_attr(&self, name: &str) -> bool {
        self.0.borrow().attrs.contains_key(name)
    }

    fn attr_is(&self, name: &str, value: &str) -> bool {
        self.0.borrow().attrs.get(name).is_some_and(|v| v == value)
    }

    fn has_any_class(&self, classes: &[&str]) -> bool {
        classes.iter().any(|c| self.has_class(c))
    }

    /// Native equivalent of the hook's CSS selector.
    pub fn matches(&self, hook: Hook) -> bool {
        let tag = self.tag();
        match hook {
            Hook::Header => tag == "header",
            Hook::NavLink => self.attr_is("data-pf", "nav-link"),
            Hook::MobileToggle => {
                tag == "button"
                    && self.has_class("pf-mobile-toggle")
                    && self.attr_is("data-pf", "mobile-toggle")
            }
            Hook::MobileMenu => self.id() == MOBILE_MENU_ID,
            Hook::HeroCta => {
                self.has_any_class(&["hero-cta", "cta-button", "primary-cta"])
                    || self.attr_is("data-cta", "create")
            }
            Hook::UploadTile => {
                self.has_any_class(&["upload-slot", "upload-tile"]) || self.has_attr("data-upload-slot")
            }
            Hook::CharacterCard => self.has_class("character-card") || self.has_attr("data-character"),
            Hook::ComicTile => {
                self.has_any_class(&["recent-comic-tile", "comic-tile"])
                    || self.has_attr("data-comic-tile")
            }
            Hook::Interactive => self.has_attr("data-interactive"),
            Hook::RangeSlider => tag == "input" && self.attr_is("type", "range"),
            Hook::StylePill => self.has_class("style-pill") && !self.has_class("inactive"),
            Hook::ExportStart => self.has_class("pf-export-start"),
            Hook::ExportClose => self.has_class("pf-export-close"),
            Hook::ExportModal => self.id() == EXPORT_MODAL_ID,
            Hook::Card => self.has_class("pf-card") && self.has_attr("data-card-id"),
            Hook::CardSelect => self.has_class("pf-card-select"),
            Hook::Focusable => {
                let form_control = matches!(tag.as_str(), "button" | "textarea" | "input" | "select");
                (tag == "a" && self.has_attr("href"))
                    || (form_control && !self.has_attr("disabled"))
                    || (self.has_attr("tabindex") && !self.attr_is("tabindex", "-1"))
            }
            Hook::LazyImage => tag == "img" && self.has_attr("data-src"),
        }
    }
}

impl PartialEq for MemoryElement {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for MemoryElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = self.0.borrow();
        f.debug_struct("MemoryElement")
            .field("tag", &node.tag)
            .field("classes", &node.classes)
            .field("attrs", &node.attrs)
            .finish()
    }
}

impl Element for MemoryElement {
    fn id(&self) -> String {
        self.attr("id").unwrap_or_default()
    }

    fn attr(&self, name: &str) -> Option<String> {
        let node = self.0.borrow();
        if name == "class" {
            return (!node.classes.is_empty()).then(|| node.classes.join(" "));
        }
        node.attrs.get(name).cloned()
    }

    fn set_attr(&self, name: &str, value: &str) {
        let mut node = self.0.borrow_mut();
        match name {
            "class" => {
                node.classes = value.split_whitespace().map(str::to_string).collect();
            }
            "value" => {
                node.value = value.to_string();
                node.attrs.insert(name.to_string(), value.to_string());
            }
            _ => {
                node.attrs.insert(name.to_string(), value.to_string());
            }
        }
    }

    fn remove_attr(&self, name: &str) {
        let mut node = self.0.borrow_mut();
        if name == "class" {
            node.classes.clear();
        } else {
            node.attrs.remove(name);
        }
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.borrow().classes.iter().any(|c| c == class)
    }

    fn add_class(&self, class: &str) {
        if !self.has_class(class) {
            self.0.borrow_mut().classes.push(class.to_string());
        }
    }

    fn remove_class(&self, class: &str) {
        self.0.borrow_mut().classes.retain(|c| c != class);
    }

    fn value(&self) -> String {
        self.0.borrow().value.clone()
    }

    fn set_text(&self, text: &str) {
        self.0.borrow_mut().text = text.to_string();
    }

    fn focus(&self) {
        let owner = self.0.borrow().owner.upgrade();
        if let Some(doc) = owner {
            *doc.focused.borrow_mut() = Some(self.clone());
        }
    }
}

// =============================================================================
// Document
// =============================================================================

struct Listener {
    target: Option<MemoryElement>,
    kind: EventKind,
    handler: Handler,
}

struct Watcher {
    target: MemoryElement,
    on_visible: Rc<dyn Fn(&MemoryElement)>,
}

#[derive(Default)]
struct DocumentData {
    location: RefCell<String>,
    elements: RefCell<Vec<MemoryElement>>,
    listeners: RefCell<Vec<Listener>>,
    notifications: RefCell<Vec<Notification>>,
    focused: RefCell<Option<MemoryElement>>,
    watchers: RefCell<Vec<Watcher>>,
    observers: Cell<usize>,
    notification_hooks: RefCell<Vec<Rc<dyn Fn(&Notification)>>>,
    navigations: RefCell<Vec<String>>,
    no_observer: Cell<bool>,
}

/// Single-threaded in-memory document. Clones share the same document.
#[derive(Clone, Default)]
pub struct MemoryDocument {
    inner: Rc<DocumentData>,
}

impl MemoryDocument {
    /// Empty document located at `path`.
    pub fn new(path: &str) -> Self {
        let doc = Self::default();
        doc.set_location(path);
        doc
    }

    pub fn set_location(&self, path: &str) {
        *self.inner.location.borrow_mut() = path.to_string();
    }

    /// Append `element` at the end of the document and return it.
    pub fn append(&self, element: MemoryElement) -> MemoryElement {
        element.0.borrow_mut().owner = Rc::downgrade(&self.inner);
        self.inner.elements.borrow_mut().push(element.clone());
        element
    }

    pub fn len(&self) -> usize {
        self.inner.elements.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Simulate a click. Returns whether a handler prevented the default.
    pub fn click(&self, target: &MemoryElement) -> bool {
        self.dispatch(Some(target), UiEvent::click())
    }

    /// Simulate a keydown on `target`, bubbling to the document.
    pub fn key_down(&self, target: &MemoryElement, key: &str, shift: bool) -> bool {
        self.dispatch(Some(target), UiEvent::key_down(key, shift))
    }

    /// Simulate a keydown with no focused target.
    pub fn key_down_document(&self, key: &str, shift: bool) -> bool {
        self.dispatch(None, UiEvent::key_down(key, shift))
    }

    /// Set a form value and fire `input`.
    pub fn input(&self, target: &MemoryElement, value: &str) -> bool {
        target.set_value(value);
        self.dispatch(Some(target), UiEvent::input())
    }

    /// Run element listeners for `event`, then document listeners.
    pub fn dispatch(&self, target: Option<&MemoryElement>, event: UiEvent) -> bool {
        let handlers: Vec<Handler> = {
            let listeners = self.inner.listeners.borrow();
            let on_target = listeners
                .iter()
                .filter(|l| l.kind == event.kind() && l.target.is_some() && l.target.as_ref() == target);
            let on_document = listeners
                .iter()
                .filter(|l| l.kind == event.kind() && l.target.is_none());
            on_target.chain(on_document).map(|l| l.handler.clone()).collect()
        };
        for handler in handlers {
            handler(&event);
        }
        event.default_prevented()
    }

    /// Bring `target` into view, firing and dropping its visibility watchers.
    pub fn reveal(&self, target: &MemoryElement) -> bool {
        let fired: Vec<Watcher> = {
            let mut watchers = self.inner.watchers.borrow_mut();
            let (fired, kept) = watchers.drain(..).partition(|w| &w.target == target);
            *watchers = kept;
            fired
        };
        for watcher in &fired {
            (watcher.on_visible)(&watcher.target);
        }
        !fired.is_empty()
    }

    /// Pretend the host has no visibility observer.
    pub fn disable_visibility_observer(&self) {
        self.inner.no_observer.set(true);
    }

    pub fn focused(&self) -> Option<MemoryElement> {
        self.inner.focused.borrow().clone()
    }

    /// Notifications emitted so far, oldest first.
    pub fn notifications(&self) -> Vec<Notification> {
        self.inner.notifications.borrow().clone()
    }

    /// Drain recorded notifications.
    pub fn take_notifications(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.inner.notifications.borrow_mut())
    }

    pub fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }

    pub fn watcher_count(&self) -> usize {
        self.inner.watchers.borrow().len()
    }

    /// Visibility observers created so far.
    pub fn observer_count(&self) -> usize {
        self.inner.observers.get()
    }

    /// Run `hook` synchronously for every later notification, like a page
    /// script listening for `pf:*` events.
    pub fn on_notification(&self, hook: impl Fn(&Notification) + 'static) {
        self.inner.notification_hooks.borrow_mut().push(Rc::new(hook));
    }

    /// Targets passed to [`Surface::navigate`], in order.
    pub fn navigations(&self) -> Vec<String> {
        self.inner.navigations.borrow().clone()
    }
}

impl Surface for MemoryDocument {
    type Element = MemoryElement;

    fn query(&self, hook: Hook) -> Option<MemoryElement> {
        self.inner.elements.borrow().iter().find(|e| e.matches(hook)).cloned()
    }

    fn query_all(&self, hook: Hook) -> Vec<MemoryElement> {
        self.inner
            .elements
            .borrow()
            .iter()
            .filter(|e| e.matches(hook))
            .cloned()
            .collect()
    }

    fn by_id(&self, id: &str) -> Option<MemoryElement> {
        if id.is_empty() {
            return None;
        }
        self.inner.elements.borrow().iter().find(|e| e.id() == id).cloned()
    }

    fn location_path(&self) -> String {
        self.inner.location.borrow().clone()
    }

    fn navigate(&self, href: &str) {
        self.inner.navigations.borrow_mut().push(href.to_string());
    }

    fn active_element(&self) -> Option<MemoryElement> {
        self.focused()
    }

    fn emit(&self, notification: &Notification) {
        self.inner.notifications.borrow_mut().push(notification.clone());
        let hooks: Vec<_> = self.inner.notification_hooks.borrow().clone();
        for hook in hooks {
            hook(notification);
        }
    }

    fn listen(&self, target: &MemoryElement, kind: EventKind, handler: Handler) {
        self.inner.listeners.borrow_mut().push(Listener {
            target: Some(target.clone()),
            kind,
            handler,
        });
    }

    fn listen_document(&self, kind: EventKind, handler: Handler) {
        self.inner.listeners.borrow_mut().push(Listener {
            target: None,
            kind,
            handler,
        });
    }

    fn observe_visible(&self, targets: &[MemoryElement], on_visible: Rc<dyn Fn(&MemoryElement)>) -> usize {
        if targets.is_empty() || self.inner.no_observer.get() {
            return 0;
        }
        self.inner.observers.set(self.inner.observers.get() + 1);
        self.inner.watchers.borrow_mut().extend(targets.iter().map(|target| Watcher {
            target: target.clone(),
            on_visible: on_visible.clone(),
        }));
        targets.len()
    }
}
