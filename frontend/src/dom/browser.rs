//! Real DOM surface over `web-sys`.
//!
//! Listener closures and visibility observers live for the page
//! session, so their closures are leaked with `forget()` once attached.

use std::rc::Rc;

use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    CustomEvent, CustomEventInit, Document, HtmlElement, HtmlInputElement, IntersectionObserver,
    IntersectionObserverEntry, KeyboardEvent,
};

use super::{Element, EventKind, Handler, Hook, Surface, UiEvent};
use crate::types::Notification;

impl Element for web_sys::Element {
    fn id(&self) -> String {
        web_sys::Element::id(self)
    }

    fn attr(&self, name: &str) -> Option<String> {
        self.get_attribute(name)
    }

    fn set_attr(&self, name: &str, value: &str) {
        let _ = self.set_attribute(name, value);
    }

    fn remove_attr(&self, name: &str) {
        let _ = self.remove_attribute(name);
    }

    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }

    fn add_class(&self, class: &str) {
        let _ = self.class_list().add_1(class);
    }

    fn remove_class(&self, class: &str) {
        let _ = self.class_list().remove_1(class);
    }

    fn value(&self) -> String {
        match self.dyn_ref::<HtmlInputElement>() {
            Some(input) => input.value(),
            None => self.get_attribute("value").unwrap_or_default(),
        }
    }

    fn set_text(&self, text: &str) {
        self.set_text_content(Some(text));
    }

    fn focus(&self) {
        if let Some(el) = self.dyn_ref::<HtmlElement>() {
            let _ = el.focus();
        }
    }

    fn toggle_class(&self, class: &str) -> bool {
        self.class_list().toggle(class).unwrap_or(false)
    }
}

impl UiEvent {
    fn from_dom(kind: EventKind, event: &web_sys::Event) -> Self {
        match event.dyn_ref::<KeyboardEvent>() {
            Some(key) => UiEvent::new(kind, Some(key.key()), key.shift_key()),
            None => UiEvent::new(kind, None, false),
        }
    }
}

/// The page document as a [`Surface`].
#[derive(Clone)]
pub struct BrowserDocument {
    document: Document,
}

impl BrowserDocument {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// The global `window.document`.
    pub fn current() -> Self {
        Self::new(gloo_utils::document())
    }

    fn attach(target: &web_sys::EventTarget, kind: EventKind, handler: Handler) {
        let on_event = Closure::wrap(Box::new(move |event: web_sys::Event| {
            let ui = UiEvent::from_dom(kind, &event);
            handler(&ui);
            if ui.default_prevented() {
                event.prevent_default();
            }
        }) as Box<dyn FnMut(web_sys::Event)>);

        if let Err(e) = target.add_event_listener_with_callback(kind.dom_name(), on_event.as_ref().unchecked_ref()) {
            log::warn!("Failed to attach {} listener: {:?}", kind.dom_name(), e);
        }
        on_event.forget();
    }
}

impl Surface for BrowserDocument {
    type Element = web_sys::Element;

    fn query(&self, hook: Hook) -> Option<web_sys::Element> {
        self.document.query_selector(hook.selector()).ok().flatten()
    }

    fn query_all(&self, hook: Hook) -> Vec<web_sys::Element> {
        let Ok(nodes) = self.document.query_selector_all(hook.selector()) else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.get(i))
            .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
            .collect()
    }

    fn by_id(&self, id: &str) -> Option<web_sys::Element> {
        if id.is_empty() {
            return None;
        }
        self.document.get_element_by_id(id)
    }

    fn location_path(&self) -> String {
        gloo_utils::window().location().pathname().unwrap_or_default()
    }

    fn navigate(&self, href: &str) {
        if let Err(e) = gloo_utils::window().location().set_href(href) {
            log::warn!("Navigation to {} failed: {:?}", href, e);
        }
    }

    fn active_element(&self) -> Option<web_sys::Element> {
        self.document.active_element()
    }

    fn emit(&self, notification: &Notification) {
        let detail = notification
            .detail()
            .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
            .unwrap_or(JsValue::NULL);

        let init = CustomEventInit::new();
        init.set_detail(&detail);

        match CustomEvent::new_with_event_init_dict(notification.event_name(), &init) {
            Ok(event) => {
                let _ = self.document.dispatch_event(&event);
            }
            Err(e) => log::warn!("Failed to build {}: {:?}", notification.event_name(), e),
        }
    }

    fn listen(&self, target: &web_sys::Element, kind: EventKind, handler: Handler) {
        Self::attach(target, kind, handler);
    }

    fn listen_document(&self, kind: EventKind, handler: Handler) {
        Self::attach(&self.document, kind, handler);
    }

    fn observe_visible(&self, targets: &[web_sys::Element], on_visible: Rc<dyn Fn(&web_sys::Element)>) -> usize {
        if targets.is_empty() {
            return 0;
        }
        let supported = js_sys::Reflect::has(&gloo_utils::window(), &JsValue::from_str("IntersectionObserver"))
            .unwrap_or(false);
        if !supported {
            return 0;
        }

        let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let seen = entry.target();
                    on_visible(&seen);
                    observer.unobserve(&seen);
                }
            }
        }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let observer = match IntersectionObserver::new(callback.as_ref().unchecked_ref()) {
            Ok(observer) => observer,
            Err(e) => {
                log::warn!("IntersectionObserver unavailable: {:?}", e);
                return 0;
            }
        };
        for target in targets {
            observer.observe(target);
        }
        callback.forget();
        targets.len()
    }
}
