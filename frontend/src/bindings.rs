//! Page-level boot and the JavaScript API.
//!
//! One [`App`] per page lives in a thread-local slot for the page session.
//! The exported functions mirror the old `window.app` surface and return a
//! falsy value when nothing has been booted.

use std::cell::RefCell;

use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::config::Config;
use crate::dom::BrowserDocument;
use crate::timer::BrowserScheduler;
use crate::types::{AppError, AppResult};

type PageApp = App<BrowserDocument, BrowserScheduler>;

thread_local! {
    static PAGE: RefCell<Option<PageApp>> = const { RefCell::new(None) };
}

/// Hostname of the current page, empty when unavailable.
pub fn hostname() -> String {
    gloo_utils::window().location().hostname().unwrap_or_default()
}

/// Create the page app (once, along with lazy image loading) and run `init`.
///
/// Init failures come back as `false`; they are only logged when
/// `config.verbose` is set, so a host page never breaks.
pub fn boot(config: Config) -> bool {
    PAGE.with(|slot| {
        let created = slot.borrow().is_none();
        if created {
            *slot.borrow_mut() = Some(App::new(
                BrowserDocument::current(),
                BrowserScheduler,
                Box::new(StdRng::from_entropy()),
                config,
            ));
        }

        // Shared borrow only: `pf:*` listeners may call back into the API.
        let slot = slot.borrow();
        let Some(app) = slot.as_ref() else {
            return false;
        };

        if created {
            let watched = app.watch_lazy_images();
            log::debug!("Watching {} lazy images", watched);
        }

        // `init` already reported the failure when verbose.
        app.init().is_ok()
    })
}

fn with_app<R>(f: impl FnOnce(&PageApp) -> R) -> AppResult<R> {
    PAGE.with(|slot| slot.borrow().as_ref().map(f).ok_or(AppError::NotBooted))
}

/// `app.init()`: boot with the host-derived config.
#[wasm_bindgen(js_name = init)]
pub fn js_init() -> bool {
    boot(Config::for_host(&hostname()))
}

/// `app.highlightActiveNav(key)`
#[wasm_bindgen(js_name = highlightActiveNav)]
pub fn js_highlight_active_nav(key: Option<String>) -> Option<String> {
    with_app(|app| app.highlight_active_nav(key.as_deref()))
        .ok()
        .flatten()
        .map(|k| k.into_string())
}

/// `app.toggleMobileMenu()`: the new open state, false when unavailable.
#[wasm_bindgen(js_name = toggleMobileMenu)]
pub fn js_toggle_mobile_menu() -> bool {
    with_app(|app| app.toggle_mobile_menu()).ok().flatten().unwrap_or(false)
}

/// `app.activateCard(cardId)`
#[wasm_bindgen(js_name = activateCard)]
pub fn js_activate_card(card_id: String) -> bool {
    with_app(|app| app.activate_card(&card_id)).unwrap_or(false)
}

/// `app.showexportModal()`
#[wasm_bindgen(js_name = showexportModal)]
pub fn js_show_export_modal() -> bool {
    with_app(|app| app.show_export_modal()).unwrap_or(false)
}

/// `app.hideexportModal()`
#[wasm_bindgen(js_name = hideexportModal)]
pub fn js_hide_export_modal() -> bool {
    with_app(|app| app.hide_export_modal()).unwrap_or(false)
}
