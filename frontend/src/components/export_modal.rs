//! Export progress modal.
//!
//! The markup is driven by the behaviour layer (`is-open`, `is-exporting`,
//! `is-complete`); the bar itself follows `pf:export:*` notifications.

use leptos::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::Notification;

/// Subscribe to a document event for the page lifetime.
fn on_document_event(name: &str, handler: impl Fn(web_sys::Event) + 'static) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn Fn(web_sys::Event)>);
    if let Err(e) = gloo_utils::document().add_event_listener_with_callback(name, closure.as_ref().unchecked_ref()) {
        log::warn!("Failed to subscribe to {}: {:?}", name, e);
    }
    closure.forget();
}

/// `percent` from a `pf:export:progress` detail.
fn progress_percent(event: &web_sys::Event) -> Option<u8> {
    let detail = event.dyn_ref::<web_sys::CustomEvent>()?.detail();
    let percent = js_sys::Reflect::get(&detail, &JsValue::from_str("percent")).ok()?.as_f64()?;
    Some(percent.clamp(0.0, 100.0) as u8)
}

#[component]
pub fn ExportModal() -> impl IntoView {
    let (percent, set_percent) = create_signal(0u8);

    on_document_event(Notification::ExportProgress { percent: 0 }.event_name(), move |ev| {
        if let Some(p) = progress_percent(&ev) {
            set_percent.set(p);
        }
    });
    for reset in [Notification::ExportStart, Notification::ExportClosed] {
        on_document_event(reset.event_name(), move |_| set_percent.set(0));
    }

    view! {
        <div
            id="pf-export-modal"
            class="pf-modal"
            role="dialog"
            aria-hidden="true"
            aria-labelledby="pf-export-title"
        >
            <div class="pf-modal-body">
                <h2 id="pf-export-title">"Exporting your comic"</h2>
                <div class="progress-bar">
                    <div class="progress-fill" style=move || format!("width: {}%;", percent.get())></div>
                </div>
                <p class="pf-export-percent">{move || format!("{}%", percent.get())}</p>
                <p class="pf-export-done">"Export ready. This is a demo, so no file was written."</p>
                <button type="button" class="pf-export-close">"Close"</button>
            </div>
        </div>
    }
}
