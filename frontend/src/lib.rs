//! PanelForge - Site behaviour layer (Rust/Leptos)
//!
//! Client-side behaviour for the PanelForge demo site: active navigation
//! highlighting, the mobile menu, tile and card toggles, slider labels,
//! style pills and a simulated export progress modal. A Leptos shell
//! renders the demo pages the behaviour binds to.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Site (Leptos shell)                                         │
//! │  ├── SiteHeader (nav links, mobile menu)                     │
//! │  ├── Routes -> Home / Create / Gallery / Studio pages        │
//! │  └── Footer                                                  │
//! ├─────────────────────────────────────────────────────────────┤
//! │  App (behaviour layer)                                       │
//! │  ├── nav      - active link resolution                       │
//! │  ├── export   - simulated progress (Scheduler + RNG)         │
//! │  └── menu / toggles / a11y - event → class glue              │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Surface: BrowserDocument (web-sys) | MemoryDocument (tests) │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Constants and the injected [`Config`]
//! - [`types`] - Common types (NavKey, Notification, AppError)
//! - [`dom`] - Surface abstraction and its two implementations
//! - [`timer`] - Repeating timers (browser and manual clock)
//! - [`services`] - Behaviour services
//! - [`app`] - Integrity check and event wiring
//! - [`bindings`] - Page boot and the JavaScript API
//! - [`components`] - Demo site components

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod dom;
pub mod timer;
pub mod services;
pub mod app;
pub mod bindings;
pub mod components;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::Config;

// Types
pub use types::{
    // Navigation
    NavKey,
    // Notifications
    Notification,
    // Export
    ExportPhase,
    // Errors
    AppError, AppResult,
};

// Behaviour
pub use app::App;
pub use bindings::{boot, hostname};
pub use dom::{BrowserDocument, MemoryDocument, MemoryElement, Surface};
pub use services::ExportProgressSimulator;
pub use timer::{BrowserScheduler, ManualScheduler, Scheduler};

// Components
pub use components::*;

// =============================================================================
// Demo shell
// =============================================================================

/// Demo site: header, routed page body, footer.
///
/// Navigation links are `rel="external"`, so every page is a full load
/// and the behaviour layer re-binds on boot.
#[component]
pub fn Site() -> impl IntoView {
    provide_meta_context();

    view! {
        <Router>
            <SiteHeader/>
            <main class="container">
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route path="/index.html" view=HomePage/>
                    <Route path="/create.html" view=CreatePage/>
                    <Route path="/gallery.html" view=GalleryPage/>
                    <Route path="/studio.html" view=StudioPage/>
                    <Route path="/*any" view=HomePage/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}
