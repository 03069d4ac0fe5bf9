//! Entry point for the WASM application

use leptos::*;
use panelforge::{boot, hostname, Config, Site};

pub fn main() {
    console_error_panic_hook::set_once();

    let config = Config::for_host(&hostname());
    _ = console_log::init_with_level(config.log_level());

    log::info!("🦀 PanelForge - Mounting demo site");

    mount_to_body(|| view! { <Site/> });

    // The shell is mounted synchronously, so the markup is in place.
    boot(config);
}
