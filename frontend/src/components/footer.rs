use leptos::*;

use super::header::NAV_ENTRIES;

/// Footer with secondary links to every page except home.
#[component]
pub fn Footer() -> impl IntoView {
    let links = NAV_ENTRIES
        .iter()
        .filter(|(key, _, _)| *key != crate::config::HOME_KEY)
        .map(|(_, href, label)| view! { <a href=*href class="footer-link" rel="external">{*label}</a> })
        .collect_view();

    view! {
        <footer>
            <p class="footer-tagline">"PanelForge · sketch, cast, style, export."</p>
            <nav class="footer-links" aria-label="Footer">{links}</nav>
        </footer>
    }
}
