use leptos::*;

/// Navigation entries: (nav key, href, label).
pub(crate) const NAV_ENTRIES: [(&str, &str, &str); 4] = [
    ("index", "index.html", "Home"),
    ("create", "create.html", "Create"),
    ("gallery", "gallery.html", "Gallery"),
    ("studio", "studio.html", "Studio"),
];

/// Site header with the primary navigation and the mobile menu.
///
/// Only the desktop links carry `data-pf="nav-link"`; the mobile panel
/// repeats them as plain links.
#[component]
pub fn SiteHeader() -> impl IntoView {
    let desktop = NAV_ENTRIES
        .iter()
        .map(|(key, href, label)| {
            view! {
                <a href=*href class="nav-link" data-pf="nav-link" data-nav-key=*key rel="external">
                    {*label}
                </a>
            }
        })
        .collect_view();

    let mobile = NAV_ENTRIES
        .iter()
        .map(|(_, href, label)| {
            view! { <a href=*href class="mobile-link" rel="external">{*label}</a> }
        })
        .collect_view();

    view! {
        <header>
            <div class="header-left">
                <a href="index.html" class="logo" rel="external">"PANELFORGE"</a>
                <span class="badge">"demo"</span>
            </div>
            <nav class="header-nav" aria-label="Primary">{desktop}</nav>
            <button
                type="button"
                class="pf-mobile-toggle"
                data-pf="mobile-toggle"
                aria-controls="pf-mobile-menu"
                aria-expanded="false"
            >
                "Menu"
            </button>
        </header>
        <nav id="pf-mobile-menu" class="pf-mobile-menu" aria-hidden="true" aria-label="Mobile">
            {mobile}
        </nav>
    }
}
