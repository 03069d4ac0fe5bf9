//! Layout template cards (`pf-card`) with quick-pick proxies.

use leptos::*;

/// Page layout templates: (card id, name, panel count).
const TEMPLATES: [(&str, &str, u8); 4] = [
    ("c1", "Classic grid", 6),
    ("c2", "Splash page", 1),
    ("c3", "Widescreen strip", 3),
    ("c4", "Manga flow", 5),
];

#[component]
pub fn CardGrid() -> impl IntoView {
    let cards = TEMPLATES
        .iter()
        .map(|(id, name, panels)| {
            view! {
                <div class="pf-card" data-card-id=*id role="button" tabindex="0" aria-pressed="false">
                    <h3>{*name}</h3>
                    <span class="pf-card-meta">{format!("{} panels", panels)}</span>
                </div>
            }
        })
        .collect_view();

    let picks = TEMPLATES
        .iter()
        .map(|(id, name, _)| {
            view! {
                <button type="button" class="pf-card-select" data-target-card-id=*id>
                    {*name}
                </button>
            }
        })
        .collect_view();

    view! {
        <section class="pf-card-section">
            <h2>"Choose a layout"</h2>
            <div class="pf-card-grid">{cards}</div>
            <div class="pf-card-picks" aria-label="Quick pick">{picks}</div>
        </section>
    }
}
