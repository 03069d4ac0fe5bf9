//! Landing hero: pitch, the three steps of a comic and the create CTA.

use leptos::*;

/// (step number, title, blurb)
const STEPS: [(u8, &str, &str); 3] = [
    (1, "Sketch", "Upload up to three rough sketches or photos."),
    (2, "Cast", "Pick the characters that appear in your panels."),
    (3, "Style", "Choose a look and tune panels, gutter and ink."),
];

#[component]
pub fn Hero() -> impl IntoView {
    let steps = STEPS
        .iter()
        .map(|(n, title, blurb)| {
            view! {
                <li class="hero-step">
                    <span class="hero-step-number">{*n}</span>
                    <strong>{*title}</strong>
                    <span class="hero-step-blurb">{*blurb}</span>
                </li>
            }
        })
        .collect_view();

    view! {
        <section class="hero" aria-labelledby="hero-title">
            <h1 id="hero-title">"Turn sketches into finished comic pages"</h1>
            <p class="subtitle">"PanelForge lays out your story panel by panel, then exports a print-ready page."</p>
            <ol class="hero-steps">{steps}</ol>
            <div class="hero-actions">
                <a href="create.html" class="hero-cta" data-cta="create">"Start creating"</a>
                <a href="gallery.html" class="hero-secondary" rel="external">"Browse the gallery"</a>
            </div>
        </section>
    }
}
