//! Studio controls: sliders, style pills, upload slots, characters.

use leptos::*;

/// Slider stem, label, min, max, initial value.
const SLIDERS: [(&str, &str, u8, u8, u8); 3] = [
    ("panels", "Panels", 1, 12, 6),
    ("gutter", "Gutter", 0, 40, 12),
    ("ink", "Ink weight", 1, 10, 4),
];

/// Style name and whether it is selectable yet.
const STYLES: [(&str, bool); 5] = [
    ("Manga", true),
    ("Noir", true),
    ("Pop art", true),
    ("Ligne claire", true),
    ("Watercolor", false),
];

const CHARACTERS: [&str; 3] = ["Captain Nova", "Mira", "Professor Gears"];

#[component]
pub fn StudioPanel() -> impl IntoView {
    let sliders = SLIDERS
        .iter()
        .map(|(stem, label, min, max, value)| {
            view! {
                <label class="slider-row">
                    <span>{*label}</span>
                    <input
                        type="range"
                        id=format!("{}-slider", stem)
                        min=min.to_string()
                        max=max.to_string()
                        value=value.to_string()
                    />
                    <span class="slider-value" id=format!("{}-value", stem)>{value.to_string()}</span>
                </label>
            }
        })
        .collect_view();

    let pills = STYLES
        .iter()
        .map(|(name, enabled)| {
            let class = if *enabled { "style-pill" } else { "style-pill inactive" };
            view! {
                <button type="button" class=class role="radio" aria-checked="false" disabled=!*enabled>
                    {*name}
                </button>
            }
        })
        .collect_view();

    view! {
        <section class="studio">
            <div class="studio-sliders">{sliders}</div>
            <div class="style-pills" role="radiogroup" aria-label="Art style">{pills}</div>
        </section>
    }
}

#[component]
pub fn UploadSlots() -> impl IntoView {
    let slots = (1..=3)
        .map(|n| {
            view! {
                <div class="upload-slot" data-upload-slot=n.to_string() role="button" tabindex="0">
                    {format!("Sketch {}", n)}
                </div>
            }
        })
        .collect_view();

    view! { <div class="upload-slots">{slots}</div> }
}

#[component]
pub fn CharacterCards() -> impl IntoView {
    let cards = CHARACTERS
        .iter()
        .map(|name| {
            view! {
                <div class="character-card" role="button" tabindex="0" aria-pressed="false">
                    {*name}
                </div>
            }
        })
        .collect_view();

    view! { <div class="character-cards">{cards}</div> }
}

/// Recent comics, images loaded once scrolled into view.
#[component]
pub fn RecentComics() -> impl IntoView {
    let tiles = (1..=6)
        .map(|n| {
            view! {
                <div class="recent-comic-tile" role="button" tabindex="0">
                    <img data-src=format!("img/comic-{}.webp", n) alt=format!("Comic {}", n)/>
                </div>
            }
        })
        .collect_view();

    view! {
        <section class="recent-comics">
            <h2>"Recent comics"</h2>
            <div class="comic-grid">{tiles}</div>
        </section>
    }
}

#[component]
pub fn ExportButton() -> impl IntoView {
    view! { <button type="button" class="pf-export-start primary">"Export comic"</button> }
}
