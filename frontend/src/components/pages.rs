//! Page bodies selected by the router.

use leptos::*;
use leptos_meta::*;

use super::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="PanelForge"/>
        <Hero/>
        <RecentComics/>
    }
}

#[component]
pub fn CreatePage() -> impl IntoView {
    view! {
        <Title text="Create · PanelForge"/>
        <h1>"Create"</h1>
        <UploadSlots/>
        <CharacterCards/>
        <CardGrid/>
        <ExportButton/>
        <ExportModal/>
    }
}

#[component]
pub fn GalleryPage() -> impl IntoView {
    view! {
        <Title text="Gallery · PanelForge"/>
        <RecentComics/>
        <CardGrid/>
    }
}

#[component]
pub fn StudioPage() -> impl IntoView {
    view! {
        <Title text="Studio · PanelForge"/>
        <h1>"Studio"</h1>
        <StudioPanel/>
        <ExportButton/>
        <ExportModal/>
    }
}
