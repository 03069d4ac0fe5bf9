//! UI Components for the PanelForge demo site.
//!
//! These render the markup the behaviour layer binds to; none of them
//! hold behaviour of their own beyond the export progress bar.
//!
//! # Layout Components
//! - [`SiteHeader`] - Navigation bar and mobile menu
//! - [`Hero`] - Title and call-to-action
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`CardGrid`] - Layout template cards with quick picks
//! - [`StudioPanel`] - Sliders and style pills
//! - [`UploadSlots`], [`CharacterCards`], [`RecentComics`] - toggle tiles
//! - [`ExportModal`] - Simulated export progress

mod cards;
mod export_modal;
mod footer;
mod header;
mod hero;
mod pages;
mod studio;

pub use cards::*;
pub use export_modal::*;
pub use footer::*;
pub use header::*;
pub use hero::*;
pub use pages::*;
pub use studio::*;
