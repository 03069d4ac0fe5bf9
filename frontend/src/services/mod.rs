//! Site behaviour services.
//!
//! Each service is a set of plain functions (or, for the export flow, a
//! small stateful simulator) over a [`crate::dom::Surface`].
//!
//! # Services
//!
//! - [`nav`] - active navigation resolution
//! - [`export`] - simulated export progress modal
//! - [`menu`] - mobile menu open/close
//! - [`toggles`] - tiles, character cards, pills, sliders, `pf-card`s
//! - [`a11y`] - Tab focus trap and lazy images

pub mod a11y;
pub mod export;
pub mod menu;
pub mod nav;
pub mod toggles;

pub use export::ExportProgressSimulator;
pub use toggles::activate_card;
