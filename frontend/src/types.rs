//! Common types used across the behaviour layer.
//!
//! # Categories
//!
//! - **Navigation Types** - [`NavKey`]
//! - **Notification Types** - outward `pf:*` events
//! - **Export Types** - simulator phase
//! - **Error Types** - init failures

use serde::Serialize;
use serde_json::{json, Value};
use std::fmt;

// =============================================================================
// Navigation Types
// =============================================================================

/// Normalized identifier of a navigation destination.
///
/// Taken from a link's `data-nav-key`, or derived from the trailing
/// segment of its `href` cut at the first `.`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct NavKey(String);

impl NavKey {
    /// Wrap an explicit key.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Derive a key from an `href`: `pages/create.html` -> `create`.
    pub fn from_href(href: &str) -> Self {
        let file = href.rsplit('/').next().unwrap_or_default();
        Self::from_file(file)
    }

    /// Cut a file name at its first `.`: `create.html` -> `create`.
    pub fn from_file(file: &str) -> Self {
        Self(file.split('.').next().unwrap_or_default().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for NavKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for NavKey {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for NavKey {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

// =============================================================================
// Notification Types
// =============================================================================

/// Outward notification emitted on the root's event stream.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notification {
    /// A navigation link became active.
    NavActivated { key: NavKey },
    /// A `pf-card` became the active card.
    CardActivated { card_id: String },
    /// The export modal opened and a simulation began.
    ExportStart,
    /// One simulation tick landed.
    ExportProgress { percent: u8 },
    /// The simulation reached 100%.
    ExportComplete,
    /// The export modal was closed.
    ExportClosed,
}

impl Notification {
    /// DOM event name (`pf:*`).
    pub fn event_name(&self) -> &'static str {
        match self {
            Notification::NavActivated { .. } => "pf:nav:activated",
            Notification::CardActivated { .. } => "pf:card:activated",
            Notification::ExportStart => "pf:export:start",
            Notification::ExportProgress { .. } => "pf:export:progress",
            Notification::ExportComplete => "pf:export:complete",
            Notification::ExportClosed => "pf:export:closed",
        }
    }

    /// Event detail payload.
    pub fn detail(&self) -> Value {
        match self {
            Notification::NavActivated { key } => json!({ "key": key.as_str() }),
            Notification::CardActivated { card_id } => json!({ "cardId": card_id }),
            Notification::ExportProgress { percent } => json!({ "percent": percent }),
            Notification::ExportStart
            | Notification::ExportComplete
            | Notification::ExportClosed => json!({}),
        }
    }
}

// =============================================================================
// Export Types
// =============================================================================

/// Phase of the export simulation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExportPhase {
    /// Modal closed, no timer.
    #[default]
    Idle,
    /// Modal open, timer running.
    Exporting,
    /// Reached 100%, timer cancelled, modal still open.
    Complete,
}

// =============================================================================
// Error Types
// =============================================================================

/// Behaviour layer errors.
///
/// Only initialization can fail; everything else reports a missing
/// element through its return value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppError {
    /// A landmark required before binding is missing.
    MissingLandmark(&'static str),
    /// No app has been booted on this page.
    NotBooted,
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::MissingLandmark(what) => {
                write!(f, "PanelForge init aborted: missing {}", what)
            }
            AppError::NotBooted => write!(f, "PanelForge app has not been booted"),
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for behaviour layer operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_key_from_href() {
        assert_eq!(NavKey::from_href("create.html"), "create");
        assert_eq!(NavKey::from_href("/site/pages/gallery.html"), "gallery");
        assert_eq!(NavKey::from_href("archive.tar.gz"), "archive");
        assert_eq!(NavKey::from_href("about"), "about");
        assert_eq!(NavKey::from_href("/site/"), "");
        assert_eq!(NavKey::from_href(""), "");
    }

    #[test]
    fn test_notification_details() {
        let card = Notification::CardActivated { card_id: "c2".into() };
        assert_eq!(card.event_name(), "pf:card:activated");
        assert_eq!(card.detail(), json!({ "cardId": "c2" }));

        let progress = Notification::ExportProgress { percent: 42 };
        assert_eq!(progress.detail()["percent"], 42);

        let nav = Notification::NavActivated { key: NavKey::new("home") };
        assert_eq!(nav.detail(), json!({ "key": "home" }));
        assert_eq!(Notification::ExportClosed.detail(), json!({}));
    }

    #[test]
    fn test_error_format() {
        let err = AppError::MissingLandmark("header");
        assert!(err.to_string().contains("header"));
    }
}
