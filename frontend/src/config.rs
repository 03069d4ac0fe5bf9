//! Application configuration.
//!
//! Centralized constants for the PanelForge behaviour layer plus the
//! injected [`Config`]. Nothing in the behaviour modules looks at the
//! hostname or other ambient state; the browser entry point builds a
//! `Config` once and hands it in.

/// Canonical home navigation key.
///
/// Used when no key is requested and when the current filename is empty.
pub const HOME_KEY: &str = "index";

/// Canonical home file name.
pub const HOME_FILE: &str = "index.html";

/// Destination of the hero call-to-action.
pub const CREATE_PAGE: &str = "create.html";

/// Period of one export simulation tick (in milliseconds).
pub const TICK_PERIOD_MS: u32 = 400;

/// Smallest random progress step per tick.
pub const STEP_MIN: u8 = 5;

/// Largest random progress step per tick.
pub const STEP_MAX: u8 = 19;

/// Id of the export modal.
pub const EXPORT_MODAL_ID: &str = "pf-export-modal";

/// Id of the mobile menu panel.
pub const MOBILE_MENU_ID: &str = "pf-mobile-menu";

/// Hostnames treated as local development.
pub const DEV_HOSTS: [&str; 2] = ["localhost", "127.0.0.1"];

/// Runtime configuration injected into [`crate::App`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Emit init diagnostics (warnings on aborted init, info on success).
    pub verbose: bool,
    /// Export tick period in milliseconds.
    pub tick_period_ms: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            verbose: false,
            tick_period_ms: TICK_PERIOD_MS,
        }
    }
}

impl Config {
    /// Verbose configuration, as used on a local development host.
    pub fn verbose() -> Self {
        Self {
            verbose: true,
            ..Self::default()
        }
    }

    /// Derive the configuration for a page served from `hostname`.
    pub fn for_host(hostname: &str) -> Self {
        if DEV_HOSTS.contains(&hostname) {
            Self::verbose()
        } else {
            Self::default()
        }
    }

    /// Console log level matching the verbosity.
    pub fn log_level(&self) -> log::Level {
        if self.verbose {
            log::Level::Debug
        } else {
            log::Level::Warn
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dev_hosts_are_verbose() {
        assert!(Config::for_host("localhost").verbose);
        assert!(Config::for_host("127.0.0.1").verbose);
        assert!(!Config::for_host("panelforge.app").verbose);
    }

    #[test]
    fn test_log_level_follows_verbosity() {
        assert_eq!(Config::default().log_level(), log::Level::Warn);
        assert_eq!(Config::verbose().log_level(), log::Level::Debug);
        assert_eq!(Config::verbose().tick_period_ms, TICK_PERIOD_MS);
    }
}
