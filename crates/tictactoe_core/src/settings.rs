//! Frontend settings loaded from TOML.

use super::game::MoveOrder;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings shared by the browser and terminal frontends.
///
/// Every field has a default, so an empty file is valid.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Id of the element the browser app mounts into.
    mount_id: String,

    /// Initial order of the move list.
    order: MoveOrder,

    /// Tracing filter directive (e.g. "info", "tictactoe_core=debug").
    log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mount_id: "root".to_string(),
            order: MoveOrder::Ascending,
            log_filter: "info".to_string(),
        }
    }
}

impl Settings {
    /// Parses settings from TOML text.
    #[instrument(skip(source), fields(bytes = source.len()))]
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let settings: Self = toml::from_str(source)
            .map_err(|e| ConfigError::new(format!("Failed to parse settings: {}", e)))?;
        debug!(?settings, "Settings parsed");
        Ok(settings)
    }

    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read settings file: {}", e)))?;

        let settings = Self::from_toml_str(&content)?;
        info!(mount_id = %settings.mount_id, order = ?settings.order, "Settings loaded");
        Ok(settings)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error at the caller's location.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_source_uses_defaults() {
        let settings = Settings::from_toml_str("").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.mount_id(), "root");
    }

    #[test]
    fn test_partial_source_overrides() {
        let settings = Settings::from_toml_str("order = \"descending\"\n").unwrap();
        assert_eq!(*settings.order(), MoveOrder::Descending);
        assert_eq!(settings.log_filter(), "info");
    }

    #[test]
    fn test_bad_source_reports_location() {
        let err = Settings::from_toml_str("order = \"sideways\"").unwrap_err();
        assert!(err.message.starts_with("Failed to parse settings"));
        assert!(err.file.ends_with("settings.rs"));
    }
}
