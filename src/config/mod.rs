// SPDX-License-Identifier: MPL-2.0
//! This module handles the crate's configuration, loaded from and saved to a
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[notifications]` - Default duration, container id, history size
//! - `[logging]` - Tracing filter
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `NOTIFICATION_CENTER_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use notification_center::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.notifications.default_duration_ms = Some(3000);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::{Error, Result};
use crate::paths;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// Notification center settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotificationsConfig {
    /// Time-to-live applied when a caller gives none. `0` disables auto-dismiss.
    #[serde(
        default = "default_duration_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub default_duration_ms: Option<u64>,

    /// Id of the container element toasts are rendered into.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_id: Option<String>,

    /// Number of retired notifications kept in history.
    #[serde(
        default = "default_history_capacity",
        skip_serializing_if = "Option::is_none"
    )]
    pub history_capacity: Option<usize>,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            default_duration_ms: default_duration_ms(),
            container_id: None,
            history_capacity: default_history_capacity(),
        }
    }
}

impl NotificationsConfig {
    /// Resolved default duration; `None` means notifications persist.
    #[must_use]
    pub fn default_duration(&self) -> Option<Duration> {
        match self.default_duration_ms.unwrap_or(DEFAULT_DURATION_MS) {
            0 => None,
            ms => Some(Duration::from_millis(ms.min(MAX_DURATION_MS))),
        }
    }

    /// Resolved container id.
    #[must_use]
    pub fn container_id(&self) -> &str {
        self.container_id
            .as_deref()
            .filter(|id| !id.trim().is_empty())
            .unwrap_or(DEFAULT_CONTAINER_ID)
    }

    /// Resolved history capacity (unclamped).
    #[must_use]
    pub fn history_capacity(&self) -> usize {
        self.history_capacity.unwrap_or(DEFAULT_HISTORY_CAPACITY)
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive, e.g. `"notification_center=debug"`.
    /// `RUST_LOG` takes precedence when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub notifications: NotificationsConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_duration_ms() -> Option<u64> {
    Some(DEFAULT_DURATION_MS)
}

fn default_history_capacity() -> Option<usize> {
    Some(DEFAULT_HISTORY_CAPACITY)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    return (
                        Config::default(),
                        Some(format!("{}: {err}; using defaults", path.display())),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            notifications: NotificationsConfig {
                default_duration_ms: Some(2500),
                container_id: Some("admin-toasts".to_string()),
                history_capacity: Some(10),
            },
            logging: LoggingConfig {
                filter: Some("notification_center=debug".to_string()),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn load_with_override_falls_back_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[notifications]\ndefault_duration_ms = \"soon\"")
            .expect("failed to write config");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert!(warning.is_some());
    }

    #[test]
    fn load_with_override_missing_file_is_silent_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn partial_file_keeps_section_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&config_path, "[notifications]\ncontainer_id = \"toasts\"\n")
            .expect("failed to write config");

        let config = load_from_path(&config_path).expect("partial config loads");

        assert_eq!(config.notifications.container_id(), "toasts");
        assert_eq!(
            config.notifications.default_duration_ms,
            Some(DEFAULT_DURATION_MS)
        );
        assert!(config.logging.filter.is_none());
    }

    #[test]
    fn save_with_override_writes_settings_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        save_with_override(&Config::default(), Some(temp_dir.path().to_path_buf()))
            .expect("save should succeed");

        assert!(temp_dir.path().join(CONFIG_FILE).exists());
    }

    #[test]
    fn zero_default_duration_disables_auto_dismiss() {
        let config = NotificationsConfig {
            default_duration_ms: Some(0),
            ..NotificationsConfig::default()
        };
        assert_eq!(config.default_duration(), None);
    }

    #[test]
    fn oversized_default_duration_is_clamped() {
        let config = NotificationsConfig {
            default_duration_ms: Some(u64::MAX),
            ..NotificationsConfig::default()
        };
        assert_eq!(
            config.default_duration(),
            Some(Duration::from_millis(MAX_DURATION_MS))
        );
    }

    #[test]
    fn blank_container_id_uses_default() {
        let config = NotificationsConfig {
            container_id: Some("   ".to_string()),
            ..NotificationsConfig::default()
        };
        assert_eq!(config.container_id(), DEFAULT_CONTAINER_ID);
    }

    #[test]
    fn default_config_matches_constants() {
        let config = Config::default();
        assert_eq!(
            config.notifications.default_duration(),
            Some(Duration::from_millis(DEFAULT_DURATION_MS))
        );
        assert_eq!(config.notifications.container_id(), DEFAULT_CONTAINER_ID);
        assert_eq!(
            config.notifications.history_capacity(),
            DEFAULT_HISTORY_CAPACITY
        );
    }
}
