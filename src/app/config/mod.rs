// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Theme preference
//! - `[window]` - Initial window size
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` or set the `FOLIO_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use folio::app::config;
//! use folio::ui::theming::ThemeMode;
//!
//! let (mut config, _warning) = config::load();
//! config.general.theme = Some(ThemeMode::Light);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Warning returned by [`load`] when the file exists but cannot be parsed.
pub const CONFIG_LOAD_WARNING: &str =
    "Your settings file could not be read. Default settings are used.";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GeneralConfig {
    /// Saved theme. `None` (or `"system"` in the file) follows the OS.
    #[serde(
        default,
        deserialize_with = "deserialize_theme",
        skip_serializing_if = "Option::is_none"
    )]
    pub theme: Option<ThemeMode>,
}

/// Initial window geometry.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct WindowConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
}

impl WindowConfig {
    /// Configured size, clamped to sane bounds, or the default size.
    #[must_use]
    pub fn size(&self) -> (f32, f32) {
        let width = self
            .width
            .filter(|w| w.is_finite())
            .unwrap_or(DEFAULT_WINDOW_WIDTH)
            .clamp(MIN_WINDOW_WIDTH, MAX_WINDOW_DIMENSION);
        let height = self
            .height
            .filter(|h| h.is_finite())
            .unwrap_or(DEFAULT_WINDOW_HEIGHT)
            .clamp(MIN_WINDOW_HEIGHT, MAX_WINDOW_DIMENSION);
        (width, height)
    }
}

// =============================================================================
// Main Config Struct
// =============================================================================

/// Application configuration, one field per TOML section.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub window: WindowConfig,
}

fn deserialize_theme<'de, D>(deserializer: D) -> std::result::Result<Option<ThemeMode>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(Some(ThemeMode::Light)),
        "dark" => Ok(Some(ThemeMode::Dark)),
        "system" => Ok(None),
        other => Err(D::Error::custom(format!("invalid theme: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

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
    let Some(path) = get_config_path_with_override(base_dir) else {
        return (Config::default(), None);
    };
    if !path.exists() {
        return (Config::default(), None);
    }
    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "falling back to default settings");
            (Config::default(), Some(CONFIG_LOAD_WARNING.to_string()))
        }
    }
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
    match get_config_path_with_override(base_dir) {
        Some(path) => save_to_path(config, &path),
        None => Err(Error::Config(
            "no configuration directory available".to_string(),
        )),
    }
}

/// Saves configuration to a specific path, creating parent directories.
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
            general: GeneralConfig {
                theme: Some(ThemeMode::Light),
            },
            window: WindowConfig {
                width: Some(1024.0),
                height: Some(700.0),
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
    fn unknown_theme_is_a_config_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\ntheme = \"sepia\"\n").expect("write file");

        match load_from_path(&config_path) {
            Err(Error::Config(message)) => assert!(message.contains("invalid theme")),
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn theme_is_case_insensitive_and_system_means_unset() {
        let config: Config = toml::from_str("[general]\ntheme = \"DARK\"\n").expect("parse");
        assert_eq!(config.general.theme, Some(ThemeMode::Dark));

        let config: Config = toml::from_str("[general]\ntheme = \"system\"\n").expect("parse");
        assert_eq!(config.general.theme, None);
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.theme, None);
        assert_eq!(
            config.window.size(),
            (DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT)
        );
    }

    #[test]
    fn unset_theme_is_not_written() {
        let content = toml::to_string_pretty(&Config::default()).expect("serialize");
        assert!(!content.contains("theme"));
    }

    #[test]
    fn window_size_is_clamped() {
        let window = WindowConfig {
            width: Some(10.0),
            height: Some(f32::NAN),
        };
        assert_eq!(window.size(), (MIN_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT));
    }

    #[test]
    fn save_with_override_and_load_with_override_round_trip() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let config = Config {
            general: GeneralConfig {
                theme: Some(ThemeMode::Dark),
            },
            window: WindowConfig::default(),
        };

        save_with_override(&config, Some(base_dir.clone())).expect("save should succeed");
        assert!(base_dir.join("settings.toml").exists(), "config file should exist");

        let (loaded, warning) = load_with_override(Some(base_dir));
        assert!(warning.is_none(), "load should succeed without warning");
        assert_eq!(loaded.general.theme, Some(ThemeMode::Dark));
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none(), "should not warn for missing file");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        fs::write(base_dir.join("settings.toml"), "not = valid = toml").expect("write file");

        let (config, warning) = load_with_override(Some(base_dir));
        assert_eq!(warning.as_deref(), Some(CONFIG_LOAD_WARNING));
        assert_eq!(config, Config::default());
    }
}
