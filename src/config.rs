//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::DEFAULT_KEY_COLOR;
use crate::models::RgbColor;

/// Default file name of the color override file inside the config directory.
pub const COLORS_FILE_NAME: &str = "key-colors.json";

/// Path configuration for file system locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PathConfig {
    /// Keymap file used when a command is given no file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keymap: Option<PathBuf>,
    /// Color override file (defaults to `key-colors.json` in the config directory)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<PathBuf>,
}

/// Display preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Color reported for keys without an override
    #[serde(default = "default_key_color")]
    pub default_key_color: RgbColor,
    /// Fall back to the built-in layout when a keymap cannot be loaded
    #[serde(default = "default_fallback_to_builtin")]
    pub fallback_to_builtin: bool,
}

const fn default_key_color() -> RgbColor {
    DEFAULT_KEY_COLOR
}

const fn default_fallback_to_builtin() -> bool {
    true
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            default_key_color: default_key_color(),
            fallback_to_builtin: default_fallback_to_builtin(),
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/KeyViz/config.toml`
/// - macOS: `~/Library/Application Support/KeyViz/config.toml`
/// - Windows: `%APPDATA%\KeyViz\config.toml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// File system paths
    #[serde(default)]
    pub paths: PathConfig,
    /// Display preferences
    #[serde(default)]
    pub display: DisplayConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if the config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path()
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Gets the platform-specific config directory path.
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join("KeyViz");

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the platform config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from an explicit path, defaulting when it is missing.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the platform config file.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to an explicit path using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(dir) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create config directory: {}", dir.display()))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        let temp_path = path.with_extension("toml.tmp");

        fs::write(&temp_path, content).with_context(|| {
            format!("Failed to write temp config file: {}", temp_path.display())
        })?;

        fs::rename(&temp_path, path)
            .with_context(|| format!("Failed to rename temp config file to: {}", path.display()))?;

        Ok(())
    }

    /// Validates configuration values.
    ///
    /// Checks that a configured keymap path, if set, points at a file.
    pub fn validate(&self) -> Result<()> {
        if let Some(keymap) = &self.paths.keymap {
            if keymap.exists() && !keymap.is_file() {
                anyhow::bail!("Configured keymap path is not a file: {}", keymap.display());
            }
        }
        if let Some(colors) = &self.paths.colors {
            if colors.is_dir() {
                anyhow::bail!(
                    "Configured colors path is a directory: {}",
                    colors.display()
                );
            }
        }
        Ok(())
    }

    /// Resolves the color override file path.
    pub fn colors_file(&self) -> Result<PathBuf> {
        match &self.paths.colors {
            Some(path) => Ok(path.clone()),
            None => Ok(Self::config_dir()?.join(COLORS_FILE_NAME)),
        }
    }
}
