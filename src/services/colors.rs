//! Color override file I/O.
//!
//! Overrides are stored as a flat JSON object mapping `"row:col"` keys to
//! `"#RRGGBB"` strings, e.g. `{"1:1": "#FF0000"}`.

use anyhow::{Context, Result};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;
use tracing::info;

use crate::models::{Position, RgbColor};

/// Service for reading and writing color override files.
pub struct ColorFileService;

impl ColorFileService {
    /// Loads overrides from a JSON file. A missing file yields no overrides.
    ///
    /// # Errors
    ///
    /// Returns errors for unreadable files, invalid JSON, malformed position
    /// keys or invalid colors.
    pub fn load(path: &Path) -> Result<HashMap<Position, RgbColor>> {
        if !path.exists() {
            return Ok(HashMap::new());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read color file: {}", path.display()))?;
        let raw: BTreeMap<String, RgbColor> = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse color file: {}", path.display()))?;

        let overrides = raw
            .into_iter()
            .map(|(key, color)| Ok((Position::from_key(&key)?, color)))
            .collect::<Result<HashMap<_, _>>>()
            .with_context(|| format!("Invalid entry in color file: {}", path.display()))?;

        info!("Loaded {} key colors from {}", overrides.len(), path.display());
        Ok(overrides)
    }

    /// Saves overrides to a JSON file using atomic write.
    ///
    /// # Errors
    ///
    /// Returns errors for serialization or file I/O failures.
    pub fn save(overrides: &BTreeMap<String, RgbColor>, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create color file directory: {}", parent.display())
            })?;
        }

        let content =
            serde_json::to_string_pretty(overrides).context("Failed to serialize key colors")?;
        let temp_path = path.with_extension("json.tmp");

        fs::write(&temp_path, content).with_context(|| {
            format!("Failed to write temporary color file: {}", temp_path.display())
        })?;
        fs::rename(&temp_path, path)
            .with_context(|| format!("Failed to rename temporary file to: {}", path.display()))?;

        info!("Saved {} key colors to {}", overrides.len(), path.display());
        Ok(())
    }

    /// Deletes the color file if it exists. Returns whether a file was removed.
    ///
    /// # Errors
    ///
    /// Returns errors if the file exists but cannot be removed.
    pub fn reset(path: &Path) -> Result<bool> {
        if !path.exists() {
            return Ok(false);
        }
        fs::remove_file(path)
            .with_context(|| format!("Failed to delete color file: {}", path.display()))?;
        info!("Deleted key colors file: {}", path.display());
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::LayerStore;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let overrides = ColorFileService::load(&dir.path().join("key-colors.json")).unwrap();
        assert!(overrides.is_empty());
    }

    #[test]
    fn test_save_and_load_through_store() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("key-colors.json");

        let mut store = LayerStore::new();
        store.set_color_override(1, 1, RgbColor::new(255, 0, 0));
        store.set_color_override(3, 9, RgbColor::new(0, 0, 255));
        ColorFileService::save(&store.color_overrides(), &path).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("\"1:1\": \"#FF0000\""));

        let mut reloaded = LayerStore::new();
        reloaded.replace_color_overrides(ColorFileService::load(&path).unwrap());
        assert_eq!(reloaded.color_overrides(), store.color_overrides());
    }

    #[test]
    fn test_invalid_entries_are_errors() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("key-colors.json");

        fs::write(&path, r##"{"1-1": "#FF0000"}"##).unwrap();
        assert!(ColorFileService::load(&path).is_err());

        fs::write(&path, r#"{"1:1": "red"}"#).unwrap();
        assert!(ColorFileService::load(&path).is_err());

        fs::write(&path, "not json").unwrap();
        assert!(ColorFileService::load(&path).is_err());
    }

    #[test]
    fn test_reset() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("key-colors.json");
        assert!(!ColorFileService::reset(&path).unwrap());

        fs::write(&path, "{}").unwrap();
        assert!(ColorFileService::reset(&path).unwrap());
        assert!(!path.exists());
    }
}
