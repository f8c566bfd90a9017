//! Layer store: the loaded layers plus user edits and color overrides.
//!
//! One explicitly constructed store is shared by reference with whatever
//! renders or edits the keyboard. Loading replaces the whole layer
//! collection in one step; a failed load leaves the store untouched.

use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use tracing::{info, warn};

use crate::constants::DEFAULT_KEY_COLOR;
use crate::models::{Layer, Position, RgbColor};
use crate::parser;

/// Built-in 42-key layout used when no configuration can be loaded.
pub const DEFAULT_KEYMAP: &str = include_str!("default.keymap");

/// Summary of a successful load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadSummary {
    /// Layer names in source order
    pub layers: Vec<String>,
    /// First layer in source, which becomes the active layer
    pub default_layer: String,
}

/// A tracked label edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CellEdit {
    /// Label before the first edit of this cell
    pub original: String,
    /// Current label
    pub current: String,
}

/// Owned application state for loaded layers.
#[derive(Debug, Clone)]
pub struct LayerStore {
    layers: Vec<Layer>,
    active: Option<String>,
    /// Keyed by `"{layer}:{row}:{col}"`
    modifications: HashMap<String, CellEdit>,
    /// Keyed by `"{row}:{col}"`, shared by every layer
    color_overrides: HashMap<String, RgbColor>,
    /// Reported for positions without an override
    default_color: RgbColor,
}

impl Default for LayerStore {
    fn default() -> Self {
        Self {
            layers: Vec::new(),
            active: None,
            modifications: HashMap::new(),
            color_overrides: HashMap::new(),
            default_color: DEFAULT_KEY_COLOR,
        }
    }
}

fn cell_key(layer: &str, row: usize, col: usize) -> String {
    format!("{layer}:{row}:{col}")
}

impl LayerStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the color reported for positions without an override.
    #[must_use]
    pub fn with_default_color(mut self, color: RgbColor) -> Self {
        self.default_color = color;
        self
    }

    /// Parses keymap source and replaces the layer collection.
    ///
    /// On success the first layer becomes active and label edits are
    /// discarded; color overrides are kept. When the source holds no layers
    /// an error is returned and nothing changes.
    ///
    /// # Examples
    ///
    /// ```
    /// use keyviz::services::LayerStore;
    ///
    /// let mut store = LayerStore::new();
    /// let summary = store.load("base_layer { bindings = <&kp A>; };\n").unwrap();
    /// assert_eq!(summary.default_layer, "base");
    /// assert!(store.load("nothing here").is_err());
    /// assert_eq!(store.layer_names(), vec!["base"]);
    /// ```
    pub fn load(&mut self, source: &str) -> Result<LoadSummary> {
        let layers = parser::parse_keymap_str(source);
        let Some(first) = layers.first() else {
            anyhow::bail!("No layer blocks found in keymap source");
        };

        let summary = LoadSummary {
            layers: layers.iter().map(|l| l.name.clone()).collect(),
            default_layer: first.name.clone(),
        };

        self.layers = layers;
        self.active = Some(summary.default_layer.clone());
        self.modifications.clear();

        info!(
            "Loaded {} layers (default '{}')",
            summary.layers.len(),
            summary.default_layer
        );
        Ok(summary)
    }

    /// Reads a keymap file and loads it.
    pub fn load_file(&mut self, path: &Path) -> Result<LoadSummary> {
        let source = parser::keymap::read_keymap_file(path)?;
        self.load(&source)
            .with_context(|| format!("Failed to load keymap from {}", path.display()))
    }

    /// Loads a keymap file, falling back to the built-in layout on failure.
    ///
    /// Returns the summary and, when the fallback was used, the error that caused it.
    pub fn load_file_or_default(&mut self, path: &Path) -> (LoadSummary, Option<anyhow::Error>) {
        match self.load_file(path) {
            Ok(summary) => (summary, None),
            Err(err) => {
                warn!("{:#}; using built-in default layout", err);
                (self.load_default(), Some(err))
            }
        }
    }

    /// Loads the built-in default layout.
    pub fn load_default(&mut self) -> LoadSummary {
        let layers = parser::parse_keymap_str(DEFAULT_KEYMAP);
        let summary = LoadSummary {
            layers: layers.iter().map(|l| l.name.clone()).collect(),
            default_layer: layers.first().map(|l| l.name.clone()).unwrap_or_default(),
        };
        self.layers = layers;
        self.active = summary.layers.first().cloned();
        self.modifications.clear();
        summary
    }

    /// All layers in source order.
    #[must_use]
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Layer names in source order.
    #[must_use]
    pub fn layer_names(&self) -> Vec<&str> {
        self.layers.iter().map(|l| l.name.as_str()).collect()
    }

    /// Gets a layer by name.
    #[must_use]
    pub fn get_layer(&self, name: &str) -> Option<&Layer> {
        self.layers.iter().find(|l| l.name == name)
    }

    /// Makes a layer the active one. Returns false for unknown names.
    pub fn switch_active(&mut self, name: &str) -> bool {
        if self.get_layer(name).is_none() {
            return false;
        }
        self.active = Some(name.to_string());
        true
    }

    /// Currently active layer.
    #[must_use]
    pub fn active_layer(&self) -> Option<&Layer> {
        self.active.as_deref().and_then(|name| self.get_layer(name))
    }

    /// Replaces one cell's label in one layer.
    ///
    /// Returns false without mutating when the layer is unknown or the
    /// position is outside the 5×12 grid.
    pub fn update_cell(&mut self, layer_name: &str, row: usize, col: usize, label: &str) -> bool {
        if !Position::new(row, col).is_in_grid() {
            return false;
        }
        let Some(layer) = self.layers.iter_mut().find(|l| l.name == layer_name) else {
            return false;
        };
        let Some(previous) = layer.keymap.set(row, col, label) else {
            return false;
        };

        self.modifications
            .entry(cell_key(layer_name, row, col))
            .and_modify(|edit| edit.current = label.to_string())
            .or_insert_with(|| CellEdit {
                original: previous,
                current: label.to_string(),
            });
        true
    }

    /// Restores a cell to its label before any edit. Returns false if it was not modified.
    pub fn revert_cell(&mut self, layer_name: &str, row: usize, col: usize) -> bool {
        let Some(edit) = self.modifications.remove(&cell_key(layer_name, row, col)) else {
            return false;
        };
        if let Some(layer) = self.layers.iter_mut().find(|l| l.name == layer_name) {
            let _ = layer.keymap.set(row, col, edit.original);
        }
        true
    }

    /// Checks whether a cell has been edited since the last load.
    #[must_use]
    pub fn is_cell_modified(&self, layer_name: &str, row: usize, col: usize) -> bool {
        self.modifications.contains_key(&cell_key(layer_name, row, col))
    }

    /// Label a cell had before it was first edited.
    #[must_use]
    pub fn original_value(&self, layer_name: &str, row: usize, col: usize) -> Option<&str> {
        self.modifications
            .get(&cell_key(layer_name, row, col))
            .map(|edit| edit.original.as_str())
    }

    /// Edited positions of a layer, sorted.
    #[must_use]
    pub fn modified_cells(&self, layer_name: &str) -> Vec<Position> {
        let prefix = format!("{layer_name}:");
        let mut cells: Vec<Position> = self
            .modifications
            .keys()
            .filter_map(|key| key.strip_prefix(&prefix))
            .filter_map(|rest| Position::from_key(rest).ok())
            .collect();
        cells.sort();
        cells
    }

    /// Sets the color of a position in every layer. Returns false when out of bounds.
    pub fn set_color_override(&mut self, row: usize, col: usize, color: RgbColor) -> bool {
        let position = Position::new(row, col);
        if !position.is_in_grid() {
            return false;
        }
        self.color_overrides.insert(position.key(), color);
        true
    }

    /// Removes the color override of a position. Returns false when out of bounds.
    pub fn clear_color_override(&mut self, row: usize, col: usize) -> bool {
        let position = Position::new(row, col);
        if !position.is_in_grid() {
            return false;
        }
        self.color_overrides.remove(&position.key());
        true
    }

    /// Color of a position: its override, or the default key color.
    #[must_use]
    pub fn get_color_override(&self, row: usize, col: usize) -> RgbColor {
        self.color_override(row, col).unwrap_or(self.default_color)
    }

    /// Override of a position, if one is set.
    #[must_use]
    pub fn color_override(&self, row: usize, col: usize) -> Option<RgbColor> {
        self.color_overrides
            .get(&Position::new(row, col).key())
            .copied()
    }

    /// All overrides keyed by `"row:col"`, sorted by key.
    #[must_use]
    pub fn color_overrides(&self) -> BTreeMap<String, RgbColor> {
        self.color_overrides
            .iter()
            .map(|(k, v)| (k.clone(), *v))
            .collect()
    }

    /// Replaces all overrides, skipping positions outside the grid.
    ///
    /// Returns the number of overrides kept.
    pub fn replace_color_overrides(&mut self, overrides: HashMap<Position, RgbColor>) -> usize {
        self.color_overrides = overrides
            .into_iter()
            .filter(|(position, _)| {
                let keep = position.is_in_grid();
                if !keep {
                    warn!("Ignoring color override outside the grid at {}", position.key());
                }
                keep
            })
            .map(|(position, color)| (position.key(), color))
            .collect();
        self.color_overrides.len()
    }
}
