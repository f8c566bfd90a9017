//! Layer and grid position data structures.

use crate::constants::{GRID_COLS, GRID_ROWS};
use crate::keycode_db;
use crate::models::Keymap;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Position in the uniform 5×12 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    /// Grid row (0-4)
    pub row: usize,
    /// Grid column (0-11, 0-5 left half, 6-11 right half)
    pub col: usize,
}

impl Position {
    /// Creates a new Position with the given row and column.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Checks that the position lies inside the fixed grid.
    #[must_use]
    pub const fn is_in_grid(&self) -> bool {
        self.row < GRID_ROWS && self.col < GRID_COLS
    }

    /// Returns the `"row:col"` key used by position-keyed tables.
    #[must_use]
    pub fn key(&self) -> String {
        format!("{}:{}", self.row, self.col)
    }

    /// Parses a `"row:col"` key.
    pub fn from_key(key: &str) -> Result<Self> {
        let (row, col) = key
            .split_once(':')
            .with_context(|| format!("Invalid position key '{key}', expected \"row:col\""))?;
        let row = row
            .trim()
            .parse()
            .with_context(|| format!("Invalid row in position key '{key}'"))?;
        let col = col
            .trim()
            .parse()
            .with_context(|| format!("Invalid column in position key '{key}'"))?;
        Ok(Self::new(row, col))
    }
}

/// A single keyboard layer as loaded from configuration source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layer {
    /// Identifier from the source block (e.g. "default", "lower")
    pub name: String,
    /// Human-readable name; the uppercased identifier when the source declares none
    pub display_name: String,
    /// Raw directive strings in source order, before translation
    pub raw_bindings: Vec<String>,
    /// Translated labels in the fixed grid
    pub keymap: Keymap,
}

impl Layer {
    /// Builds a layer from its raw bindings, translating and reshaping them.
    ///
    /// # Examples
    ///
    /// ```
    /// use keyviz::models::Layer;
    ///
    /// let layer = Layer::new("lower", None, vec!["&kp Q".into(), "&mo 1".into()]);
    /// assert_eq!(layer.display_name, "LOWER");
    /// assert_eq!(layer.keymap.get(0, 1), Some("L1"));
    /// ```
    pub fn new(
        name: impl Into<String>,
        display_name: Option<String>,
        raw_bindings: Vec<String>,
    ) -> Self {
        let name = name.into();
        let display_name = display_name
            .filter(|d| !d.trim().is_empty())
            .unwrap_or_else(|| name.to_uppercase());
        let labels: Vec<String> = raw_bindings
            .iter()
            .map(|binding| keycode_db::translate(binding))
            .collect();
        let keymap = Keymap::reshape(&labels);

        Self {
            name,
            display_name,
            raw_bindings,
            keymap,
        }
    }

    /// Gets the label at a grid position.
    #[must_use]
    pub fn label_at(&self, position: Position) -> Option<&str> {
        self.keymap.get(position.row, position.col)
    }
}
