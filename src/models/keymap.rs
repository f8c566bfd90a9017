//! Fixed-shape label grid and the reshaping of flat binding lists into it.
//!
//! Every layer is stored as a 5×12 grid no matter which physical variant the
//! source describes, so renderers only ever deal with one addressing scheme.

use crate::constants::{
    EMPTY_KEY, FULL_KEY_COUNT, GRID_COLS, GRID_ROWS, REDUCED_KEY_COUNT, THUMB_COLUMNS, THUMB_ROW,
};
use crate::models::Position;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Physical variant detected from a binding count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutVariant {
    /// 42 keys: three rows of 12 plus 6 thumb keys
    Reduced,
    /// 60 keys: five rows of 12
    Full,
    /// Any other count, chunked row by row
    Irregular,
}

impl LayoutVariant {
    /// Classifies a binding count.
    #[must_use]
    pub const fn from_count(count: usize) -> Self {
        match count {
            REDUCED_KEY_COUNT => Self::Reduced,
            FULL_KEY_COUNT => Self::Full,
            _ => Self::Irregular,
        }
    }
}

/// Grid positions for each index of a flat binding list of `count` entries.
///
/// Indices that do not fit in the grid (beyond 60 on an irregular layout)
/// have no position and are left out, so the result may be shorter than `count`.
#[must_use]
pub fn positions_for(count: usize) -> Vec<Position> {
    match LayoutVariant::from_count(count) {
        LayoutVariant::Reduced => {
            let main_keys = THUMB_ROW * GRID_COLS;
            (0..main_keys)
                .map(|idx| Position::new(idx / GRID_COLS, idx % GRID_COLS))
                .chain(THUMB_COLUMNS.iter().map(|&col| Position::new(THUMB_ROW, col)))
                .collect()
        }
        LayoutVariant::Full | LayoutVariant::Irregular => (0..count.min(FULL_KEY_COUNT))
            .map(|idx| Position::new(idx / GRID_COLS, idx % GRID_COLS))
            .collect(),
    }
}

/// A 5×12 grid of display labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keymap {
    rows: Vec<Vec<String>>,
}

impl Default for Keymap {
    fn default() -> Self {
        Self::empty()
    }
}

impl Keymap {
    /// Creates a grid where every position holds the empty-key marker.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            rows: vec![vec![EMPTY_KEY.to_string(); GRID_COLS]; GRID_ROWS],
        }
    }

    /// Reshapes a flat, ordered list of labels into the fixed grid.
    ///
    /// - 42 labels: rows 0-2 are direct slices, the 6 thumb labels go to
    ///   row 3 columns 2,3,4,7,8,9, row 4 stays empty.
    /// - 60 labels: five direct slices.
    /// - Anything else: chunked into rows of 12 and padded with empty markers.
    ///   Labels past the 60th are dropped. A warning is logged.
    #[must_use]
    pub fn reshape<S: AsRef<str>>(labels: &[S]) -> Self {
        let variant = LayoutVariant::from_count(labels.len());
        if variant == LayoutVariant::Irregular {
            warn!(
                "Unexpected binding count {} (expected {} or {}), filling grid row by row",
                labels.len(),
                REDUCED_KEY_COUNT,
                FULL_KEY_COUNT
            );
            if labels.len() > FULL_KEY_COUNT {
                warn!(
                    "Dropping {} bindings that do not fit a {}x{} grid",
                    labels.len() - FULL_KEY_COUNT,
                    GRID_ROWS,
                    GRID_COLS
                );
            }
        }

        let mut keymap = Self::empty();
        for (position, label) in positions_for(labels.len()).into_iter().zip(labels) {
            keymap.rows[position.row][position.col] = label.as_ref().to_string();
        }
        keymap
    }

    /// Returns the label at a position, or `None` when out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row)?.get(col).map(String::as_str)
    }

    /// Replaces the label at a position, returning the previous label.
    ///
    /// Returns `None` without mutating when the position is out of bounds.
    pub fn set(&mut self, row: usize, col: usize, label: impl Into<String>) -> Option<String> {
        let cell = self.rows.get_mut(row)?.get_mut(col)?;
        Some(std::mem::replace(cell, label.into()))
    }

    /// All rows, top to bottom.
    #[must_use]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Labels of the left half (columns 0-5) of a row.
    #[must_use]
    pub fn left_half(&self, row: usize) -> Option<&[String]> {
        self.rows.get(row).map(|r| &r[..GRID_COLS / 2])
    }

    /// Labels of the right half (columns 6-11) of a row.
    #[must_use]
    pub fn right_half(&self, row: usize) -> Option<&[String]> {
        self.rows.get(row).map(|r| &r[GRID_COLS / 2..])
    }
}
