//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name, grid dimensions and display markers.

use crate::models::RgbColor;

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "KeyViz";

/// The binary name of the application (used in command examples, lowercase with hyphens).
pub const APP_BINARY_NAME: &str = "keyviz";

/// Number of rows in every layer grid, regardless of the physical variant.
pub const GRID_ROWS: usize = 5;

/// Number of columns in every layer grid. Columns 0-5 are the left half, 6-11 the right.
pub const GRID_COLS: usize = 12;

/// Binding count of the reduced split layout (3 rows of 12 + 6 thumb keys).
pub const REDUCED_KEY_COUNT: usize = 42;

/// Binding count of the full split layout (5 rows of 12).
pub const FULL_KEY_COUNT: usize = GRID_ROWS * GRID_COLS;

/// Thumb row of the reduced layout.
pub const THUMB_ROW: usize = 3;

/// Columns of the thumb row that hold the 6 thumb keys, in binding order.
pub const THUMB_COLUMNS: [usize; 6] = [2, 3, 4, 7, 8, 9];

/// Label for a position with no action (`&none`, padding, unused positions).
pub const EMPTY_KEY: &str = "✕";

/// Label for a transparent key (falls through to the layer below).
pub const TRANSPARENT_KEY: &str = "▽";

/// Label emitted when a fallback translation leaves nothing to show.
pub const UNKNOWN_KEY: &str = "⍰";

/// Maximum number of characters kept by the fallback translation.
pub const FALLBACK_LABEL_LEN: usize = 5;

/// Prefix character of every binding directive.
pub const DIRECTIVE_SIGIL: char = '&';

/// Color reported for positions without an override.
pub const DEFAULT_KEY_COLOR: RgbColor = RgbColor::new(0x33, 0x33, 0x33);
