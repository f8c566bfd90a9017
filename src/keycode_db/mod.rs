//! Keycode database: key-press lookups and label translation.
//!
//! The database wraps the static key-press table with O(1) lookups in both
//! directions (code → label for display, label → canonical code for
//! regenerating source). It is built once on first access.

pub mod display;
pub mod table;

pub use display::{LabelSource, Translation};

use std::collections::HashMap;
use std::sync::OnceLock;
use table::KEY_PRESS_TABLE;

static GLOBAL_DB: OnceLock<KeycodeDb> = OnceLock::new();

/// Key-press lookup tables.
#[derive(Debug, Clone)]
pub struct KeycodeDb {
    /// Key code (and synonyms) → label
    labels: HashMap<&'static str, &'static str>,
    /// Label → first code listed for it
    canonical_codes: HashMap<&'static str, &'static str>,
}

impl KeycodeDb {
    /// Builds the lookup tables from [`KEY_PRESS_TABLE`].
    #[must_use]
    pub fn new() -> Self {
        let mut labels = HashMap::with_capacity(KEY_PRESS_TABLE.len());
        let mut canonical_codes = HashMap::new();

        for &(code, label) in KEY_PRESS_TABLE {
            labels.insert(code, label);
            canonical_codes.entry(label).or_insert(code);
        }

        Self {
            labels,
            canonical_codes,
        }
    }

    /// Shared instance, built lazily on first access.
    pub fn global() -> &'static Self {
        GLOBAL_DB.get_or_init(Self::new)
    }

    /// Looks up the label for a key-press code (e.g. "SPACE" → "SPC").
    #[must_use]
    pub fn label_for(&self, code: &str) -> Option<&'static str> {
        self.labels.get(code).copied()
    }

    /// Looks up the canonical key-press code for a label (e.g. "SPC" → "SPACE").
    #[must_use]
    pub fn code_for_label(&self, label: &str) -> Option<&'static str> {
        self.canonical_codes.get(label).copied()
    }

    /// Checks whether a key-press code is in the table.
    #[must_use]
    pub fn is_known(&self, code: &str) -> bool {
        self.labels.contains_key(code)
    }

    /// Iterates over every distinct label the table can produce.
    pub fn labels(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.canonical_codes.keys().copied()
    }

    /// Gets the total number of codes, synonyms included.
    #[must_use]
    pub fn keycode_count(&self) -> usize {
        self.labels.len()
    }
}

impl Default for KeycodeDb {
    fn default() -> Self {
        Self::new()
    }
}

/// Translates one raw binding (e.g. `"&kp Q"`) to its display label.
#[must_use]
pub fn translate(token: &str) -> String {
    KeycodeDb::global().translate(token).label
}

/// Maps a display label back to a directive string (e.g. `"L1"` → `"&mo 1"`).
#[must_use]
pub fn directive_for_label(label: &str) -> String {
    KeycodeDb::global().directive_for_label(label)
}

/// Label a cell edited to `label` shows once exported and parsed back.
#[must_use]
pub fn exported_label(label: &str) -> String {
    KeycodeDb::global().exported_label(label)
}
