//! Service layer for application state and file I/O.
//!
//! This module contains the layer store consumed by rendering and editing
//! code, and the persistence of per-position key colors.

pub mod colors;
pub mod store;

// Re-export commonly used types
pub use colors::ColorFileService;
pub use store::{CellEdit, LayerStore, LoadSummary, DEFAULT_KEYMAP};
