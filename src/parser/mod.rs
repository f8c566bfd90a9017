//! Parsing and serialization of keymap source.
//!
//! This module turns keymap configuration text into layers (tokenizer and
//! layer block extractor) and regenerates keymap text from layers.

pub mod keymap;
pub mod keymap_gen;
pub mod tokenizer;

// Re-export commonly used functions
pub use keymap::{extract_layers, parse_keymap, parse_keymap_str, ExtractedLayer};
pub use keymap_gen::{generate_keymap, save_keymap};
pub use tokenizer::{tokenize, tokenize_raw};
