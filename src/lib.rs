//! KeyViz Library
//!
//! This library turns ZMK-style keymap source into a structured layer model:
//! layer blocks are extracted, their bindings tokenized and translated to
//! short display labels, and the labels reshaped into a fixed 5×12 grid per
//! layer. A layer store keeps label edits and per-position color overrides,
//! and layers can be written back out as keymap source.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod keycode_db;
pub mod models;
pub mod parser;
pub mod services;
