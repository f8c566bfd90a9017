//! CLI command handlers for KeyViz.
//!
//! Headless, scriptable access to keymap parsing, translation, export and
//! color overrides.

pub mod colors;
pub mod common;
pub mod config;
pub mod export;
pub mod layers;
pub mod translate;

// Re-export types used by main.rs and tests
pub use colors::ColorsArgs;
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use export::ExportArgs;
pub use layers::LayersArgs;
pub use translate::TranslateArgs;
