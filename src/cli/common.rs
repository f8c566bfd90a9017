//! Shared CLI error and exit code types.

use std::fmt;

use crate::config::Config;
use crate::services::{LayerStore, LoadSummary};
use std::path::Path;

/// Process exit codes used by every subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Invalid input, arguments or file contents
    ValidationError = 1,
    /// File system failure
    IoError = 2,
}

impl ExitCode {
    /// Numeric process exit code.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error returned by CLI command handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Exit code the process should terminate with
    pub exit_code: ExitCode,
    /// Message printed to stderr
    pub message: String,
}

impl CliError {
    /// Creates a validation error (exit code 1).
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::ValidationError,
            message: message.into(),
        }
    }

    /// Creates an I/O error (exit code 2).
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::IoError,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI command handlers.
pub type CliResult<T> = Result<T, CliError>;

/// Serializes a value as pretty JSON and prints it to stdout.
pub fn print_json<T: serde::Serialize>(value: &T) -> CliResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
    println!("{json}");
    Ok(())
}

/// Loads layers for a command.
///
/// An explicit file wins over the configured keymap. With neither, the
/// built-in layout is used. A file that fails to load falls back to the
/// built-in layout only when the configuration allows it.
pub fn load_store(file: Option<&Path>, config: &Config) -> CliResult<(LayerStore, LoadSummary)> {
    let mut store = LayerStore::new().with_default_color(config.display.default_key_color);

    let Some(path) = file.or(config.paths.keymap.as_deref()) else {
        let summary = store.load_default();
        return Ok((store, summary));
    };

    if config.display.fallback_to_builtin {
        let (summary, error) = store.load_file_or_default(path);
        if let Some(error) = error {
            eprintln!("Warning: {error:#}");
            eprintln!("Using built-in default layout instead.");
        }
        return Ok((store, summary));
    }

    if !path.exists() {
        return Err(CliError::io(format!(
            "Keymap file not found: {}",
            path.display()
        )));
    }
    let summary = store
        .load_file(path)
        .map_err(|e| CliError::validation(format!("{e:#}")))?;
    Ok((store, summary))
}
