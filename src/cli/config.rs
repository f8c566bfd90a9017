//! Configuration management CLI commands.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::config::Config;
use crate::constants::APP_NAME;
use crate::models::RgbColor;
use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Keymap file used when commands are given no file
    #[arg(long, value_name = "FILE")]
    keymap: Option<PathBuf>,

    /// Color override file
    #[arg(long, value_name = "FILE")]
    colors: Option<PathBuf>,

    /// Color of keys without an override (#RRGGBB)
    #[arg(long, value_name = "COLOR")]
    default_color: Option<String>,

    /// Fall back to the built-in layout when a keymap fails to load (true or false)
    #[arg(long, value_name = "BOOL")]
    fallback: Option<bool>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    config_file: String,
    paths: PathsOutput,
    display: DisplayOutput,
}

#[derive(Serialize, Debug)]
struct PathsOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    keymap: Option<String>,
    colors: String,
}

#[derive(Serialize, Debug)]
struct DisplayOutput {
    default_key_color: String,
    fallback_to_builtin: bool,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self, config_path: &Path) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(config_path),
            ConfigCommand::Set(args) => args.execute(config_path),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self, config_path: &Path) -> CliResult<()> {
        let config = Config::load_from(config_path)
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;
        let colors = config
            .colors_file()
            .map_err(|e| CliError::io(format!("Failed to resolve colors file: {e:#}")))?;

        if self.json {
            return print_json(&ConfigOutput {
                config_file: config_path.to_string_lossy().to_string(),
                paths: PathsOutput {
                    keymap: config
                        .paths
                        .keymap
                        .as_ref()
                        .map(|p| p.to_string_lossy().to_string()),
                    colors: colors.to_string_lossy().to_string(),
                },
                display: DisplayOutput {
                    default_key_color: config.display.default_key_color.to_hex(),
                    fallback_to_builtin: config.display.fallback_to_builtin,
                },
            });
        }

        println!("{APP_NAME} Configuration");
        println!("====================");
        println!("File: {}", config_path.display());
        println!();

        println!("Paths:");
        match &config.paths.keymap {
            Some(keymap) => println!("  Keymap: {}", keymap.display()),
            None => println!("  Keymap: (built-in layout)"),
        }
        println!("  Colors: {}", colors.display());
        println!();

        println!("Display:");
        println!("  Default Key Color: {}", config.display.default_key_color);
        println!("  Fallback To Built-in: {}", config.display.fallback_to_builtin);
        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self, config_path: &Path) -> CliResult<()> {
        if self.keymap.is_none()
            && self.colors.is_none()
            && self.default_color.is_none()
            && self.fallback.is_none()
        {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --keymap, --colors, --default-color, or --fallback",
            ));
        }

        let mut config = Config::load_from(config_path).unwrap_or_default();

        if let Some(path) = &self.keymap {
            if !path.is_file() {
                return Err(CliError::validation(format!(
                    "Keymap file does not exist: {}",
                    path.display()
                )));
            }
            config.paths.keymap = Some(path.clone());
        }

        if let Some(path) = &self.colors {
            config.paths.colors = Some(path.clone());
        }

        if let Some(hex) = &self.default_color {
            config.display.default_key_color = RgbColor::from_hex(hex)
                .map_err(|e| CliError::validation(format!("Invalid color '{hex}': {e}")))?;
        }

        if let Some(fallback) = self.fallback {
            config.display.fallback_to_builtin = fallback;
        }

        config
            .validate()
            .map_err(|e| CliError::validation(format!("{e:#}")))?;
        config
            .save_to(config_path)
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");
        Ok(())
    }
}
