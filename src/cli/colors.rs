//! Color override management commands.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::config::Config;
use crate::models::{Position, RgbColor};
use crate::services::{ColorFileService, LayerStore};
use clap::{Args, Subcommand};
use std::path::{Path, PathBuf};

/// Manage per-position key color overrides
#[derive(Args, Debug)]
pub struct ColorsArgs {
    /// Color file (defaults to the configured colors file)
    #[arg(long, value_name = "FILE", global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: ColorsCommand,
}

#[derive(Subcommand, Debug)]
enum ColorsCommand {
    /// List color overrides
    Show(ColorsShowArgs),
    /// Set the color of a position
    Set(ColorsSetArgs),
    /// Remove the color override of a position
    Clear(ColorsClearArgs),
    /// Delete the color file
    Reset,
}

/// List color overrides
#[derive(Args, Debug)]
pub struct ColorsShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set the color of a position
#[derive(Args, Debug)]
pub struct ColorsSetArgs {
    /// Position as ROW:COL
    #[arg(value_name = "ROW:COL")]
    position: String,

    /// Color as #RRGGBB
    #[arg(value_name = "COLOR")]
    color: String,
}

/// Remove the color override of a position
#[derive(Args, Debug)]
pub struct ColorsClearArgs {
    /// Position as ROW:COL
    #[arg(value_name = "ROW:COL")]
    position: String,
}

impl ColorsArgs {
    /// Execute colors subcommand
    pub fn execute(&self, config: &Config) -> CliResult<()> {
        let path = match &self.file {
            Some(path) => path.clone(),
            None => config
                .colors_file()
                .map_err(|e| CliError::io(format!("Failed to resolve colors file: {e:#}")))?,
        };

        match &self.command {
            ColorsCommand::Show(args) => args.execute(&path, config),
            ColorsCommand::Set(args) => args.execute(&path, config),
            ColorsCommand::Clear(args) => args.execute(&path, config),
            ColorsCommand::Reset => reset(&path),
        }
    }
}

impl ColorsShowArgs {
    fn execute(&self, path: &Path, config: &Config) -> CliResult<()> {
        let store = load_colors(path, config)?;
        let overrides = store.color_overrides();

        if self.json {
            return print_json(&overrides);
        }

        println!("Colors file: {}", path.display());
        println!("Default key color: {}", config.display.default_key_color);
        if overrides.is_empty() {
            println!("No color overrides set.");
            return Ok(());
        }
        for (position, color) in &overrides {
            println!("  {position:<6} {color}");
        }
        Ok(())
    }
}

impl ColorsSetArgs {
    fn execute(&self, path: &Path, config: &Config) -> CliResult<()> {
        let position = parse_position(&self.position)?;
        let color = RgbColor::from_hex(&self.color)
            .map_err(|e| CliError::validation(format!("Invalid color '{}': {e}", self.color)))?;

        let mut store = load_colors(path, config)?;
        if !store.set_color_override(position.row, position.col, color) {
            return Err(out_of_grid(position));
        }
        save_colors(&store, path)?;

        println!("Set {} to {}", position.key(), color);
        Ok(())
    }
}

impl ColorsClearArgs {
    fn execute(&self, path: &Path, config: &Config) -> CliResult<()> {
        let position = parse_position(&self.position)?;

        let mut store = load_colors(path, config)?;
        let had_override = store.color_override(position.row, position.col).is_some();
        if !store.clear_color_override(position.row, position.col) {
            return Err(out_of_grid(position));
        }

        if had_override {
            save_colors(&store, path)?;
            println!("Cleared color override at {}", position.key());
        } else {
            println!("No color override at {}", position.key());
        }
        Ok(())
    }
}

fn reset(path: &Path) -> CliResult<()> {
    let removed = ColorFileService::reset(path)
        .map_err(|e| CliError::io(format!("Failed to reset colors: {e:#}")))?;
    if removed {
        println!("Deleted {}", path.display());
    } else {
        println!("No colors file at {}", path.display());
    }
    Ok(())
}

fn load_colors(path: &Path, config: &Config) -> CliResult<LayerStore> {
    let overrides = ColorFileService::load(path)
        .map_err(|e| CliError::validation(format!("{e:#}")))?;
    let mut store = LayerStore::new().with_default_color(config.display.default_key_color);
    store.replace_color_overrides(overrides);
    Ok(store)
}

fn save_colors(store: &LayerStore, path: &Path) -> CliResult<()> {
    ColorFileService::save(&store.color_overrides(), path)
        .map_err(|e| CliError::io(format!("Failed to save colors: {e:#}")))
}

fn parse_position(text: &str) -> CliResult<Position> {
    Position::from_key(text).map_err(|e| CliError::validation(format!("{e:#}")))
}

fn out_of_grid(position: Position) -> CliError {
    CliError::validation(format!(
        "Position {} is outside the keyboard grid",
        position.key()
    ))
}
