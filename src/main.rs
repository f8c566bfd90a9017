//! KeyViz - split keyboard keymap inspector
//!
//! Parses ZMK-style keymap files into per-layer label grids, translates
//! bindings, regenerates keymap source and manages key color overrides.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use keyviz::cli::{
    CliError, CliResult, ColorsArgs, ConfigArgs, ExitCode, ExportArgs, LayersArgs, TranslateArgs,
};
use keyviz::config::Config;

/// KeyViz - split keyboard keymap inspector
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file (defaults to the platform config directory)
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse a keymap file and print its layer grids
    Layers(LayersArgs),
    /// Translate binding text to display labels
    Translate(TranslateArgs),
    /// Regenerate keymap source, optionally with edited labels
    Export(ExportArgs),
    /// Manage key color overrides
    Colors(ColorsArgs),
    /// Show or change configuration
    Config(ConfigArgs),
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so JSON output on stdout stays clean
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let code = match run(&cli) {
        Ok(()) => ExitCode::Success,
        Err(err) => {
            eprintln!("Error: {err}");
            err.exit_code
        }
    };
    std::process::exit(code.code());
}

fn run(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Command::Translate(args) => args.execute(),
        Command::Config(args) => args.execute(&config_path(cli)?),
        Command::Layers(args) => args.execute(&load_config(cli)?),
        Command::Export(args) => args.execute(&load_config(cli)?),
        Command::Colors(args) => args.execute(&load_config(cli)?),
    }
}

fn config_path(cli: &Cli) -> CliResult<PathBuf> {
    match &cli.config {
        Some(path) => Ok(path.clone()),
        None => Config::config_file_path()
            .map_err(|e| CliError::io(format!("Failed to locate configuration: {e:#}"))),
    }
}

fn load_config(cli: &Cli) -> CliResult<Config> {
    Config::load_from(&config_path(cli)?)
        .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))
}
