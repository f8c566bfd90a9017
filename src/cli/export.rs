//! Export command for regenerating keymap source.

use crate::cli::common::{load_store, CliError, CliResult};
use crate::config::Config;
use crate::keycode_db::exported_label;
use crate::models::{positions_for, Position};
use crate::parser::{generate_keymap, save_keymap};
use crate::services::LayerStore;
use clap::Args;
use std::path::PathBuf;

/// Regenerate keymap source, optionally with edited labels
#[derive(Debug, Clone, Args)]
pub struct ExportArgs {
    /// Keymap file (defaults to the configured keymap, then the built-in layout)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Output path (prints to stdout if omitted)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Label edit applied before export, as LAYER:ROW:COL=LABEL (repeatable)
    #[arg(long = "set", value_name = "EDIT")]
    pub edits: Vec<String>,
}

/// A parsed `LAYER:ROW:COL=LABEL` edit.
#[derive(Debug, Clone, PartialEq, Eq)]
struct CellAssignment {
    layer: String,
    row: usize,
    col: usize,
    label: String,
}

impl ExportArgs {
    /// Execute the export command
    pub fn execute(&self, config: &Config) -> CliResult<()> {
        let edits = self
            .edits
            .iter()
            .map(|edit| parse_assignment(edit))
            .collect::<CliResult<Vec<_>>>()?;

        let (mut store, _) = load_store(self.file.as_deref(), config)?;
        apply_edits(&mut store, &edits)?;

        match &self.output {
            Some(path) => {
                save_keymap(store.layers(), path)
                    .map_err(|e| CliError::io(format!("Failed to write keymap: {e:#}")))?;
                eprintln!("Exported {} layers to {}", store.layers().len(), path.display());
            }
            None => print!("{}", generate_keymap(store.layers())),
        }
        Ok(())
    }
}

/// Applies edits, storing each label as it will read back from the exported source.
fn apply_edits(store: &mut LayerStore, edits: &[CellAssignment]) -> CliResult<()> {
    for edit in edits {
        let Some(layer) = store.get_layer(&edit.layer) else {
            return Err(CliError::validation(format!(
                "Layer '{}' not found. Available layers: {}",
                edit.layer,
                store.layer_names().join(", ")
            )));
        };

        let position = Position::new(edit.row, edit.col);
        if !position.is_in_grid() {
            return Err(CliError::validation(format!(
                "Position {} is outside the keyboard grid",
                position.key()
            )));
        }
        if !positions_for(layer.raw_bindings.len()).contains(&position) {
            return Err(CliError::validation(format!(
                "Position {} has no key in layer '{}' ({} keys)",
                position.key(),
                edit.layer,
                layer.raw_bindings.len()
            )));
        }

        let label = exported_label(&edit.label);
        if label != edit.label.trim() {
            eprintln!(
                "Warning: label '{}' at {}:{} exports as '{label}'",
                edit.label,
                edit.layer,
                position.key()
            );
        }
        store.update_cell(&edit.layer, edit.row, edit.col, &label);
    }
    Ok(())
}

fn parse_assignment(text: &str) -> CliResult<CellAssignment> {
    let invalid = || {
        CliError::validation(format!(
            "Invalid edit '{text}'. Expected LAYER:ROW:COL=LABEL, e.g. default:0:0=ESC"
        ))
    };

    let (target, label) = text.split_once('=').ok_or_else(invalid)?;
    let mut parts = target.splitn(3, ':');
    let (Some(layer), Some(row), Some(col)) = (parts.next(), parts.next(), parts.next()) else {
        return Err(invalid());
    };
    if layer.is_empty() {
        return Err(invalid());
    }

    Ok(CellAssignment {
        layer: layer.to_string(),
        row: row.trim().parse().map_err(|_| invalid())?,
        col: col.trim().parse().map_err(|_| invalid())?,
        label: label.to_string(),
    })
}
