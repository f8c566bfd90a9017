//! Layer inspection command.

use crate::cli::common::{load_store, print_json, CliError, CliResult};
use crate::config::Config;
use crate::models::Layer;
use crate::services::LayerStore;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Parse a keymap file and print its layer grids
#[derive(Debug, Clone, Args)]
pub struct LayersArgs {
    /// Keymap file (defaults to the configured keymap, then the built-in layout)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Only print this layer
    #[arg(short, long, value_name = "NAME")]
    pub layer: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct LayerOutput<'a> {
    name: &'a str,
    display_name: &'a str,
    binding_count: usize,
    rows: &'a [Vec<String>],
}

impl<'a> From<&'a Layer> for LayerOutput<'a> {
    fn from(layer: &'a Layer) -> Self {
        Self {
            name: &layer.name,
            display_name: &layer.display_name,
            binding_count: layer.raw_bindings.len(),
            rows: layer.keymap.rows(),
        }
    }
}

impl LayersArgs {
    /// Execute the layers command
    pub fn execute(&self, config: &Config) -> CliResult<()> {
        let (store, _) = load_store(self.file.as_deref(), config)?;
        let layers = self.selected_layers(&store)?;

        if self.json {
            let output: Vec<LayerOutput<'_>> = layers.into_iter().map(LayerOutput::from).collect();
            return print_json(&output);
        }

        for (idx, layer) in layers.into_iter().enumerate() {
            if idx > 0 {
                println!();
            }
            print_layer(layer);
        }
        Ok(())
    }

    fn selected_layers<'s>(&self, store: &'s LayerStore) -> CliResult<Vec<&'s Layer>> {
        match &self.layer {
            Some(name) => store.get_layer(name).map(|layer| vec![layer]).ok_or_else(|| {
                CliError::validation(format!(
                    "Layer '{}' not found. Available layers: {}",
                    name,
                    store.layer_names().join(", ")
                ))
            }),
            None => Ok(store.layers().iter().collect()),
        }
    }
}

fn print_layer(layer: &Layer) {
    println!("{} ({})", layer.display_name, layer.name);

    let width = layer
        .keymap
        .rows()
        .iter()
        .flatten()
        .map(|label| label.chars().count())
        .max()
        .unwrap_or(0);
    let cells = |labels: &[String]| {
        labels
            .iter()
            .map(|label| format!("{label:^width$}"))
            .collect::<Vec<_>>()
            .join("|")
    };

    for row in 0..layer.keymap.rows().len() {
        let (Some(left), Some(right)) = (layer.keymap.left_half(row), layer.keymap.right_half(row))
        else {
            continue;
        };
        println!("  |{}|   |{}|", cells(left), cells(right));
    }
}
