//! Keymap source generation (serialization).
//!
//! Regenerates keymap source from loaded layers. Cells whose label still
//! matches the translation of their raw binding keep the raw binding
//! verbatim; edited cells are turned back into directives through the
//! reverse label mapping. The output always parses back to the same layers
//! and binding counts; an edited cell parses back to
//! [`exported_label`](crate::keycode_db::exported_label) of its label.

use crate::constants::{APP_NAME, GRID_COLS};
use crate::keycode_db::{directive_for_label, translate};
use crate::models::{positions_for, Layer};
use anyhow::{Context, Result};
use std::fmt::Write as _;
use std::path::Path;

const INDENT: &str = "    ";

/// Generates keymap source for all layers and writes it atomically.
///
/// # Errors
///
/// Returns errors for file I/O failures or a failed rename.
pub fn save_keymap(layers: &[Layer], path: &Path) -> Result<()> {
    let source = generate_keymap(layers);
    atomic_write(path, &source)
}

/// Generates keymap source for the given layers.
#[must_use]
pub fn generate_keymap(layers: &[Layer]) -> String {
    let mut output = String::new();

    output.push_str(&format!("/*\n * Generated by {APP_NAME}\n */\n\n"));
    for header in [
        "behaviors.dtsi",
        "dt-bindings/zmk/bt.h",
        "dt-bindings/zmk/keys.h",
        "dt-bindings/zmk/outputs.h",
    ] {
        output.push_str(&format!("#include <{header}>\n"));
    }
    output.push('\n');

    output.push_str("/ {\n");
    output.push_str(&format!("{INDENT}keymap {{\n"));
    output.push_str(&format!("{INDENT}{INDENT}compatible = \"zmk,keymap\";\n"));

    for layer in layers {
        output.push('\n');
        output.push_str(&generate_layer(layer));
    }

    output.push_str(&format!("{INDENT}}};\n"));
    output.push_str("};\n");
    output
}

/// Current bindings of a layer, with edited cells converted back to directives.
#[must_use]
pub fn current_bindings(layer: &Layer) -> Vec<String> {
    let positions = positions_for(layer.raw_bindings.len());

    layer
        .raw_bindings
        .iter()
        .enumerate()
        .map(|(idx, raw)| {
            let Some(position) = positions.get(idx) else {
                return raw.clone();
            };
            match layer.label_at(*position) {
                Some(label) if label != translate(raw) => directive_for_label(label),
                _ => raw.clone(),
            }
        })
        .collect()
}

/// Generates one `<name>_layer { ... };` block.
fn generate_layer(layer: &Layer) -> String {
    let outer = INDENT.repeat(2);
    let inner = INDENT.repeat(3);
    let rows = INDENT.repeat(4);

    let mut output = String::new();
    let _ = writeln!(output, "{outer}{}_layer {{", layer.name);
    let _ = writeln!(
        output,
        "{inner}display-name = \"{}\";",
        layer.display_name.replace('"', "'")
    );
    let _ = writeln!(output, "{inner}bindings = <");

    let bindings = current_bindings(layer);
    let width = bindings.iter().map(|b| b.chars().count()).max().unwrap_or(0);
    for row in bindings.chunks(GRID_COLS) {
        let (left, right) = row.split_at(row.len().min(GRID_COLS / 2));
        let pad = |cells: &[String]| {
            cells
                .iter()
                .map(|c| format!("{c:<width$}"))
                .collect::<Vec<_>>()
                .join(" ")
        };
        let line = if right.is_empty() {
            pad(left)
        } else {
            format!("{}   {}", pad(left), pad(right))
        };
        let _ = writeln!(output, "{rows}{}", line.trim_end());
    }

    let _ = writeln!(output, "{inner}>;");
    let _ = writeln!(output, "{outer}}};");
    output
}

/// Writes content to a temp file then renames it over the target.
fn atomic_write(path: &Path, content: &str) -> Result<()> {
    let temp_path = path.with_extension("keymap.tmp");

    std::fs::write(&temp_path, content)
        .with_context(|| format!("Failed to write to temporary file: {}", temp_path.display()))?;

    std::fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to rename temporary file to: {}", path.display()))?;

    Ok(())
}
