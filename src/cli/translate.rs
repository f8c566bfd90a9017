//! Binding translation command.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::keycode_db::{KeycodeDb, LabelSource};
use crate::parser::tokenize;
use clap::Args;
use serde::Serialize;

/// Translate binding text (e.g. "&kp Q &lt 1 SPACE") to display labels
#[derive(Debug, Clone, Args)]
pub struct TranslateArgs {
    /// Binding text; multiple arguments are joined with spaces
    #[arg(value_name = "BINDING", required = true, num_args = 1..)]
    pub bindings: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct TranslationOutput {
    binding: String,
    label: String,
    source: LabelSource,
}

impl TranslateArgs {
    /// Execute the translate command
    pub fn execute(&self) -> CliResult<()> {
        let text = self.bindings.join(" ");
        let bindings = tokenize(&text);
        if bindings.is_empty() {
            return Err(CliError::validation(format!(
                "No bindings found in '{text}'. Bindings start with '&', e.g. \"&kp Q\""
            )));
        }

        let db = KeycodeDb::global();
        let results: Vec<TranslationOutput> = bindings
            .iter()
            .map(|binding| {
                let binding = binding.to_string();
                let translation = db.translate(&binding);
                TranslationOutput {
                    binding,
                    label: translation.label,
                    source: translation.source,
                }
            })
            .collect();

        if self.json {
            return print_json(&results);
        }

        let width = results
            .iter()
            .map(|r| r.binding.chars().count())
            .max()
            .unwrap_or(0);
        for result in &results {
            println!("{:<width$}  ->  {}", result.binding, result.label);
        }
        Ok(())
    }
}
