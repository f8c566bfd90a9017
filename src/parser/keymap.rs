//! Keymap source parsing.
//!
//! Layer blocks are extracted by a line-oriented state machine, then each
//! layer's raw bindings are translated and reshaped into its grid. The
//! extraction is lenient: unknown lines are ignored and an unterminated
//! bindings array at end of input is closed implicitly.
//!
//! ```text
//! default_layer {
//!     display-name = "Base";
//!     bindings = <
//!         &kp Q &kp W ...
//!     >;
//! };
//! ```

use crate::constants::APP_BINARY_NAME;
use crate::models::Layer;
use crate::parser::tokenizer::tokenize_raw;
use anyhow::{Context, Result};
use regex::Regex;
use serde::Serialize;
use std::path::Path;
use std::sync::LazyLock;
use tracing::{debug, warn};

static LAYER_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[A-Za-z_][\w-]*\s*:\s*)?([A-Za-z0-9_-]+?)_layer\s*\{")
        .expect("layer header pattern is valid")
});

static DISPLAY_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^display-name\s*=\s*"([^"]*)""#).expect("display-name pattern is valid")
});

static BINDINGS_START: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^bindings\s*=\s*<").expect("bindings pattern is valid")
});

static BINDINGS_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r">\s*;").expect("bindings end pattern is valid"));

/// Parsing state machine states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseState {
    /// Outside any layer block
    Idle,
    /// Layer header seen, looking for display-name and bindings
    InLayer,
    /// Accumulating a multi-line bindings array
    InBindings,
}

/// A layer as captured from source, before translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractedLayer {
    /// Identifier prefix of the `<name>_layer` block
    pub name: String,
    /// Declared `display-name`, if any
    pub display_name: Option<String>,
    /// Bindings as joined directive strings, in source order
    pub raw_bindings: Vec<String>,
}

impl ExtractedLayer {
    /// Translates and reshapes this layer's bindings.
    #[must_use]
    pub fn into_layer(self) -> Layer {
        Layer::new(self.name, self.display_name, self.raw_bindings)
    }
}

/// Layer under construction.
#[derive(Debug)]
struct LayerDraft {
    name: String,
    display_name: Option<String>,
    raw_bindings: Option<Vec<String>>,
}

#[derive(Debug)]
struct Extractor {
    state: ParseState,
    in_block_comment: bool,
    current: Option<LayerDraft>,
    buffer: Vec<String>,
    layers: Vec<ExtractedLayer>,
}

impl Extractor {
    fn new() -> Self {
        Self {
            state: ParseState::Idle,
            in_block_comment: false,
            current: None,
            buffer: Vec::new(),
            layers: Vec::new(),
        }
    }

    fn feed(&mut self, raw_line: &str) {
        let line = self.strip_comments(raw_line);
        let line = line.trim();
        if line.is_empty() {
            return;
        }

        match self.state {
            ParseState::InBindings => {
                if let Some(end) = BINDINGS_END.find(line) {
                    self.buffer.push(line[..end.start()].to_string());
                    self.close_bindings();
                } else {
                    self.buffer.push(line.to_string());
                }
            }
            ParseState::Idle | ParseState::InLayer => {
                if let Some(captures) = LAYER_HEADER.captures(line) {
                    self.finalize_layer();
                    self.current = Some(LayerDraft {
                        name: captures[1].to_string(),
                        display_name: None,
                        raw_bindings: None,
                    });
                    self.state = ParseState::InLayer;

                    let rest = line[captures.get(0).map_or(0, |m| m.end())..].trim();
                    if !rest.is_empty() {
                        self.feed_layer_body(rest);
                    }
                    return;
                }

                if self.state == ParseState::InLayer {
                    self.feed_layer_body(line);
                }
            }
        }
    }

    fn feed_layer_body(&mut self, line: &str) {
        if let Some(captures) = DISPLAY_NAME.captures(line) {
            if let Some(draft) = self.current.as_mut() {
                draft.display_name = Some(captures[1].to_string());
            }
            return;
        }

        if let Some(start) = BINDINGS_START.find(line) {
            let rest = &line[start.end()..];
            if let Some(end) = BINDINGS_END.find(rest) {
                self.buffer.push(rest[..end.start()].to_string());
                self.close_bindings();
            } else {
                self.buffer.push(rest.to_string());
                self.state = ParseState::InBindings;
            }
            return;
        }

        if line.starts_with('}') {
            self.finalize_layer();
            self.state = ParseState::Idle;
        }
    }

    /// Removes `//` and `/* */` comments, tracking block comments across lines.
    ///
    /// Markers inside double-quoted strings are kept.
    fn strip_comments(&mut self, line: &str) -> String {
        let mut output = String::with_capacity(line.len());
        let mut in_string = false;
        let mut chars = line.char_indices();

        while let Some((idx, c)) = chars.next() {
            let rest = &line[idx..];
            if self.in_block_comment {
                if rest.starts_with("*/") {
                    chars.next();
                    self.in_block_comment = false;
                }
                continue;
            }

            if c == '"' {
                in_string = !in_string;
            } else if !in_string {
                if rest.starts_with("//") {
                    break;
                }
                if rest.starts_with("/*") {
                    chars.next();
                    output.push(' ');
                    self.in_block_comment = true;
                    continue;
                }
            }
            output.push(c);
        }
        output
    }

    fn close_bindings(&mut self) {
        let joined = self.buffer.join(" ");
        self.buffer.clear();
        self.state = ParseState::InLayer;

        let bindings = tokenize_raw(&joined);
        if let Some(draft) = self.current.as_mut() {
            if draft.raw_bindings.is_some() {
                debug!(
                    "Layer '{}' declares bindings more than once, keeping the last block",
                    draft.name
                );
            }
            draft.raw_bindings = Some(bindings);
        }
    }

    fn finalize_layer(&mut self) {
        let Some(draft) = self.current.take() else {
            return;
        };

        let Some(raw_bindings) = draft.raw_bindings else {
            debug!("Skipping layer '{}' without a bindings block", draft.name);
            return;
        };

        let layer = ExtractedLayer {
            name: draft.name,
            display_name: draft.display_name,
            raw_bindings,
        };

        if let Some(existing) = self.layers.iter_mut().find(|l| l.name == layer.name) {
            warn!(
                "Duplicate layer '{}', later definition replaces the earlier one",
                layer.name
            );
            *existing = layer;
        } else {
            self.layers.push(layer);
        }
    }

    fn finish(mut self) -> Vec<ExtractedLayer> {
        if self.state == ParseState::InBindings {
            debug!("Input ended inside a bindings block, closing it");
            self.close_bindings();
        }
        self.finalize_layer();
        self.layers
    }
}

/// Extracts layer blocks from keymap source without translating them.
#[must_use]
pub fn extract_layers(content: &str) -> Vec<ExtractedLayer> {
    let mut extractor = Extractor::new();
    for line in content.lines() {
        extractor.feed(line);
    }
    extractor.finish()
}

/// Parses keymap source into translated, reshaped layers in source order.
///
/// Returns an empty list when the source holds no layer blocks; the caller
/// decides whether that is a failure.
#[must_use]
pub fn parse_keymap_str(content: &str) -> Vec<Layer> {
    extract_layers(content)
        .into_iter()
        .map(ExtractedLayer::into_layer)
        .collect()
}

/// Reads and parses a keymap file.
///
/// # Errors
///
/// Returns errors for a missing path, a directory, or an unreadable file.
pub fn parse_keymap(path: &Path) -> Result<Vec<Layer>> {
    let content = read_keymap_file(path)?;
    Ok(parse_keymap_str(&content))
}

/// Reads a keymap file with user-facing error messages.
pub fn read_keymap_file(path: &Path) -> Result<String> {
    if !path.exists() {
        anyhow::bail!(
            "Keymap file not found: {}\n\n\
             Please check the file path and try again.\n\
             Example: {} layers config/boards/shields/corne/corne.keymap",
            path.display(),
            APP_BINARY_NAME
        );
    }

    if !path.is_file() {
        anyhow::bail!(
            "Path is not a file: {}\n\n\
            Please provide a path to a .keymap file.",
            path.display()
        );
    }

    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read keymap file: {}", path.display()))
}
