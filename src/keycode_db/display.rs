//! Binding → display label translation, and the reverse mapping.
//!
//! Translation is total: every binding yields exactly one label. Rules are
//! checked in priority order and the first match wins; anything unmatched is
//! echoed in truncated form and tagged [`LabelSource::Fallback`] so callers
//! can tell it apart from a real lookup.

use serde::Serialize;
use tracing::debug;

use super::KeycodeDb;
use crate::constants::{
    DIRECTIVE_SIGIL, EMPTY_KEY, FALLBACK_LABEL_LEN, TRANSPARENT_KEY, UNKNOWN_KEY,
};

/// Label for `&bt BT_CLR`.
pub const BT_CLEAR_LABEL: &str = "BTCLR";
/// Label for `&bt BT_NXT`.
pub const BT_NEXT_LABEL: &str = "BT→";
/// Label for `&bt BT_PRV`.
pub const BT_PREV_LABEL: &str = "BT←";
/// Label for bluetooth bindings with an unrecognized sub-command.
pub const BT_LABEL: &str = "BT";
/// Label for `&out` bindings without a recognized target.
pub const OUT_LABEL: &str = "OUT";
/// Label for bootloader bindings.
pub const BOOT_LABEL: &str = "BOOT";
/// Label for reset bindings.
pub const RESET_LABEL: &str = "RST";

/// Layer directives and the label prefix each translates to.
const LAYER_LABEL_PREFIXES: &[(&str, &str)] = &[
    ("&mo", "L"),
    ("&lt", "LT"),
    ("&to", "TO"),
    ("&sl", "SL"),
    ("&tog", "TG"),
];

/// Which rule produced a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelSource {
    /// Blank token
    Blank,
    /// `&trans`
    Transparent,
    /// `&none`
    NoAction,
    /// `&kp` argument found in the key-press table
    Table,
    /// `&kp` argument not in the table, echoed verbatim
    Echo,
    /// Layer directive (`&mo`, `&lt`, `&to`, `&sl`, `&tog`)
    Layer,
    /// Bluetooth directive
    Bluetooth,
    /// Output selection directive
    Output,
    /// Reset or bootloader directive
    Reset,
    /// No rule matched; truncated literal
    Fallback,
}

/// A label together with the rule that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Translation {
    /// Short display label
    pub label: String,
    /// Rule that produced the label
    pub source: LabelSource,
}

impl Translation {
    fn new(label: impl Into<String>, source: LabelSource) -> Self {
        Self {
            label: label.into(),
            source,
        }
    }

    /// True when the label came from a known rule rather than an echo or fallback.
    #[must_use]
    pub fn is_recognized(&self) -> bool {
        !matches!(self.source, LabelSource::Echo | LabelSource::Fallback)
    }
}

impl KeycodeDb {
    /// Translates one raw binding (e.g. `"&lt 1 SPACE"`) to a display label.
    ///
    /// # Examples
    ///
    /// ```
    /// use keyviz::keycode_db::KeycodeDb;
    ///
    /// let db = KeycodeDb::new();
    /// assert_eq!(db.translate("&kp SPACE").label, "SPC");
    /// assert_eq!(db.translate("&lt 2 TAB").label, "LT2");
    /// assert_eq!(db.translate("&bt BT_SEL 1").label, "BT1");
    /// ```
    #[must_use]
    pub fn translate(&self, token: &str) -> Translation {
        let parts: Vec<&str> = token.split_whitespace().collect();
        let Some((&directive, args)) = parts.split_first() else {
            return Translation::new(EMPTY_KEY, LabelSource::Blank);
        };

        match directive {
            "&trans" => return Translation::new(TRANSPARENT_KEY, LabelSource::Transparent),
            "&none" => return Translation::new(EMPTY_KEY, LabelSource::NoAction),
            _ => {}
        }

        if directive == "&kp" && args.len() == 1 {
            let code = args[0];
            return match self.label_for(code) {
                Some(label) => Translation::new(label, LabelSource::Table),
                None => {
                    debug!("Key code '{}' not in table, echoing", code);
                    Translation::new(code, LabelSource::Echo)
                }
            };
        }

        if let Some(layer) = args.first() {
            if let Some((_, prefix)) = LAYER_LABEL_PREFIXES
                .iter()
                .find(|(name, _)| *name == directive)
            {
                return Translation::new(format!("{prefix}{layer}"), LabelSource::Layer);
            }
        }

        if directive.starts_with("&bt") {
            return Translation::new(bluetooth_label(args), LabelSource::Bluetooth);
        }

        if directive.starts_with("&out") {
            let label = match args.first().copied() {
                Some("OUT_USB") => "USB",
                Some("OUT_BLE") => "BLE",
                _ => OUT_LABEL,
            };
            return Translation::new(label, LabelSource::Output);
        }

        let lowered = token.to_lowercase();
        if lowered.contains("bootloader") {
            return Translation::new(BOOT_LABEL, LabelSource::Reset);
        }
        if lowered.contains("reset") {
            return Translation::new(RESET_LABEL, LabelSource::Reset);
        }

        let label = fallback_label(token);
        debug!("No translation rule for '{}', using '{}'", token.trim(), label);
        Translation::new(label, LabelSource::Fallback)
    }

    /// Maps a display label back to a directive that translates to it.
    ///
    /// Labels the translator cannot produce from a known rule become `&kp`
    /// bindings with the label as argument. Characters outside
    /// `[A-Za-z0-9_()+-]` are replaced by `_` so the argument can never
    /// contain keymap syntax.
    #[must_use]
    pub fn directive_for_label(&self, label: &str) -> String {
        let label = label.trim();
        match label {
            "" | EMPTY_KEY => return "&none".to_string(),
            TRANSPARENT_KEY => return "&trans".to_string(),
            _ => {}
        }

        if let Some(code) = self.code_for_label(label) {
            return format!("&kp {code}");
        }

        // Longest prefixes first so "LT1" is not read as "L" + "T1".
        for (prefix, directive) in [
            ("LT", "&lt"),
            ("TO", "&to"),
            ("SL", "&sl"),
            ("TG", "&tog"),
            ("L", "&mo"),
        ] {
            if let Some(layer) = layer_number(label, prefix) {
                return if directive == "&lt" {
                    format!("&lt {layer} SPACE")
                } else {
                    format!("{directive} {layer}")
                };
            }
        }
        if let Some(device) = layer_number(label, "BT") {
            return format!("&bt BT_SEL {device}");
        }

        match label {
            BT_CLEAR_LABEL => "&bt BT_CLR".to_string(),
            BT_NEXT_LABEL => "&bt BT_NXT".to_string(),
            BT_PREV_LABEL => "&bt BT_PRV".to_string(),
            BT_LABEL => "&bt".to_string(),
            "USB" => "&out OUT_USB".to_string(),
            "BLE" => "&out OUT_BLE".to_string(),
            OUT_LABEL => "&out".to_string(),
            BOOT_LABEL => "&bootloader".to_string(),
            RESET_LABEL => "&sys_reset".to_string(),
            other => format!("&kp {}", key_code_text(other)),
        }
    }

    /// Label a cell shows after its label is exported and parsed back.
    ///
    /// Equal to `label` for every label a binding can translate to. Free text
    /// may differ: syntax characters become `_`, and codes with a shorter
    /// table label (`ENTER`) come back as that label (`ENT`).
    ///
    /// # Examples
    ///
    /// ```
    /// use keyviz::keycode_db::KeycodeDb;
    ///
    /// let db = KeycodeDb::new();
    /// assert_eq!(db.exported_label("L2"), "L2");
    /// assert_eq!(db.exported_label("ENTER"), "ENT");
    /// assert_eq!(db.exported_label("a>;"), "a__");
    /// ```
    #[must_use]
    pub fn exported_label(&self, label: &str) -> String {
        self.translate(&self.directive_for_label(label)).label
    }
}

/// Restricts free text to characters that are safe as a key-press argument.
fn key_code_text(text: &str) -> String {
    text.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '_' | '(' | ')' | '+' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Label for a bluetooth binding from its arguments.
fn bluetooth_label(args: &[&str]) -> String {
    match args {
        ["BT_CLR" | "BT_CLR_ALL", ..] => BT_CLEAR_LABEL.to_string(),
        ["BT_SEL", device, ..] => format!("BT{device}"),
        ["BT_NXT", ..] => BT_NEXT_LABEL.to_string(),
        ["BT_PRV", ..] => BT_PREV_LABEL.to_string(),
        _ => BT_LABEL.to_string(),
    }
}

/// Strips the sigil and whitespace following it, keeps at most 5 characters.
fn fallback_label(token: &str) -> String {
    let trimmed = token.trim();
    let body = trimmed
        .strip_prefix(DIRECTIVE_SIGIL)
        .map_or(trimmed, str::trim_start);
    let label: String = body.chars().take(FALLBACK_LABEL_LEN).collect();
    if label.trim().is_empty() {
        UNKNOWN_KEY.to_string()
    } else {
        label
    }
}

/// Parses `"{prefix}{digits}"` labels, returning the digits.
fn layer_number<'a>(label: &'a str, prefix: &str) -> Option<&'a str> {
    let digits = label.strip_prefix(prefix)?;
    (!digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())).then_some(digits)
}
