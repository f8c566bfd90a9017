//! Shared test fixtures for E2E CLI and parser tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Path to the keyviz binary.
pub fn keyviz_bin() -> &'static str {
    env!("CARGO_BIN_EXE_keyviz")
}

/// Runs keyviz with an isolated config file inside `dir`.
pub fn run_keyviz(dir: &Path, args: &[&str]) -> Output {
    Command::new(keyviz_bin())
        .arg("--config")
        .arg(dir.join("config.toml"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command")
}

/// Stdout of a command as a string.
pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Stderr of a command as a string.
pub fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Bindings for a 42-key layer: 36 key presses plus 6 thumb keys.
///
/// Rows 0-2 use letters A-Z then digits; the thumb keys are
/// `&kp LGUI &mo 1 &kp SPACE &kp RET &mo 2 &kp RALT`.
pub fn reduced_bindings() -> String {
    let codes: Vec<String> = ('A'..='Z')
        .map(|c| c.to_string())
        .chain((0..10).map(|n| format!("N{n}")))
        .collect();

    let mut lines: Vec<String> = codes
        .chunks(12)
        .map(|row| {
            row.iter()
                .map(|code| format!("&kp {code}"))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect();
    lines.push("&kp LGUI &mo 1 &kp SPACE &kp RET &mo 2 &kp RALT".to_string());
    lines.join("\n                ")
}

/// Bindings for a 60-key layer, every key `&kp F{n}` or `&trans`.
pub fn full_bindings() -> String {
    (0..60)
        .map(|i| {
            if i % 5 == 0 {
                "&trans".to_string()
            } else {
                format!("&kp F{}", i % 12 + 1)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Wraps layer blocks in a complete keymap file.
pub fn keymap_source(layers: &[(&str, Option<&str>, String)]) -> String {
    let mut source = String::from(
        "#include <behaviors.dtsi>\n#include <dt-bindings/zmk/keys.h>\n\n/ {\n    keymap {\n        compatible = \"zmk,keymap\";\n",
    );
    for (name, display_name, bindings) in layers {
        source.push_str(&format!("\n        {name}_layer {{\n"));
        if let Some(display_name) = display_name {
            source.push_str(&format!("            display-name = \"{display_name}\";\n"));
        }
        source.push_str(&format!(
            "            bindings = <\n                {bindings}\n            >;\n        }};\n"
        ));
    }
    source.push_str("    };\n};\n");
    source
}

/// A two-layer 42-key keymap: `default` ("Base") and `lower` (no display name).
pub fn two_layer_keymap() -> String {
    let lower = reduced_bindings()
        .replace("&kp A ", "&bt BT_SEL 0 ")
        .replace("&kp B ", "&lt 2 TAB ");
    keymap_source(&[
        ("default", Some("Base"), reduced_bindings()),
        ("lower", None, lower),
    ])
}

/// Writes a file into a fresh temp dir, returning both.
pub fn temp_file(name: &str, content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join(name);
    fs::write(&path, content).expect("Failed to write temp file");
    (dir, path)
}
