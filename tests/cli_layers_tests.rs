//! End-to-end tests for `keyviz layers`.

use tempfile::TempDir;

mod fixtures;
use fixtures::*;

#[test]
fn test_layers_human_output() {
    let (dir, path) = temp_file("corne.keymap", &two_layer_keymap());
    let output = run_keyviz(dir.path(), &["layers", path.to_str().unwrap()]);

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        stderr_of(&output)
    );
    let stdout = stdout_of(&output);
    assert!(stdout.contains("Base (default)"));
    assert!(stdout.contains("LOWER (lower)"));
    assert!(stdout.contains("BT0"));
    assert!(stdout.contains("SPC"));
}

#[test]
fn test_layers_json_output() {
    let (dir, path) = temp_file("corne.keymap", &two_layer_keymap());
    let output = run_keyviz(dir.path(), &["layers", path.to_str().unwrap(), "--json"]);
    assert_eq!(output.status.code(), Some(0));

    let layers: serde_json::Value =
        serde_json::from_str(&stdout_of(&output)).expect("Should parse JSON output");
    let layers = layers.as_array().expect("Should be an array");
    assert_eq!(layers.len(), 2);

    assert_eq!(layers[0]["name"], "default");
    assert_eq!(layers[0]["display_name"], "Base");
    assert_eq!(layers[0]["binding_count"], 42);

    let rows = layers[0]["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 5);
    assert!(rows.iter().all(|row| row.as_array().unwrap().len() == 12));
    assert_eq!(rows[3][3], "L1");
}

#[test]
fn test_layers_single_layer_filter() {
    let (dir, path) = temp_file("corne.keymap", &two_layer_keymap());
    let output = run_keyviz(
        dir.path(),
        &["layers", path.to_str().unwrap(), "--layer", "lower", "--json"],
    );
    assert_eq!(output.status.code(), Some(0));

    let layers: serde_json::Value = serde_json::from_str(&stdout_of(&output)).unwrap();
    assert_eq!(layers.as_array().unwrap().len(), 1);
    assert_eq!(layers[0]["rows"][0][1], "LT2");
}

#[test]
fn test_layers_unknown_layer_is_validation_error() {
    let (dir, path) = temp_file("corne.keymap", &two_layer_keymap());
    let output = run_keyviz(
        dir.path(),
        &["layers", path.to_str().unwrap(), "--layer", "nope"],
    );

    assert_eq!(output.status.code(), Some(1));
    let stderr = stderr_of(&output);
    assert!(stderr.contains("Layer 'nope' not found"));
    assert!(stderr.contains("default, lower"));
}

#[test]
fn test_layers_without_file_uses_builtin_layout() {
    let dir = TempDir::new().unwrap();
    let output = run_keyviz(dir.path(), &["layers", "--json"]);
    assert_eq!(output.status.code(), Some(0));

    let layers: serde_json::Value = serde_json::from_str(&stdout_of(&output)).unwrap();
    let names: Vec<&str> = layers
        .as_array()
        .unwrap()
        .iter()
        .map(|layer| layer["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["default", "lower", "raise", "adjust"]);
}

#[test]
fn test_layers_missing_file_falls_back_with_warning() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.keymap");
    let output = run_keyviz(dir.path(), &["layers", missing.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(0));
    assert!(stderr_of(&output).contains("Keymap file not found"));
    assert!(stdout_of(&output).contains("Base (default)"));
}

#[test]
fn test_layers_missing_file_without_fallback_is_io_error() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        "[display]\nfallback_to_builtin = false\n",
    )
    .unwrap();

    let missing = dir.path().join("missing.keymap");
    let output = run_keyviz(dir.path(), &["layers", missing.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_layers_source_without_layers_is_validation_error() {
    let (dir, path) = temp_file("empty.keymap", "/ {\n    keymap {\n    };\n};\n");
    std::fs::write(
        dir.path().join("config.toml"),
        "[display]\nfallback_to_builtin = false\n",
    )
    .unwrap();

    let output = run_keyviz(dir.path(), &["layers", path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("No layer blocks found"));
}
