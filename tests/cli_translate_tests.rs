//! End-to-end tests for `keyviz translate`.

use tempfile::TempDir;

mod fixtures;
use fixtures::*;

#[test]
fn test_translate_json() {
    let dir = TempDir::new().unwrap();
    let output = run_keyviz(
        dir.path(),
        &["translate", "&kp Q &kp W &mo 1 &trans &none", "--json"],
    );
    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        stderr_of(&output)
    );

    let results: serde_json::Value = serde_json::from_str(&stdout_of(&output)).unwrap();
    let labels: Vec<&str> = results
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["label"].as_str().unwrap())
        .collect();
    assert_eq!(labels, vec!["Q", "W", "L1", "▽", "✕"]);
    assert_eq!(results[2]["binding"], "&mo 1");
    assert_eq!(results[0]["source"], "table");
}

#[test]
fn test_translate_joins_arguments() {
    let dir = TempDir::new().unwrap();
    let output = run_keyviz(
        dir.path(),
        &["translate", "&lt", "2", "TAB", "&bt", "BT_SEL", "3", "--json"],
    );
    assert_eq!(output.status.code(), Some(0));

    let results: serde_json::Value = serde_json::from_str(&stdout_of(&output)).unwrap();
    assert_eq!(results[0]["binding"], "&lt 2 TAB");
    assert_eq!(results[0]["label"], "LT2");
    assert_eq!(results[1]["label"], "BT3");
}

#[test]
fn test_translate_marks_fallback() {
    let dir = TempDir::new().unwrap();
    let output = run_keyviz(dir.path(), &["translate", "&caps_word", "--json"]);
    assert_eq!(output.status.code(), Some(0));

    let results: serde_json::Value = serde_json::from_str(&stdout_of(&output)).unwrap();
    assert_eq!(results[0]["label"], "caps_");
    assert_eq!(results[0]["source"], "fallback");
}

#[test]
fn test_translate_human_output() {
    let dir = TempDir::new().unwrap();
    let output = run_keyviz(dir.path(), &["translate", "&kp SPACE"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout_of(&output).contains("&kp SPACE  ->  SPC"));
}

#[test]
fn test_translate_without_bindings_fails() {
    let dir = TempDir::new().unwrap();
    let output = run_keyviz(dir.path(), &["translate", "Q", "W"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("No bindings found"));
}
