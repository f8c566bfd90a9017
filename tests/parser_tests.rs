//! Integration tests for keymap parsing, the layer store and regeneration.

use keyviz::constants::{EMPTY_KEY, GRID_COLS, GRID_ROWS, TRANSPARENT_KEY};
use keyviz::parser::{generate_keymap, parse_keymap, parse_keymap_str};
use keyviz::services::LayerStore;

mod fixtures;
use fixtures::*;

#[test]
fn test_reduced_layout_places_thumb_keys() {
    let layers = parse_keymap_str(&two_layer_keymap());
    assert_eq!(layers.len(), 2);

    let base = &layers[0];
    assert_eq!(base.name, "default");
    assert_eq!(base.display_name, "Base");
    assert_eq!(base.raw_bindings.len(), 42);

    assert_eq!(base.keymap.get(0, 0), Some("A"));
    assert_eq!(base.keymap.get(1, 0), Some("M"));
    assert_eq!(base.keymap.get(2, 11), Some("9"));

    let thumbs: Vec<&str> = [2, 3, 4, 7, 8, 9]
        .iter()
        .map(|&col| base.keymap.get(3, col).unwrap())
        .collect();
    assert_eq!(thumbs, vec!["GUI", "L1", "SPC", "ENT", "L2", "RALT"]);

    for col in [0, 1, 5, 6, 10, 11] {
        assert_eq!(base.keymap.get(3, col), Some(EMPTY_KEY));
    }
    for col in 0..GRID_COLS {
        assert_eq!(base.keymap.get(4, col), Some(EMPTY_KEY));
    }
}

#[test]
fn test_missing_display_name_uses_uppercased_identifier() {
    let layers = parse_keymap_str(&two_layer_keymap());
    let lower = &layers[1];
    assert_eq!(lower.display_name, "LOWER");
    assert_eq!(lower.keymap.get(0, 0), Some("BT0"));
    assert_eq!(lower.keymap.get(0, 1), Some("LT2"));
}

#[test]
fn test_full_layout_is_row_major() {
    let source = keymap_source(&[("game", Some("Game"), full_bindings())]);
    let layers = parse_keymap_str(&source);
    let keymap = &layers[0].keymap;

    assert_eq!(keymap.rows().len(), GRID_ROWS);
    assert_eq!(keymap.get(0, 0), Some(TRANSPARENT_KEY));
    assert_eq!(keymap.get(0, 1), Some("F2"));
    assert_eq!(keymap.get(4, 11), Some("F12"));
}

#[test]
fn test_irregular_count_still_fills_grid() {
    let source = keymap_source(&[("odd", None, "&kp A &kp B &kp C".to_string())]);
    let layers = parse_keymap_str(&source);
    let keymap = &layers[0].keymap;

    assert_eq!(keymap.rows().len(), GRID_ROWS);
    assert!(keymap.rows().iter().all(|row| row.len() == GRID_COLS));
    assert_eq!(keymap.get(0, 2), Some("C"));
    assert_eq!(keymap.get(0, 3), Some(EMPTY_KEY));
}

#[test]
fn test_parse_keymap_reads_file() {
    let (_dir, path) = temp_file("corne.keymap", &two_layer_keymap());
    let layers = parse_keymap(&path).unwrap();
    assert_eq!(layers.len(), 2);

    let (_dir, missing) = temp_file("other.txt", "");
    let err = parse_keymap(&missing.with_file_name("absent.keymap")).unwrap_err();
    assert!(err.to_string().contains("not found"));
}

#[test]
fn test_store_edit_export_reload() {
    let mut store = LayerStore::new();
    store.load(&two_layer_keymap()).unwrap();
    assert_eq!(store.active_layer().unwrap().name, "default");

    assert!(store.update_cell("lower", 0, 2, "ESC"));
    assert!(store.update_cell("default", 3, 3, "L2"));
    assert!(store.is_cell_modified("lower", 0, 2));

    let exported = generate_keymap(store.layers());
    let mut reloaded = LayerStore::new();
    reloaded.load(&exported).unwrap();

    assert_eq!(reloaded.layer_names(), store.layer_names());
    for (before, after) in store.layers().iter().zip(reloaded.layers()) {
        assert_eq!(before.keymap, after.keymap);
        assert_eq!(before.display_name, after.display_name);
    }
    assert!(!reloaded.is_cell_modified("lower", 0, 2));
}

#[test]
fn test_failed_load_keeps_previous_layers() {
    let mut store = LayerStore::new();
    store.load(&two_layer_keymap()).unwrap();
    store.update_cell("default", 0, 0, "X");

    assert!(store.load("/ { keymap { }; };").is_err());
    assert_eq!(store.layer_names(), vec!["default", "lower"]);
    assert_eq!(store.get_layer("default").unwrap().keymap.get(0, 0), Some("X"));
}
