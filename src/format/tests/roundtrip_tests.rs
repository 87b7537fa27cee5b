//! Document save/load round-trip tests.

use std::collections::HashSet;

use crate::color::Color;
use crate::document::AnnotationDocument;
use crate::geometry::Cell;

fn build_document() -> AnnotationDocument {
    let mut doc = AnnotationDocument::new("maps/region.png", 20).unwrap();
    let store = doc.store_mut();

    store
        .create_group("Forest", Some(Color::Named("green".to_string())))
        .unwrap();
    store.assign(Cell::new(0, 0)).unwrap();
    store.assign(Cell::new(1, 0)).unwrap();
    store.assign(Cell::new(2, 3)).unwrap();

    store
        .create_group("Water", Some(Color::Rgb([0, 64, 255])))
        .unwrap();
    store.assign(Cell::new(5, 5)).unwrap();

    store.create_group("Desert", None).unwrap();
    doc
}

#[test]
fn test_roundtrip_preserves_everything() {
    let original = build_document();
    let bytes = original.to_bytes().unwrap();
    let loaded = AnnotationDocument::from_bytes(&bytes).unwrap();

    assert_eq!(loaded.image_path(), original.image_path());
    assert_eq!(loaded.hex_size(), original.hex_size());

    let names: HashSet<&str> = loaded.store().group_names().collect();
    assert_eq!(names, original.store().group_names().collect::<HashSet<_>>());

    for group in original.store().groups() {
        let reloaded = loaded.store().group(group.name()).unwrap();
        // Set equality, not array order.
        assert_eq!(reloaded.cells(), group.cells());
        assert_eq!(reloaded.color(), group.color());
    }
}

#[test]
fn test_loaded_document_has_no_active_group() {
    let bytes = build_document().to_bytes().unwrap();
    let loaded = AnnotationDocument::from_bytes(&bytes).unwrap();
    assert_eq!(loaded.store().active_group(), None);
}

#[test]
fn test_rgb_color_survives_as_hex_string() {
    let bytes = build_document().to_bytes().unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["group_colors"]["Water"], "#0040ff");
}

#[test]
fn test_legacy_multi_owner_document_repaired_on_load() {
    // Documents written before ownership was enforced could list one cell
    // under several groups. Load repairs this: groups are visited in
    // sorted-name order and the last assignment wins.
    let json = br#"{
        "image_path": "map.png",
        "hex_size": 20,
        "groups": {
            "Forest": [[0, 0], [1, 0]],
            "Water": [[0, 0]]
        },
        "group_colors": {"Forest": "green", "Water": "blue"}
    }"#;
    let doc = AnnotationDocument::from_bytes(json).unwrap();

    assert_eq!(doc.store().owner_of(Cell::new(0, 0)), Some("Water"));
    let forest: HashSet<Cell> = doc.store().cells_of("Forest").unwrap().clone();
    assert_eq!(forest, HashSet::from([Cell::new(1, 0)]));
}

#[test]
fn test_missing_color_falls_back_to_palette() {
    let json = br#"{
        "image_path": "map.png",
        "hex_size": 20,
        "groups": {"Alpha": [[0, 0]], "Beta": [[1, 1]]},
        "group_colors": {"Beta": "not a #color but fine as a name"}
    }"#;
    let doc = AnnotationDocument::from_bytes(json).unwrap();
    // "Alpha" is the first group in sorted order, so it gets palette slot 0.
    assert_eq!(
        doc.store().group("Alpha").unwrap().color(),
        &Color::Named("red".to_string())
    );
}

#[test]
fn test_empty_group_name_is_malformed() {
    let json = br#"{
        "image_path": "map.png",
        "hex_size": 20,
        "groups": {"": [[0, 0]]}
    }"#;
    assert!(AnnotationDocument::from_bytes(json).is_err());
}

#[test]
fn test_save_and_load_file() {
    let dir = std::env::temp_dir().join("hgat_roundtrip_test");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("doc.json");

    let original = build_document();
    original.save(&path).unwrap();
    let loaded = AnnotationDocument::load(&path).unwrap();
    assert_eq!(loaded.hex_size(), original.hex_size());
    assert_eq!(
        loaded.store().cells_of("Forest").unwrap(),
        original.store().cells_of("Forest").unwrap()
    );

    std::fs::remove_file(&path).ok();
}
