mod common;

use std::fs;

use storemap_lib::{load_layout, load_store_directory, Error, SharedVenue, Venue, VenueLayout};
use tempfile::TempDir;

use common::{fixture_layout_path, fixture_venue, fixtures_dir};

#[test]
fn fixture_layout_loads_sections_in_file_order() {
    let layout = load_layout(&fixture_layout_path()).expect("layout loads");
    let names: Vec<_> = layout.sections.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names.first(), Some(&"Entrance"));
    assert_eq!(names.last(), Some(&"Garden Centre"));
    assert_eq!(layout.paths.len(), 11);
}

#[test]
fn duplicate_section_fails_load() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let path = temp_dir.path().join("layout.json");
    fs::write(
        &path,
        r##"{"sections": [
            {"name": "Dairy", "color": "#fff", "coordinates": {"x": 0, "y": 0, "width": 1, "height": 1}},
            {"name": "dairy ", "color": "#000", "coordinates": {"x": 2, "y": 0, "width": 1, "height": 1}}
        ], "paths": []}"##,
    )
    .expect("write layout");

    let error = Venue::load(&path).expect_err("duplicates rejected");
    assert!(matches!(error, Error::DuplicateSection { .. }));
}

#[test]
fn zero_weight_fails_load() {
    let mut layout = load_layout(&fixture_layout_path()).expect("layout loads");
    layout.paths[0].weight = 0.0;

    let error = Venue::from_layout(layout).expect_err("zero weight rejected");
    assert!(matches!(error, Error::InvalidWeight { .. }));
}

#[test]
fn missing_layout_file_is_io_error() {
    let error = load_layout(&fixtures_dir().join("absent.json")).expect_err("missing file");
    assert!(matches!(error, Error::Io(_)));
}

#[test]
fn malformed_layout_is_json_error() {
    let error = VenueLayout::from_reader("{\"sections\": 3}".as_bytes()).expect_err("bad json");
    assert!(matches!(error, Error::Json(_)));
}

#[test]
fn reload_hands_out_a_new_snapshot() {
    let shared = SharedVenue::new(fixture_venue());
    let before = shared.current();

    let mut layout = load_layout(&fixture_layout_path()).expect("layout loads");
    layout.paths.retain(|path| path.to != "Checkout");
    shared.replace(Venue::from_layout(layout).expect("venue builds"));

    let after = shared.current();
    assert_eq!(before.graph().edge_count(), 10);
    assert_eq!(after.graph().edge_count(), 8);
}

#[test]
fn store_directory_fixture_filters_by_address() {
    let directory =
        load_store_directory(&fixtures_dir().join("stores.json")).expect("directory loads");
    let ids: Vec<_> = directory
        .search("MARKET")
        .into_iter()
        .map(|store| store.store_id.as_str())
        .collect();
    assert_eq!(ids, vec!["S-1001", "S-1003"]);
}
