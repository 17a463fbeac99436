//! Shared fixture helpers for integration tests.

use std::path::PathBuf;

use storemap_lib::{Coordinates, Section, Venue};

/// Path to fixtures directory used by tests (layout, store directory).
#[allow(dead_code)]
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// Path to the sample store layout.
#[allow(dead_code)]
pub fn fixture_layout_path() -> PathBuf {
    fixtures_dir().join("store_layout.json")
}

/// Load the sample store layout into a venue.
#[allow(dead_code)]
pub fn fixture_venue() -> Venue {
    Venue::load(&fixture_layout_path()).expect("fixture layout loads")
}

/// Unit-square section with the given name.
#[allow(dead_code)]
pub fn section(name: &str) -> Section {
    Section {
        name: name.to_string(),
        color: "#CFCFC4".to_string(),
        coordinates: Coordinates {
            x: 0.0,
            y: 0.0,
            width: 1.0,
            height: 1.0,
        },
        count: None,
    }
}
