//! Venue layout documents and the immutable snapshots built from them.
//!
//! A layout file is the JSON document the store app ships per venue:
//!
//! ```json
//! {
//!   "sections": [{"name": "Dairy", "color": "#AEC6CF",
//!                 "coordinates": {"x": 0, "y": 0, "width": 80, "height": 40}}],
//!   "paths": [{"from": "Dairy", "to": "Checkout", "weight": 3}]
//! }
//! ```
//!
//! Loading a layout produces a [`Venue`]: a registry and graph pair that is
//! never modified afterwards. Reloading builds a new `Venue`; [`SharedVenue`]
//! swaps the snapshot handed to readers without touching the previous one.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::Result;
use crate::graph::{build_graph, Connection, Graph, UnresolvedConnection};
use crate::section::{Section, SectionRegistry};

/// Raw venue layout as stored on disk.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VenueLayout {
    pub sections: Vec<Section>,
    #[serde(default)]
    pub paths: Vec<Connection>,
}

impl VenueLayout {
    /// Decode a layout from any JSON reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }
}

/// Load a venue layout from a JSON file.
pub fn load_layout(path: &Path) -> Result<VenueLayout> {
    let file = File::open(path)?;
    let layout = VenueLayout::from_reader(BufReader::new(file))?;
    info!(
        path = %path.display(),
        sections = layout.sections.len(),
        paths = layout.paths.len(),
        "loaded venue layout"
    );
    Ok(layout)
}

/// Registry and graph for one loaded layout.
#[derive(Debug, Clone)]
pub struct Venue {
    registry: SectionRegistry,
    graph: Graph,
    unresolved: Vec<UnresolvedConnection>,
}

impl Venue {
    /// Build the registry and graph for a layout.
    pub fn from_layout(layout: VenueLayout) -> Result<Self> {
        let registry = SectionRegistry::load(layout.sections)?;
        let build = build_graph(&registry, &layout.paths)?;
        if !build.unresolved.is_empty() {
            warn!(
                dropped = build.unresolved.len(),
                "venue layout references unknown sections"
            );
        }
        Ok(Self {
            registry,
            graph: build.graph,
            unresolved: build.unresolved,
        })
    }

    /// Load a layout file and build its venue.
    pub fn load(path: &Path) -> Result<Self> {
        Self::from_layout(load_layout(path)?)
    }

    pub fn registry(&self) -> &SectionRegistry {
        &self.registry
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Connections dropped while building the graph.
    pub fn unresolved_connections(&self) -> &[UnresolvedConnection] {
        &self.unresolved
    }
}

/// Holder for the current venue snapshot, shared between concurrent readers.
#[derive(Debug)]
pub struct SharedVenue {
    current: RwLock<Arc<Venue>>,
}

impl SharedVenue {
    pub fn new(venue: Venue) -> Self {
        Self {
            current: RwLock::new(Arc::new(venue)),
        }
    }

    /// Snapshot to use for the duration of a query.
    pub fn current(&self) -> Arc<Venue> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Install a freshly loaded venue, returning the previous snapshot.
    pub fn replace(&self, venue: Venue) -> Arc<Venue> {
        let mut guard = self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *guard, Arc::new(venue))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LAYOUT: &str = r##"{
        "sections": [
            {"name": "Entrance", "color": "#77DD77",
             "coordinates": {"x": 0, "y": 0, "width": 50, "height": 50}},
            {"name": "Dairy", "color": "#AEC6CF",
             "coordinates": {"x": 60, "y": 0, "width": 50, "height": 50}, "count": 12}
        ],
        "paths": [
            {"from": "Entrance", "to": "Dairy", "weight": 4},
            {"from": "Entrance", "to": "Garden", "weight": 1}
        ]
    }"##;

    #[test]
    fn layout_builds_venue_with_diagnostics() {
        let layout = VenueLayout::from_reader(LAYOUT.as_bytes()).expect("layout parses");
        let venue = Venue::from_layout(layout).expect("venue builds");

        assert_eq!(venue.registry().len(), 2);
        assert_eq!(venue.graph().edge_count(), 1);
        assert_eq!(venue.registry().find("dairy").unwrap().count, Some(12));
        assert_eq!(venue.unresolved_connections().len(), 1);
        assert_eq!(venue.unresolved_connections()[0].missing, vec!["Garden"]);
    }

    #[test]
    fn missing_paths_means_isolated_sections() {
        let layout = VenueLayout::from_reader(
            r##"{"sections": [{"name": "Solo", "color": "#000",
                "coordinates": {"x": 0, "y": 0, "width": 1, "height": 1}}]}"##
                .as_bytes(),
        )
        .unwrap();
        assert!(layout.paths.is_empty());
        let venue = Venue::from_layout(layout).unwrap();
        assert!(venue.graph().neighbours(0).is_empty());
    }

    #[test]
    fn replace_leaves_previous_snapshot_untouched() {
        let first = Venue::from_layout(VenueLayout::from_reader(LAYOUT.as_bytes()).unwrap())
            .unwrap();
        let shared = SharedVenue::new(first);
        let held = shared.current();

        let previous = shared.replace(Venue::from_layout(VenueLayout::default()).unwrap());

        assert!(Arc::ptr_eq(&held, &previous));
        assert_eq!(held.registry().len(), 2);
        assert!(shared.current().registry().is_empty());
    }
}
