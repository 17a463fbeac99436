//! Multi-stop itineraries built from a shopping list.
//!
//! Stops keep the caller's order and repeats. Nothing here walks the graph;
//! callers wanting the walkways between consecutive stops run
//! [`shortest_path`](crate::routing::shortest_path) once per pair.

use tracing::debug;

use crate::error::{Error, Result};
use crate::routing::Route;
use crate::section::SectionRegistry;

/// Resolve every item name to its section, preserving input order.
///
/// Fails atomically with the full list of names that matched no section.
pub fn compose_stops<S: AsRef<str>>(registry: &SectionRegistry, item_names: &[S]) -> Result<Route> {
    let mut stops = Vec::with_capacity(item_names.len());
    let mut unresolved = Vec::new();

    for name in item_names {
        let name = name.as_ref();
        match registry.find(name) {
            Some(section) => stops.push(section.clone()),
            None => unresolved.push(name.to_string()),
        }
    }

    if !unresolved.is_empty() {
        debug!(count = unresolved.len(), "shopping list has unresolved items");
        return Err(Error::UnresolvedItems { names: unresolved });
    }

    Ok(Route::new(stops))
}
