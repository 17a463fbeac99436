//! Storemap library entry points.
//!
//! This crate loads venue layouts, builds the section registry and weighted
//! walkway graph for a store, finds shortest walking paths between sections
//! and turns shopping lists into ordered itineraries. Higher-level consumers
//! (the CLI, app front-ends) should only depend on the functions exported
//! here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod compose;
pub mod error;
pub mod graph;
pub mod output;
pub mod path;
pub mod routing;
pub mod section;
pub mod stores;
pub mod venue;

pub use compose::compose_stops;
pub use error::{Error, Result};
pub use graph::{build_graph, Connection, Edge, Graph, GraphBuild, UnresolvedConnection};
pub use output::{RouteOutputKind, RouteRenderMode, RouteStep, RouteSummary};
pub use path::find_route_dijkstra;
pub use routing::{plan_route, shortest_path, Route, RoutePlan, RouteRequest};
pub use section::{normalize_name, Coordinates, Section, SectionId, SectionRegistry};
pub use stores::{load_store_directory, Store, StoreDirectory};
pub use venue::{load_layout, SharedVenue, Venue, VenueLayout};
