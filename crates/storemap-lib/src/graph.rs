use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::section::{SectionId, SectionRegistry};

/// Bidirectional walkway between two named sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    pub from: String,
    pub to: String,
    pub weight: f64,
}

impl Connection {
    pub fn new(from: impl Into<String>, to: impl Into<String>, weight: f64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            weight,
        }
    }
}

/// Edge within the routing graph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub target: SectionId,
    pub weight: f64,
}

/// Connection dropped during graph construction because an endpoint is not
/// a registered section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnresolvedConnection {
    /// Position of the connection in the input list.
    pub index: usize,
    pub from: String,
    pub to: String,
    /// Endpoint names that did not resolve.
    pub missing: Vec<String>,
}

/// Immutable weighted adjacency structure for one venue.
///
/// Every registered section has an entry, including isolated ones. Cloning
/// shares the underlying data.
#[derive(Debug, Clone)]
pub struct Graph {
    registry: SectionRegistry,
    adjacency: Arc<Vec<Vec<Edge>>>,
}

impl Graph {
    /// Registry the graph was built from.
    pub fn registry(&self) -> &SectionRegistry {
        &self.registry
    }

    /// Return the neighbours for a given section identifier.
    pub fn neighbours(&self, section: SectionId) -> &[Edge] {
        self.adjacency
            .get(section)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Weight of the walkway between two sections, if they are connected.
    pub fn weight(&self, from: SectionId, to: SectionId) -> Option<f64> {
        self.neighbours(from)
            .iter()
            .find(|edge| edge.target == to)
            .map(|edge| edge.weight)
    }

    pub fn section_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected walkways.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }
}

/// Result of [`build_graph`]: the graph plus the connections it dropped.
#[derive(Debug, Clone)]
pub struct GraphBuild {
    pub graph: Graph,
    pub unresolved: Vec<UnresolvedConnection>,
}

/// Build the undirected routing graph for a venue.
///
/// Connections naming an unknown section are skipped and reported in
/// [`GraphBuild::unresolved`]. When a pair appears more than once the last
/// weight seen wins. A weight that is not a positive finite number fails the
/// whole build.
pub fn build_graph(registry: &SectionRegistry, connections: &[Connection]) -> Result<GraphBuild> {
    let mut adjacency: Vec<Vec<Edge>> = vec![Vec::new(); registry.len()];
    let mut unresolved = Vec::new();

    for (index, connection) in connections.iter().enumerate() {
        if !(connection.weight.is_finite() && connection.weight > 0.0) {
            return Err(Error::InvalidWeight {
                from: connection.from.clone(),
                to: connection.to.clone(),
                weight: connection.weight,
            });
        }

        let from = registry.section_id_by_name(&connection.from);
        let to = registry.section_id_by_name(&connection.to);
        let (Some(from), Some(to)) = (from, to) else {
            let missing = [(from, &connection.from), (to, &connection.to)]
                .into_iter()
                .filter(|(id, _)| id.is_none())
                .map(|(_, name)| name.clone())
                .collect::<Vec<_>>();
            warn!(
                index,
                from = %connection.from,
                to = %connection.to,
                "dropping connection with unresolved endpoint(s): {}",
                missing.join(", ")
            );
            unresolved.push(UnresolvedConnection {
                index,
                from: connection.from.clone(),
                to: connection.to.clone(),
                missing,
            });
            continue;
        };

        if from == to {
            debug!(index, section = %connection.from, "ignoring self-loop connection");
            continue;
        }

        insert_edge(&mut adjacency, from, to, connection.weight);
        insert_edge(&mut adjacency, to, from, connection.weight);
    }

    let graph = Graph {
        registry: registry.clone(),
        adjacency: Arc::new(adjacency),
    };

    debug!(
        sections = graph.section_count(),
        edges = graph.edge_count(),
        dropped = unresolved.len(),
        "built venue graph"
    );

    Ok(GraphBuild { graph, unresolved })
}

fn insert_edge(adjacency: &mut [Vec<Edge>], from: SectionId, to: SectionId, weight: f64) {
    let edges = &mut adjacency[from];
    if let Some(existing) = edges.iter_mut().find(|edge| edge.target == to) {
        if existing.weight != weight {
            debug!(
                from,
                to,
                previous = existing.weight,
                weight,
                "connection repeated; later weight wins"
            );
        }
        existing.weight = weight;
        return;
    }
    edges.push(Edge { target: to, weight });
}
