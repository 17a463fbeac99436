//! Point-to-point route planning over a venue graph.
//!
//! [`plan_route`] resolves the requested section names, runs the shortest
//! path search and returns an id-level [`RoutePlan`]. [`shortest_path`] is
//! the convenience form that hands back the sections themselves.

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::path::find_route_dijkstra;
use crate::section::{Section, SectionId, SectionRegistry};

/// Ordered sequence of sections: a walking path or a shopping itinerary.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct Route {
    sections: Vec<Section>,
}

impl Route {
    pub fn new(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Display names in route order.
    pub fn names(&self) -> Vec<&str> {
        self.sections
            .iter()
            .map(|section| section.name.as_str())
            .collect()
    }

    /// Consecutive pairs of sections. Empty for routes shorter than two.
    pub fn segments(&self) -> impl Iterator<Item = (&Section, &Section)> {
        self.sections.windows(2).map(|pair| (&pair[0], &pair[1]))
    }

    /// Whether the route has at least one segment to walk.
    pub fn is_traversable(&self) -> bool {
        self.sections.len() >= 2
    }

    pub fn into_sections(self) -> Vec<Section> {
        self.sections
    }
}

/// High-level route planning request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRequest {
    pub start: String,
    pub goal: String,
}

impl RouteRequest {
    pub fn new(start: impl Into<String>, goal: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
        }
    }
}

/// Planned route returned by the library.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutePlan {
    pub start: SectionId,
    pub goal: SectionId,
    pub steps: Vec<SectionId>,
    pub total_weight: f64,
}

impl RoutePlan {
    /// Number of walkway segments in the route.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    /// Resolve the planned section ids into a [`Route`].
    pub fn to_route(&self, registry: &SectionRegistry) -> Route {
        Route::new(
            self.steps
                .iter()
                .filter_map(|&id| registry.section(id).cloned())
                .collect(),
        )
    }
}

fn resolve_section(registry: &SectionRegistry, name: &str) -> Result<SectionId> {
    registry
        .section_id_by_name(name)
        .ok_or_else(|| Error::UnknownSection {
            name: name.to_string(),
        })
}

/// Compute the minimum-weight route between the requested sections.
///
/// Unknown names fail with [`Error::UnknownSection`]; two known sections with
/// no walkway between them fail with [`Error::RouteNotFound`].
pub fn plan_route(graph: &Graph, request: &RouteRequest) -> Result<RoutePlan> {
    let registry = graph.registry();
    let start_id = resolve_section(registry, &request.start)?;
    let goal_id = resolve_section(registry, &request.goal)?;

    let Some((steps, total_weight)) = find_route_dijkstra(graph, start_id, goal_id) else {
        debug!(start = %request.start, goal = %request.goal, "no route between sections");
        return Err(Error::RouteNotFound {
            start: registry
                .section_name(start_id)
                .unwrap_or(&request.start)
                .to_string(),
            goal: registry
                .section_name(goal_id)
                .unwrap_or(&request.goal)
                .to_string(),
        });
    };

    debug!(
        start = %request.start,
        goal = %request.goal,
        hops = steps.len().saturating_sub(1),
        total_weight,
        "planned route"
    );

    Ok(RoutePlan {
        start: start_id,
        goal: goal_id,
        steps,
        total_weight,
    })
}

/// Shortest route between two named sections, as sections.
pub fn shortest_path(graph: &Graph, start: &str, goal: &str) -> Result<Route> {
    let plan = plan_route(graph, &RouteRequest::new(start, goal))?;
    Ok(plan.to_route(graph.registry()))
}
