use std::fmt::Write;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::routing::{Route, RoutePlan};
use crate::section::Section;

/// Classifies the operation that produced a route summary.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RouteOutputKind {
    /// Shortest walking path between two sections.
    Path,
    /// Shopping-list itinerary in caller order.
    Stops,
}

impl RouteOutputKind {
    /// Human-readable label shown in textual renderings.
    pub fn label(self) -> &'static str {
        match self {
            RouteOutputKind::Path => "Path",
            RouteOutputKind::Stops => "Stops",
        }
    }
}

/// Presentation style for turning a [`RouteSummary`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteRenderMode {
    PlainText,
    /// One line per step prefixed with `+`, `|` or `-`.
    Basic,
}

/// Step within a summarised route.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteStep {
    pub index: usize,
    pub name: String,
    /// Centre of the section on the venue plan, as `[x, y]`.
    pub center: [f64; 2],
    /// Weight of the walkway from the previous step, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leg_weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
}

impl RouteStep {
    fn from_section(index: usize, section: &Section, leg_weight: Option<f64>) -> Self {
        let (x, y) = section.coordinates.center();
        Self {
            index,
            name: section.name.clone(),
            center: [x, y],
            leg_weight,
            count: section.count,
        }
    }
}

/// Structured representation of a route that higher-level consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteSummary {
    pub kind: RouteOutputKind,
    pub hops: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_weight: Option<f64>,
    pub start: String,
    pub goal: String,
    pub steps: Vec<RouteStep>,
}

impl RouteSummary {
    /// Convert a [`RoutePlan`] into a summary with names, centres and leg weights.
    pub fn from_plan(graph: &Graph, plan: &RoutePlan) -> Result<Self> {
        let registry = graph.registry();
        let mut steps = Vec::with_capacity(plan.steps.len());
        for (index, &id) in plan.steps.iter().enumerate() {
            let Some(section) = registry.section(id) else {
                continue;
            };
            let leg_weight = index
                .checked_sub(1)
                .and_then(|previous| graph.weight(plan.steps[previous], id));
            steps.push(RouteStep::from_section(index, section, leg_weight));
        }

        Self::from_steps(RouteOutputKind::Path, steps, Some(plan.total_weight))
    }

    /// Summarise a composed itinerary. Stops carry no walkway weights.
    pub fn from_stops(route: &Route) -> Result<Self> {
        let steps = route
            .sections()
            .iter()
            .enumerate()
            .map(|(index, section)| RouteStep::from_section(index, section, None))
            .collect();

        Self::from_steps(RouteOutputKind::Stops, steps, None)
    }

    fn from_steps(
        kind: RouteOutputKind,
        steps: Vec<RouteStep>,
        total_weight: Option<f64>,
    ) -> Result<Self> {
        let (Some(first), Some(last)) = (steps.first(), steps.last()) else {
            return Err(Error::EmptyRoutePlan);
        };
        let start = first.name.clone();
        let goal = last.name.clone();

        Ok(Self {
            kind,
            hops: steps.len() - 1,
            total_weight,
            start,
            goal,
            steps,
        })
    }

    /// Render the summary using the requested textual mode.
    pub fn render(&self, mode: RouteRenderMode) -> String {
        match mode {
            RouteRenderMode::PlainText => self.render_plain(),
            RouteRenderMode::Basic => self.render_basic(),
        }
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        match self.total_weight {
            Some(weight) => {
                let _ = writeln!(
                    buffer,
                    "{}: {} -> {} ({} hops, total weight {})",
                    self.kind.label(),
                    self.start,
                    self.goal,
                    self.hops,
                    weight
                );
            }
            None => {
                let _ = writeln!(
                    buffer,
                    "{}: {} -> {} ({} stops)",
                    self.kind.label(),
                    self.start,
                    self.goal,
                    self.steps.len()
                );
            }
        }

        match self.kind {
            RouteOutputKind::Path => {
                let joined = self
                    .steps
                    .iter()
                    .map(|step| step.name.as_str())
                    .collect::<Vec<_>>()
                    .join(" -> ");
                let _ = writeln!(buffer, "{joined}");
            }
            RouteOutputKind::Stops => {
                for step in &self.steps {
                    let _ = writeln!(buffer, "{:>3}: {}", step.index + 1, step.name);
                }
            }
        }

        buffer
    }

    fn render_basic(&self) -> String {
        let mut buffer = String::new();
        let last = self.steps.len().saturating_sub(1);
        for (position, step) in self.steps.iter().enumerate() {
            let prefix = if position == 0 {
                '+'
            } else if position == last {
                '-'
            } else {
                '|'
            };
            let _ = writeln!(buffer, "{} {}", prefix, step.name);
        }
        buffer
    }
}
