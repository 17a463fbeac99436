//! Stops command handler: shopping-list itineraries.

use anyhow::Result;
use tracing::debug;

use storemap_lib::{
    compose_stops, plan_route, Route, RoutePlan, RouteRequest, RouteSummary, Venue,
};

use storemap_cli::output::{render_summary, OutputFormat};
use storemap_cli::terminal::ColorPalette;

use super::friendly_error;

/// Handle the stops subcommand.
///
/// Without `walk` the stops are printed in the order given. With `walk`
/// each consecutive pair is joined by its shortest path.
pub fn handle_stops_command(
    venue: &Venue,
    items: &[String],
    walk: bool,
    format: OutputFormat,
    palette: ColorPalette,
) -> Result<()> {
    let stops = compose_stops(venue.registry(), items).map_err(friendly_error)?;

    let summary = if walk {
        let plan = walk_stops(venue, &stops)?;
        RouteSummary::from_plan(venue.graph(), &plan)?
    } else {
        RouteSummary::from_stops(&stops)?
    };

    render_summary(&summary, format, palette)?;
    Ok(())
}

/// Join consecutive stops with shortest paths into one walking plan.
fn walk_stops(venue: &Venue, stops: &Route) -> Result<RoutePlan> {
    let sections = stops.sections();
    let Some(first) = sections.first() else {
        anyhow::bail!("no stops to walk");
    };

    let mut plan = plan_route(venue.graph(), &RouteRequest::new(&first.name, &first.name))
        .map_err(friendly_error)?;

    for (from, to) in stops.segments() {
        let leg = plan_route(venue.graph(), &RouteRequest::new(&from.name, &to.name))
            .map_err(friendly_error)?;
        debug!(from = %from.name, to = %to.name, hops = leg.hop_count(), "walked leg");
        plan.steps.extend(leg.steps.into_iter().skip(1));
        plan.total_weight += leg.total_weight;
        plan.goal = leg.goal;
    }

    Ok(plan)
}
