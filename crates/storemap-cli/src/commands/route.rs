//! Route command handler for computing the shortest walk between sections.

use anyhow::Result;

use storemap_lib::{plan_route, RouteRequest, RouteSummary, Venue};

use storemap_cli::output::{render_summary, OutputFormat};
use storemap_cli::terminal::ColorPalette;

use super::friendly_error;

/// Handle the route subcommand.
pub fn handle_route_command(
    venue: &Venue,
    from: &str,
    to: &str,
    format: OutputFormat,
    palette: ColorPalette,
) -> Result<()> {
    let request = RouteRequest::new(from, to);
    let plan = plan_route(venue.graph(), &request).map_err(friendly_error)?;
    let summary = RouteSummary::from_plan(venue.graph(), &plan)?;
    render_summary(&summary, format, palette)?;
    Ok(())
}
