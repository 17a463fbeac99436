//! Output formatting for route rendering.
//!
//! Formatters for printing route summaries as tagged text, the minimal
//! `basic` path list, or JSON.

use std::fmt::Write as _;
use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;
use storemap_lib::{RouteOutputKind, RouteRenderMode, RouteSummary};

use crate::terminal::ColorPalette;

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Tagged, optionally coloured text.
    #[default]
    Text,
    /// `+`/`|`/`-` prefixed section list.
    Basic,
    /// Pretty-printed JSON.
    Json,
}

/// Print a route summary in the requested format.
pub fn render_summary(
    summary: &RouteSummary,
    format: OutputFormat,
    palette: ColorPalette,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => {
            print!("{}", format_text(summary, palette));
            Ok(())
        }
        OutputFormat::Basic => {
            print!("{}", summary.render(RouteRenderMode::Basic));
            Ok(())
        }
        OutputFormat::Json => render_json(summary),
    }
}

/// Format a route summary as tagged text.
///
/// Paths show the walkway weight taken into each section and the total;
/// itineraries list their stops in order.
pub fn format_text(summary: &RouteSummary, palette: ColorPalette) -> String {
    let mut buffer = String::new();
    let p = palette;

    match summary.total_weight {
        Some(total) => {
            let _ = writeln!(
                buffer,
                "{} from {} to {} ({} hops, total weight {}):",
                summary.kind.label(),
                summary.start,
                summary.goal,
                summary.hops,
                total
            );
        }
        None => {
            let _ = writeln!(
                buffer,
                "{} from {} to {} ({} stops):",
                summary.kind.label(),
                summary.start,
                summary.goal,
                summary.steps.len()
            );
        }
    }

    let last = summary.steps.len().saturating_sub(1);
    for (position, step) in summary.steps.iter().enumerate() {
        let (tag, color) = if position == 0 {
            ("STRT", p.tag_start)
        } else if position == last {
            ("GOAL", p.tag_goal)
        } else if summary.kind == RouteOutputKind::Stops {
            ("STOP", p.tag_stop)
        } else {
            ("WALK", p.tag_walk)
        };

        let _ = write!(
            buffer,
            " {color}[{tag}]{reset} {name_color}{name}{reset}",
            reset = p.reset,
            name_color = p.white_bold,
            name = step.name
        );
        if let Some(weight) = step.leg_weight {
            let _ = write!(buffer, " {}(+{}){}", p.green, weight, p.reset);
        }
        if let Some(count) = step.count {
            let _ = write!(buffer, " {}[count {}]{}", p.gray, count, p.reset);
        }
        buffer.push('\n');
    }

    buffer
}

/// Print any serialisable value as pretty JSON followed by a newline.
pub fn render_json<T: Serialize>(value: &T) -> io::Result<()> {
    let mut stdout = io::stdout();
    serde_json::to_writer_pretty(&mut stdout, value).map_err(io::Error::other)?;
    stdout.write_all(b"\n")?;
    Ok(())
}
