use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use storemap_cli::logging::{init_logging, LoggingConfig};
use storemap_cli::output::OutputFormat;
use storemap_cli::terminal::ColorPalette;

mod commands;

use commands::load_venue;
use commands::route::handle_route_command;
use commands::sections::handle_sections_command;
use commands::stops::handle_stops_command;
use commands::stores::handle_stores_command;

#[derive(Parser, Debug)]
#[command(author, version, about = "In-store route planning utilities")]
struct Cli {
    /// Venue layout JSON file (falls back to STOREMAP_LAYOUT).
    #[arg(long, global = true)]
    layout: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, global = true, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Disable ANSI colors in text output.
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the shortest walk between two sections.
    Route {
        /// Starting section name.
        #[arg(long = "from")]
        from: String,
        /// Destination section name.
        #[arg(long = "to")]
        to: String,
    },
    /// Turn a shopping list into an ordered list of sections.
    Stops {
        /// Section names in visiting order. Repeats are kept.
        #[arg(required = true)]
        items: Vec<String>,
        /// Join consecutive stops with their shortest walking paths.
        #[arg(long)]
        walk: bool,
    },
    /// List the sections registered for the venue.
    Sections,
    /// List stores, optionally filtered by address.
    Stores {
        /// Store directory JSON file.
        #[arg(long)]
        directory: PathBuf,
        /// Case-insensitive address substring to filter by.
        #[arg(long)]
        search: Option<String>,
    },
}

fn main() -> Result<()> {
    init_logging(&LoggingConfig::from_env());
    let cli = Cli::parse();
    let palette = ColorPalette::detect(cli.no_color);

    match &cli.command {
        Command::Route { from, to } => {
            let venue = load_venue(cli.layout.as_deref())?;
            handle_route_command(&venue, from, to, cli.format, palette)
        }
        Command::Stops { items, walk } => {
            let venue = load_venue(cli.layout.as_deref())?;
            handle_stops_command(&venue, items, *walk, cli.format, palette)
        }
        Command::Sections => {
            let venue = load_venue(cli.layout.as_deref())?;
            handle_sections_command(&venue, cli.format)
        }
        Command::Stores { directory, search } => {
            handle_stores_command(directory, search.as_deref(), cli.format)
        }
    }
}
