//! Sections command handler: list the venue's registered sections.

use anyhow::Result;
use serde::Serialize;

use storemap_lib::{Coordinates, Venue};

use storemap_cli::output::{render_json, OutputFormat};

#[derive(Debug, Serialize)]
struct SectionListing<'a> {
    name: &'a str,
    color: &'a str,
    coordinates: Coordinates,
    #[serde(skip_serializing_if = "Option::is_none")]
    count: Option<i64>,
    neighbours: Vec<&'a str>,
}

/// Handle the sections subcommand.
pub fn handle_sections_command(venue: &Venue, format: OutputFormat) -> Result<()> {
    let registry = venue.registry();
    let listings: Vec<SectionListing<'_>> = registry
        .iter()
        .map(|(id, section)| SectionListing {
            name: &section.name,
            color: &section.color,
            coordinates: section.coordinates,
            count: section.count,
            neighbours: venue
                .graph()
                .neighbours(id)
                .iter()
                .filter_map(|edge| registry.section_name(edge.target))
                .collect(),
        })
        .collect();

    match format {
        OutputFormat::Json => render_json(&listings)?,
        OutputFormat::Text | OutputFormat::Basic => {
            for (index, listing) in listings.iter().enumerate() {
                let mut line = format!(
                    "{:>3}. {} ({} walkways)",
                    index + 1,
                    listing.name,
                    listing.neighbours.len()
                );
                if let Some(count) = listing.count {
                    line.push_str(&format!(" [count {count}]"));
                }
                println!("{line}");
            }
        }
    }

    Ok(())
}
