//! Stores command handler: list and filter the store directory.

use std::path::Path;

use anyhow::{Context, Result};

use storemap_lib::load_store_directory;

use storemap_cli::output::{render_json, OutputFormat};

/// Handle the stores subcommand.
pub fn handle_stores_command(
    directory: &Path,
    search: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    let stores = load_store_directory(directory)
        .with_context(|| format!("failed to load store directory from {}", directory.display()))?;
    let matches = stores.search(search.unwrap_or(""));

    match format {
        OutputFormat::Json => render_json(&matches)?,
        OutputFormat::Text | OutputFormat::Basic => {
            if matches.is_empty() {
                println!("No stores match.");
            }
            for store in matches {
                println!("{}  {}", store.store_id, store.address);
            }
        }
    }

    Ok(())
}
