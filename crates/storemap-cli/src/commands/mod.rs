// Module exports for CLI subcommands
//
// Each module handles one subcommand; main.rs parses arguments and dispatches.

pub mod route;
pub mod sections;
pub mod stops;
pub mod stores;

use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use storemap_lib::{Error as LibError, Venue};

/// Environment variable consulted when `--layout` is not given.
pub const LAYOUT_ENV: &str = "STOREMAP_LAYOUT";

/// Resolve the venue layout path from the flag or the environment.
pub fn resolve_layout_path(flag: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = flag {
        return Ok(path.to_path_buf());
    }
    match std::env::var_os(LAYOUT_ENV) {
        Some(value) if !value.is_empty() => Ok(PathBuf::from(value)),
        _ => bail!("no venue layout given; pass --layout <PATH> or set {LAYOUT_ENV}"),
    }
}

/// Load and build the venue for the resolved layout path.
pub fn load_venue(flag: Option<&Path>) -> Result<Venue> {
    let path = resolve_layout_path(flag)?;
    Venue::load(&path)
        .with_context(|| format!("failed to load venue layout from {}", path.display()))
}

/// Turn recoverable library errors into messages a shopper can act on.
pub fn friendly_error(err: LibError) -> anyhow::Error {
    match err {
        LibError::UnknownSection { name } => {
            anyhow!("Unknown section '{name}'. Run `sections` to list valid names.")
        }
        LibError::RouteNotFound { start, goal } => {
            anyhow!("No walkable route from '{start}' to '{goal}'.")
        }
        LibError::UnresolvedItems { names } => {
            let listed = names
                .iter()
                .map(|name| format!("'{name}'"))
                .collect::<Vec<_>>()
                .join(", ");
            anyhow!("No section matches: {listed}. Please check the list and retry.")
        }
        other => anyhow::Error::new(other),
    }
}
