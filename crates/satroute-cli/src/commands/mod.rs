// Handlers for CLI subcommands. main.rs parses arguments and dispatches here.

pub mod graph;
pub mod route;

use anyhow::{Context, Result};
use satroute_lib::{fetch_constellation, DataSource, FetchOptions, ParsedConstellation};

/// Fetch and parse the constellation, attaching the source to any failure.
pub async fn load_constellation(
    source: &DataSource,
    options: &FetchOptions,
) -> Result<ParsedConstellation> {
    fetch_constellation(source, options)
        .await
        .with_context(|| format!("failed to load constellation from {source}"))
}
