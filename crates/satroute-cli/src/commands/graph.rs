//! Graph command handler for inspecting line-of-sight links.

use anyhow::Result;
use tracing::info;

use satroute_cli::output::OutputFormat;
use satroute_cli::terminal::ColorPalette;
use satroute_lib::{build_graph_with_body, DataSource, FetchOptions, RouteOptions};

use super::load_constellation;

pub async fn handle_graph_command(
    source: &DataSource,
    fetch: &FetchOptions,
    options: &RouteOptions,
    format: OutputFormat,
) -> Result<String> {
    let parsed = load_constellation(source, fetch).await?;
    let graph = build_graph_with_body(&parsed.constellation, &options.body);
    info!(
        nodes = graph.node_count(),
        links = graph.edge_count(),
        "built visibility graph"
    );
    format.render_graph(&graph, &ColorPalette::detect())
}
