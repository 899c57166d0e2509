//! Route command handler for finding the relay chain between ground stations.

use anyhow::{Context, Result};

use satroute_cli::output::OutputFormat;
use satroute_cli::terminal::ColorPalette;
use satroute_lib::{
    plan_route, DataSource, Error as RouteError, FetchOptions, RouteOptions, RouteSummary,
};

use super::load_constellation;

/// Fetch the constellation, plan the fewest-hop route and render it.
pub async fn handle_route_command(
    source: &DataSource,
    fetch: &FetchOptions,
    options: &RouteOptions,
    format: OutputFormat,
) -> Result<String> {
    let parsed = load_constellation(source, fetch).await?;

    let plan = match plan_route(&parsed.constellation, options) {
        Ok(plan) => plan,
        Err(err) => return Err(handle_route_failure(err)),
    };

    let summary =
        RouteSummary::from_plan(&plan).context("failed to build route summary for display")?;
    format.render_route(&summary, &ColorPalette::detect())
}

fn handle_route_failure(err: RouteError) -> anyhow::Error {
    match err {
        RouteError::MissingEndpoint { name } => anyhow::anyhow!(
            "constellation has no {name} endpoint; the source must include a ROU,lat1,lon1,lat2,lon2 line"
        ),
        other => anyhow::Error::new(other),
    }
}
