mod commands;

use std::io::{self, Write};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use satroute_cli::output::OutputFormat;
use satroute_lib::{Body, DataSource, FetchOptions, RouteOptions, DATA_SOURCE_ENV};

use crate::commands::graph::handle_graph_command;
use crate::commands::route::handle_route_command;

#[derive(Parser, Debug)]
#[command(author, version, about = "Satellite relay routing utilities")]
struct Cli {
    /// Constellation source: an http(s) URL or a local file path.
    ///
    /// Falls back to the SATROUTE_DATA_SOURCE environment variable, then the
    /// public generator.
    #[arg(long, global = true)]
    source: Option<String>,

    /// Timeout for remote sources, in seconds.
    #[arg(long, global = true, default_value_t = 30)]
    timeout_secs: u64,

    /// Kilometres below the Earth radius still treated as touching the limb (default 0).
    #[arg(long, global = true, value_parser = parse_tolerance)]
    limb_tolerance: Option<f64>,

    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Find the relay chain with the fewest hops between START and END.
    Route,
    /// Print the line-of-sight graph between every pair of nodes.
    Graph,
}

impl Cli {
    fn data_source(&self) -> DataSource {
        DataSource::resolve(self.source.as_deref())
    }

    fn fetch_options(&self) -> FetchOptions {
        FetchOptions {
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }

    fn route_options(&self) -> RouteOptions {
        let body = match self.limb_tolerance {
            Some(tolerance) => Body::default().with_limb_tolerance(tolerance),
            None => Body::default(),
        };
        RouteOptions::with_body(body)
    }
}

fn parse_tolerance(value: &str) -> Result<f64, String> {
    let tolerance: f64 = value
        .parse()
        .map_err(|_| format!("'{value}' is not a number"))?;
    if tolerance.is_finite() && tolerance >= 0.0 {
        Ok(tolerance)
    } else {
        Err("limb tolerance must be a non-negative number of kilometres".to_string())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let source = cli.data_source();
    let fetch = cli.fetch_options();
    let options = cli.route_options();
    tracing::debug!(%source, env = DATA_SOURCE_ENV, "resolved constellation source");

    let rendered = match cli.command {
        Command::Route => handle_route_command(&source, &fetch, &options, cli.format).await?,
        Command::Graph => handle_graph_command(&source, &fetch, &options, cli.format).await?,
    };

    write_stdout(&rendered)
}

fn write_stdout(rendered: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    match stdout.write_all(rendered.as_bytes()).and_then(|_| stdout.flush()) {
        Err(err) if err.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other.context("failed to write output"),
    }
}

/// Logs go to stderr so stdout carries only command output.
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
