//! Output formatting for route and graph rendering.

use std::fmt::Write;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;

use satroute_lib::{Edge, Graph, NodeId, RouteRenderMode, RouteStep, RouteSummary};

use crate::terminal::ColorPalette;

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Comma-separated relay identifiers only.
    Basic,
    /// Human-friendly listing with coordinates and link lengths.
    #[default]
    Text,
    /// Markdown suitable for chat or notes.
    Rich,
    /// Pretty-printed JSON.
    Json,
}

impl OutputFormat {
    /// Render a route summary in this format.
    pub fn render_route(self, summary: &RouteSummary, palette: &ColorPalette) -> Result<String> {
        match self {
            OutputFormat::Basic => Ok(summary.render(RouteRenderMode::Basic)),
            OutputFormat::Text => Ok(render_route_text(summary, palette)),
            OutputFormat::Rich => Ok(summary.render(RouteRenderMode::RichText)),
            OutputFormat::Json => to_json(summary).context("failed to serialise route summary"),
        }
    }

    /// Render the visibility graph in this format.
    pub fn render_graph(self, graph: &Graph, palette: &ColorPalette) -> Result<String> {
        match self {
            OutputFormat::Basic => Ok(render_graph_basic(graph)),
            OutputFormat::Text | OutputFormat::Rich => Ok(render_graph_text(graph, palette)),
            OutputFormat::Json => {
                let report = GraphReport {
                    nodes: graph.node_count(),
                    edges: graph.edge_count(),
                    adjacency: graph.adjacency(),
                };
                to_json(&report).context("failed to serialise visibility graph")
            }
        }
    }
}

#[derive(Serialize)]
struct GraphReport<'a> {
    nodes: usize,
    edges: usize,
    adjacency: &'a std::collections::BTreeMap<NodeId, Vec<Edge>>,
}

fn to_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    Ok(json)
}

/// Human-friendly route view with tagged steps.
pub fn render_route_text(summary: &RouteSummary, palette: &ColorPalette) -> String {
    let mut buffer = String::new();
    let _ = writeln!(
        buffer,
        "Route from {} to {} ({} hops, {:.1} km):",
        summary.start.id, summary.goal.id, summary.hops, summary.total_distance_km
    );
    let last = summary.steps.len().saturating_sub(1);
    for (position, step) in summary.steps.iter().enumerate() {
        let (tag_color, tag) = if position == 0 {
            (palette.tag_start, "STRT")
        } else if position == last {
            (palette.tag_goal, "GOAL")
        } else {
            (palette.tag_relay, "RLAY")
        };
        let _ = write!(
            buffer,
            "{tag_color} {tag} {reset} {bold}{id}{reset} {gray}{coords}{reset}",
            reset = palette.reset,
            bold = palette.white_bold,
            gray = palette.gray,
            id = step.id,
            coords = format_coordinates(step),
        );
        if let Some(distance) = step.distance {
            let _ = write!(
                buffer,
                " {}+{:.1} km{}",
                palette.green, distance, palette.reset
            );
        }
        buffer.push('\n');
    }
    buffer
}

fn format_coordinates(step: &RouteStep) -> String {
    if step.altitude.abs() < 0.5 {
        format!("({:.2}, {:.2})", step.latitude, step.longitude)
    } else {
        format!(
            "({:.2}, {:.2}, {:.0} km)",
            step.latitude, step.longitude, step.altitude
        )
    }
}

fn render_graph_basic(graph: &Graph) -> String {
    let mut buffer = String::new();
    for node in graph.nodes() {
        let targets = graph
            .neighbours(node)
            .iter()
            .map(|edge| edge.target.as_str())
            .collect::<Vec<_>>()
            .join(",");
        let _ = writeln!(buffer, "{node}:{targets}");
    }
    buffer
}

fn render_graph_text(graph: &Graph, palette: &ColorPalette) -> String {
    let mut buffer = String::new();
    let _ = writeln!(
        buffer,
        "Visibility graph: {} nodes, {} directed links",
        graph.node_count(),
        graph.edge_count()
    );
    for node in graph.nodes() {
        let _ = write!(buffer, "{}{node}{}:", palette.white_bold, palette.reset);
        let edges = graph.neighbours(node);
        if edges.is_empty() {
            let _ = write!(buffer, " {}(no line of sight){}", palette.red, palette.reset);
        }
        for edge in edges {
            let _ = write!(
                buffer,
                " {} {}({:.1} km){}",
                edge.target, palette.gray, edge.distance, palette.reset
            );
        }
        buffer.push('\n');
    }
    buffer
}
