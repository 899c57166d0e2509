use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, warn};

use crate::constellation::{Constellation, NodeId};
use crate::visibility::{distance_between, is_visible, Body};

/// Edge within the visibility graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge {
    pub target: NodeId,
    /// Straight-line distance in kilometres. Carried for reporting only; the
    /// search counts hops.
    pub distance: f64,
}

/// Line-of-sight graph over every node of a constellation.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: Arc<BTreeMap<NodeId, Vec<Edge>>>,
}

impl Graph {
    /// Wrap a precomputed adjacency map.
    ///
    /// Edge targets that have no entry of their own are added with an empty
    /// neighbour list so every referenced node is a key of the graph.
    pub fn from_adjacency(mut adjacency: BTreeMap<NodeId, Vec<Edge>>) -> Self {
        let dangling: Vec<NodeId> = adjacency
            .values()
            .flatten()
            .filter(|edge| !adjacency.contains_key(&edge.target))
            .map(|edge| edge.target.clone())
            .collect();
        for target in dangling {
            adjacency.entry(target).or_default();
        }
        Self {
            adjacency: Arc::new(adjacency),
        }
    }

    /// Return the neighbours for a given node, in the order the builder found them.
    pub fn neighbours(&self, node: &str) -> &[Edge] {
        self.adjacency
            .get(node)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Full adjacency map keyed by node identifier.
    pub fn adjacency(&self) -> &BTreeMap<NodeId, Vec<Edge>> {
        &self.adjacency
    }

    pub fn contains(&self, node: &str) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Node identifiers in sorted order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(String::as_str)
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}

/// Build the visibility graph against the default Earth body.
pub fn build_graph(constellation: &Constellation) -> Graph {
    build_graph_with_body(constellation, &Body::default())
}

/// Build the visibility graph against a caller-supplied body.
///
/// Every ordered pair of distinct nodes is tested on its own, so `(A, B)` and
/// `(B, A)` each produce an edge when visible.
pub fn build_graph_with_body(constellation: &Constellation, body: &Body) -> Graph {
    let mut adjacency: BTreeMap<NodeId, Vec<Edge>> = constellation
        .ids()
        .map(|id| (id.to_string(), Vec::new()))
        .collect();

    for (from_id, from) in constellation.iter() {
        let edges = adjacency.entry(from_id.to_string()).or_default();
        for (to_id, to) in constellation.iter() {
            if from_id == to_id {
                continue;
            }
            if from == to {
                warn!(
                    from = from_id,
                    to = to_id,
                    "distinct nodes share coordinates"
                );
            }
            if is_visible(from, to, body) {
                edges.push(Edge {
                    target: to_id.to_string(),
                    distance: distance_between(from, to),
                });
            }
        }
    }

    let graph = Graph {
        adjacency: Arc::new(adjacency),
    };
    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "built visibility graph"
    );
    graph
}
