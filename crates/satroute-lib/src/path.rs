use std::collections::{HashMap, VecDeque};

use serde::Serialize;
use tracing::debug;

use crate::constellation::{Constellation, NodeId, END, START};
use crate::error::{Error, Result};
use crate::graph::Graph;

/// Progress of a node through the breadth-first search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeState {
    Unvisited,
    /// Reached and queued, neighbours not yet examined.
    Frontier,
    Settled,
}

/// Search bookkeeping for a single node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchNode {
    pub state: NodeState,
    /// Hops from `START`; `None` until the node is reached.
    pub hop_distance: Option<usize>,
    pub predecessor: Option<NodeId>,
}

impl SearchNode {
    fn unvisited() -> Self {
        Self {
            state: NodeState::Unvisited,
            hop_distance: None,
            predecessor: None,
        }
    }

    pub fn is_reached(&self) -> bool {
        self.state != NodeState::Unvisited
    }
}

/// Per-invocation result of [`search_hops`]: hop distances and predecessors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchTree {
    nodes: HashMap<NodeId, SearchNode>,
}

impl SearchTree {
    /// Build a tree from an explicit predecessor map.
    ///
    /// Every listed node counts as reached; hop distances are left unknown.
    pub fn from_predecessors<I, K, P>(predecessors: I) -> Self
    where
        I: IntoIterator<Item = (K, Option<P>)>,
        K: Into<NodeId>,
        P: Into<NodeId>,
    {
        let nodes = predecessors
            .into_iter()
            .map(|(id, predecessor)| {
                (
                    id.into(),
                    SearchNode {
                        state: NodeState::Settled,
                        hop_distance: None,
                        predecessor: predecessor.map(Into::into),
                    },
                )
            })
            .collect();
        Self { nodes }
    }

    pub fn node(&self, id: &str) -> Option<&SearchNode> {
        self.nodes.get(id)
    }

    pub fn hop_distance(&self, id: &str) -> Option<usize> {
        self.node(id).and_then(|node| node.hop_distance)
    }

    pub fn predecessor(&self, id: &str) -> Option<&str> {
        self.node(id).and_then(|node| node.predecessor.as_deref())
    }

    pub fn is_reachable(&self, id: &str) -> bool {
        self.node(id).is_some_and(SearchNode::is_reached)
    }

    /// Number of nodes that were reached, `START` included.
    pub fn reached_count(&self) -> usize {
        self.nodes.values().filter(|node| node.is_reached()).count()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Relay nodes between the endpoints, as reconstructed from a [`SearchTree`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    /// Relays from the node adjacent to `END` back to the node after `START`.
    relays: Vec<NodeId>,
    hops: usize,
}

impl Route {
    /// Relays in the order they were walked: nearest `END` first.
    pub fn relays_from_end(&self) -> &[NodeId] {
        &self.relays
    }

    /// Relays in travel order, from the node after `START` to the node before `END`.
    pub fn display_order(&self) -> Vec<NodeId> {
        self.relays.iter().rev().cloned().collect()
    }

    /// Number of edges between `START` and `END`.
    pub fn hop_count(&self) -> usize {
        self.hops
    }

    /// `true` when `START` sees `END` without any relay.
    pub fn is_direct(&self) -> bool {
        self.relays.is_empty()
    }
}

/// Explore `graph` breadth-first from `START`, ignoring edge distances.
///
/// Neighbours are visited in the order the graph stores them and the queue is
/// drained completely. Nodes that appear in `graph` but not in
/// `constellation` are not explored.
pub fn search_hops(graph: &Graph, constellation: &Constellation) -> Result<SearchTree> {
    if !constellation.contains(START) {
        return Err(Error::missing_endpoint(START));
    }

    let mut nodes: HashMap<NodeId, SearchNode> = constellation
        .ids()
        .map(|id| (id.to_string(), SearchNode::unvisited()))
        .collect();

    if let Some(start) = nodes.get_mut(START) {
        start.state = NodeState::Frontier;
        start.hop_distance = Some(0);
    }

    let mut queue = VecDeque::from([START.to_string()]);
    while let Some(current) = queue.pop_front() {
        let current_hops = nodes
            .get(&current)
            .and_then(|node| node.hop_distance)
            .unwrap_or_default();

        for edge in graph.neighbours(&current) {
            let Some(next) = nodes.get_mut(&edge.target) else {
                continue;
            };
            if next.state != NodeState::Unvisited {
                continue;
            }
            next.state = NodeState::Frontier;
            next.hop_distance = Some(current_hops + 1);
            next.predecessor = Some(current.clone());
            queue.push_back(edge.target.clone());
        }

        if let Some(node) = nodes.get_mut(&current) {
            node.state = NodeState::Settled;
        }
    }

    let tree = SearchTree { nodes };
    debug!(
        reached = tree.reached_count(),
        total = tree.len(),
        "hop search finished"
    );
    Ok(tree)
}

/// Walk predecessors from `END` back to `START`.
///
/// Fails with [`Error::RouteNotFound`] when `END` was never reached or the
/// chain runs into a node without a predecessor.
pub fn reconstruct_route(tree: &SearchTree) -> Result<Route> {
    let mut current = tree.predecessor(END).ok_or_else(Error::route_not_found)?;
    let mut relays = Vec::new();

    while current != START {
        let node = tree
            .node(current)
            .filter(|node| node.is_reached())
            .ok_or_else(Error::route_not_found)?;
        relays.push(current.to_string());
        if relays.len() > tree.len() {
            return Err(Error::route_not_found());
        }
        current = node
            .predecessor
            .as_deref()
            .ok_or_else(Error::route_not_found)?;
    }

    let hops = tree.hop_distance(END).unwrap_or(relays.len() + 1);
    Ok(Route { relays, hops })
}

/// Search and reconstruct in one step.
pub fn find_shortest_hop_path(graph: &Graph, constellation: &Constellation) -> Result<Route> {
    if !constellation.contains(END) {
        return Err(Error::missing_endpoint(END));
    }
    let tree = search_hops(graph, constellation)?;
    reconstruct_route(&tree)
}
