//! Immutable graph snapshot — node set + ordered edges with an adjacency index.

use std::collections::{HashMap, HashSet};

use crate::types::{Edge, NodeId};

/// An immutable, in-memory view of one flowchart's graph.
///
/// Built fresh for each operation and dropped afterwards. Edges may point at
/// ids outside the node set; the snapshot stores them as given.
#[derive(Debug, Clone, Default)]
pub struct GraphSnapshot {
    /// Unique node IDs in first-seen order.
    nodes: Vec<NodeId>,
    /// Membership index over `nodes`.
    node_set: HashSet<NodeId>,
    /// All edges, in stored order.
    edges: Vec<Edge>,
    /// Adjacency index: source -> positions in `edges`, ascending.
    adjacency: HashMap<NodeId, Vec<usize>>,
}

impl GraphSnapshot {
    /// Create an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from node IDs and edges. Duplicate node IDs collapse to one.
    pub fn from_parts(nodes: impl IntoIterator<Item = NodeId>, edges: Vec<Edge>) -> Self {
        let mut node_set = HashSet::new();
        let mut unique = Vec::new();
        for id in nodes {
            if node_set.insert(id.clone()) {
                unique.push(id);
            }
        }

        let mut adjacency: HashMap<NodeId, Vec<usize>> = HashMap::new();
        for (idx, edge) in edges.iter().enumerate() {
            adjacency.entry(edge.source.clone()).or_default().push(idx);
        }

        Self {
            nodes: unique,
            node_set,
            edges,
            adjacency,
        }
    }

    /// Number of distinct nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// True when there are neither nodes nor edges.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    /// All node IDs (first-seen order).
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// All edges (stored order).
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Whether `id` is in the node set.
    pub fn contains_node(&self, id: &str) -> bool {
        self.node_set.contains(id)
    }

    /// The stored node ID equal to `id`, if present.
    pub fn get_node(&self, id: &str) -> Option<&NodeId> {
        self.node_set.get(id)
    }

    /// Edges leaving `source`, in stored order. `source` need not be a node.
    pub fn edges_from<'a>(&'a self, source: &str) -> impl Iterator<Item = &'a Edge> + 'a {
        self.adjacency
            .get(source)
            .into_iter()
            .flatten()
            .map(move |&idx| &self.edges[idx])
    }
}
