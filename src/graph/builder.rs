//! Fluent API for building GraphSnapshot instances.

use crate::types::{Edge, EdgeId, NodeId};

use super::GraphSnapshot;

/// Fluent builder for constructing a GraphSnapshot.
pub struct SnapshotBuilder {
    nodes: Vec<NodeId>,
    edges: Vec<Edge>,
    next_edge: u64,
}

impl SnapshotBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            next_edge: 0,
        }
    }

    /// Add a node.
    pub fn node(&mut self, id: impl Into<NodeId>) -> &mut Self {
        self.nodes.push(id.into());
        self
    }

    /// Add several nodes.
    pub fn nodes<I, T>(&mut self, ids: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
        T: Into<NodeId>,
    {
        self.nodes.extend(ids.into_iter().map(Into::into));
        self
    }

    /// Add an edge with an explicit ID.
    pub fn edge(
        &mut self,
        id: impl Into<EdgeId>,
        source: impl Into<NodeId>,
        target: impl Into<NodeId>,
    ) -> &mut Self {
        self.edges.push(Edge::new(id, source, target));
        self
    }

    /// Add an edge with a generated ID (`e0`, `e1`, ...).
    pub fn link(&mut self, source: impl Into<NodeId>, target: impl Into<NodeId>) -> &mut Self {
        let id = format!("e{}", self.next_edge);
        self.next_edge += 1;
        self.edge(id, source, target)
    }

    /// Build the final GraphSnapshot.
    pub fn build(&self) -> GraphSnapshot {
        GraphSnapshot::from_parts(self.nodes.iter().cloned(), self.edges.clone())
    }
}

impl Default for SnapshotBuilder {
    fn default() -> Self {
        Self::new()
    }
}
