//! The graph engine — validation, outgoing edges and reachability.

use std::collections::BTreeSet;

use log::debug;

use crate::graph::{dfs_reachable, GraphSnapshot};
use crate::types::{Edge, FlowError, FlowResult, NodeId};

use super::validation::{find_invalid_edges, ValidationReport, ValidationResult};

/// Stateless engine over a graph snapshot.
///
/// Holds no state, so one instance may be shared across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphEngine;

impl GraphEngine {
    /// Create a new graph engine.
    pub fn new() -> Self {
        Self
    }

    /// Check that every edge references nodes in the snapshot.
    pub fn validate_edges(&self, graph: &GraphSnapshot) -> ValidationResult {
        self.validation_report(graph).result
    }

    /// Validate and keep the rejected edge records alongside the verdict.
    pub fn validation_report<'a>(&self, graph: &'a GraphSnapshot) -> ValidationReport<'a> {
        let report = ValidationReport::from_invalid(find_invalid_edges(graph));
        debug!(
            "validated {} edges against {} nodes: {} invalid",
            graph.edge_count(),
            graph.node_count(),
            report.edges.len()
        );
        report
    }

    /// Edges leaving `node_id`, in stored order.
    ///
    /// An ID with no node behind it simply has no outgoing edges. A blank ID
    /// is rejected as `InvalidArgument`.
    pub fn outgoing_edges<'a>(
        &self,
        graph: &'a GraphSnapshot,
        node_id: &str,
    ) -> FlowResult<Vec<&'a Edge>> {
        if node_id.trim().is_empty() {
            return Err(FlowError::InvalidArgument(
                "node_id must not be empty.".to_string(),
            ));
        }
        Ok(graph.edges_from(node_id).collect())
    }

    /// Every node reachable from `start_id`, itself included.
    ///
    /// Fails with `NodeNotFound` when `start_id` is not in the node set.
    pub fn reachable_from(
        &self,
        graph: &GraphSnapshot,
        start_id: &str,
    ) -> FlowResult<BTreeSet<NodeId>> {
        dfs_reachable(graph, start_id)
    }
}
