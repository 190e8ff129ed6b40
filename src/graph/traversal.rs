//! Graph traversal (iterative DFS).

use std::collections::{BTreeSet, HashSet};

use log::debug;

use crate::types::{FlowError, FlowResult, NodeId};

use super::GraphSnapshot;

/// All node IDs reachable from `start_id` along outgoing edges, including
/// `start_id` itself.
///
/// Uses an explicit stack, so long chains cannot exhaust the call stack, and
/// a visited set, so cycles terminate. Edges out of a target that is not in
/// the node set are still followed; such targets are left out of the result.
pub fn dfs_reachable(graph: &GraphSnapshot, start_id: &str) -> FlowResult<BTreeSet<NodeId>> {
    let start = graph
        .get_node(start_id)
        .ok_or_else(|| FlowError::NodeNotFound(NodeId::from(start_id)))?;

    let mut visited: HashSet<&NodeId> = HashSet::new();
    let mut stack: Vec<&NodeId> = vec![start];
    visited.insert(start);

    while let Some(current) = stack.pop() {
        for edge in graph.edges_from(current.as_str()) {
            if visited.insert(&edge.target) {
                stack.push(&edge.target);
            }
        }
    }

    let reachable: BTreeSet<NodeId> = visited
        .iter()
        .filter(|id| graph.contains_node(id.as_str()))
        .map(|&id| id.clone())
        .collect();

    debug!(
        "reachable from {}: {} nodes ({} dangling ids skipped)",
        start_id,
        reachable.len(),
        visited.len() - reachable.len()
    );

    Ok(reachable)
}
