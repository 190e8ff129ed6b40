//! Edge validation results.

use serde::Serialize;

use crate::graph::GraphSnapshot;
use crate::types::{Edge, EdgeId};

/// Verdict of an edge validation.
///
/// `valid` is true exactly when `invalid_edges` is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    /// Whether every edge references existing nodes.
    pub valid: bool,
    /// IDs of edges with a missing source or target, in stored order.
    pub invalid_edges: Vec<EdgeId>,
}

impl ValidationResult {
    /// Build a verdict from the offending edges.
    pub fn from_invalid(invalid: &[&Edge]) -> Self {
        Self {
            valid: invalid.is_empty(),
            invalid_edges: invalid.iter().map(|e| e.id.clone()).collect(),
        }
    }
}

/// A verdict together with the offending edge records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport<'a> {
    /// The verdict.
    pub result: ValidationResult,
    /// The rejected edges, in the same order as `result.invalid_edges`.
    pub edges: Vec<&'a Edge>,
}

impl<'a> ValidationReport<'a> {
    /// Build a report from the offending edges.
    pub fn from_invalid(edges: Vec<&'a Edge>) -> Self {
        Self {
            result: ValidationResult::from_invalid(&edges),
            edges,
        }
    }

    /// Whether the graph passed validation.
    pub fn is_valid(&self) -> bool {
        self.result.valid
    }
}

/// Edges whose source or target is missing from the node set.
pub fn find_invalid_edges(graph: &GraphSnapshot) -> Vec<&Edge> {
    graph
        .edges()
        .iter()
        .filter(|e| {
            !graph.contains_node(e.source.as_str()) || !graph.contains_node(e.target.as_str())
        })
        .collect()
}
