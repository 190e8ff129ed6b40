//! Error types for the flowchart-graph library.

use thiserror::Error;

use super::NodeId;

/// All errors that can occur in the flowchart-graph library.
///
/// A failed edge validation is not an error; it is reported through
/// [`ValidationResult`](crate::engine::ValidationResult).
#[derive(Error, Debug)]
pub enum FlowError {
    /// A required argument is missing or malformed.
    #[error("{0}")]
    InvalidArgument(String),

    /// Node not found in the snapshot.
    #[error("Node {0} not found")]
    NodeNotFound(NodeId),

    /// No flowchart with this ID in the relational rows.
    #[error("Flowchart {0} not found")]
    FlowchartNotFound(u64),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON document or row set.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience result type for flowchart-graph operations.
pub type FlowResult<T> = Result<T, FlowError>;
