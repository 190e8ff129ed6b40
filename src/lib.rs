//! flowchart-graph — graph validation and reachability for flowchart documents.
//!
//! A flowchart is a titled document holding nodes and directed edges. The
//! [`GraphEngine`] works on an immutable [`GraphSnapshot`] of that graph and
//! answers three questions: do all edges point at real nodes, which edges
//! leave a node, and which nodes can be reached from a node. Snapshots come
//! from either a JSON document blob or relational rows via [`SnapshotSource`].

pub mod api;
pub mod cli;
pub mod engine;
pub mod format;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use api::{ApiResponse, FlowchartApi};
pub use engine::{GraphEngine, ValidationReport, ValidationResult};
pub use format::{DocumentReader, DocumentWriter, RelationalStore, SnapshotSource};
pub use graph::{GraphSnapshot, SnapshotBuilder};
pub use types::{
    Edge, EdgeId, FlowError, FlowResult, Flowchart, FlowchartData, Node, NodeId, MAX_TITLE_LEN,
};
