//! The directed edge struct.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{EdgeId, NodeId};

/// A directed arc from `source` to `target`.
///
/// Nothing here checks that the endpoints exist; that is what
/// edge validation is for. Presentation fields (`animated`, `style`,
/// handles, ...) ride along in `extra`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// Unique identifier within the owning flowchart.
    pub id: EdgeId,
    /// Node the edge leaves.
    pub source: NodeId,
    /// Node the edge enters.
    pub target: NodeId,
    /// Every other field of the stored record.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Edge {
    /// Create a new edge.
    pub fn new(id: impl Into<EdgeId>, source: impl Into<NodeId>, target: impl Into<NodeId>) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            extra: Map::new(),
        }
    }

    /// Attach an extra field, builder style.
    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// True when the edge leaves and enters the same node.
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}
