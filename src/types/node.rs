//! Node records.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::NodeId;

/// A flowchart node. Only `id` takes part in graph logic.
///
/// Fields the graph logic does not know about (editor `data`, `position`,
/// ...) are kept in `extra` and written back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// Unique identifier within the owning flowchart.
    pub id: NodeId,
    /// Display name, if the store carries one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Every other field of the stored record.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Node {
    /// Create an unnamed node.
    pub fn new(id: impl Into<NodeId>) -> Self {
        Self {
            id: id.into(),
            name: None,
            extra: Map::new(),
        }
    }

    /// Create a node with a display name.
    pub fn named(id: impl Into<NodeId>, name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::new(id)
        }
    }

    /// Human-readable label: `name`, else the editor's `data.label`.
    pub fn label(&self) -> Option<&str> {
        self.name.as_deref().or_else(|| {
            self.extra
                .get("data")
                .and_then(|d| d.get("label"))
                .and_then(Value::as_str)
        })
    }

    /// Attach an extra field, builder style.
    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}
