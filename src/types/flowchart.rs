//! The flowchart document: a titled container for one graph.

use std::collections::{BTreeSet, HashSet};

use chrono::{DateTime, Utc};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::graph::GraphSnapshot;

use super::{Edge, FlowError, FlowResult, Node, NodeId, MAX_TITLE_LEN};

/// Nodes and edges of a flowchart, as stored in the document blob.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowchartData {
    /// Node records. Missing in the blob means none.
    #[serde(default)]
    pub nodes: Vec<Node>,
    /// Edge records in stored order. Missing in the blob means none.
    #[serde(default)]
    pub edges: Vec<Edge>,
}

/// A flowchart document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flowchart {
    /// Document ID assigned by the store.
    #[serde(default)]
    pub id: u64,
    /// Display label; the only field an update may change.
    pub title: String,
    /// When the document was created.
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    /// The graph.
    #[serde(default)]
    pub data: FlowchartData,
}

impl Flowchart {
    /// Create an empty flowchart stamped with the current time.
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            created_at: Utc::now(),
            data: FlowchartData::default(),
        }
    }

    /// Replace the graph data, builder style.
    pub fn with_data(mut self, nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        self.data = FlowchartData { nodes, edges };
        self
    }

    /// The graph snapshot of this document.
    pub fn snapshot(&self) -> GraphSnapshot {
        GraphSnapshot::from_parts(
            self.data.nodes.iter().map(|n| n.id.clone()),
            self.data.edges.clone(),
        )
    }

    /// Look up a node record by ID.
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.data.nodes.iter().find(|n| n.id.as_str() == id)
    }

    /// Node records whose IDs are in `ids`, in document order.
    ///
    /// A repeated node ID yields only its first record.
    pub fn nodes_in(&self, ids: &BTreeSet<NodeId>) -> Vec<&Node> {
        let mut seen = HashSet::new();
        self.data
            .nodes
            .iter()
            .filter(|n| ids.contains(&n.id) && seen.insert(&n.id))
            .collect()
    }

    /// Apply an update request body.
    ///
    /// Only `title` is writable. A missing title keeps the current one;
    /// any other key (including `nodes`, `edges` and `data`) is ignored.
    pub fn apply_update(&mut self, patch: &serde_json::Value) -> FlowResult<()> {
        let fields = patch.as_object().ok_or_else(|| {
            FlowError::InvalidArgument("Update body must be a JSON object.".to_string())
        })?;

        for key in fields.keys().filter(|k| k.as_str() != "title") {
            warn!(
                "flowchart {}: ignoring field `{}`, only the title can be updated",
                self.id, key
            );
        }

        let Some(title) = fields.get("title") else {
            debug!("flowchart {}: update carried no title", self.id);
            return Ok(());
        };
        let title = title
            .as_str()
            .ok_or_else(|| FlowError::InvalidArgument("title must be a string.".to_string()))?;
        if title.chars().count() > MAX_TITLE_LEN {
            return Err(FlowError::InvalidArgument(format!(
                "title exceeds {} characters.",
                MAX_TITLE_LEN
            )));
        }

        debug!("flowchart {}: title {:?} -> {:?}", self.id, self.title, title);
        self.title = title.to_string();
        Ok(())
    }
}
