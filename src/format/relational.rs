//! Normalized relational rows: one table each for flowcharts, nodes and edges.
//!
//! Nodes and edges point at their owning flowchart by `flowchart_id`; edges
//! point at nodes by `source_id`/`target_id`. Rows are taken as the store hands
//! them over, so a dangling edge row surfaces as an invalid edge rather than a
//! load failure.

use std::io::Read;
use std::path::Path;

use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::graph::GraphSnapshot;
use crate::types::{Edge, FlowError, FlowResult, Flowchart, Node, NodeId};

use super::SnapshotSource;

/// A row of the flowcharts table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowchartRow {
    pub id: u64,
    pub title: String,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

/// A row of the nodes table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRow {
    pub id: u64,
    pub flowchart_id: u64,
    pub name: String,
}

/// A row of the edges table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeRow {
    pub id: u64,
    pub flowchart_id: u64,
    pub source_id: u64,
    pub target_id: u64,
}

impl EdgeRow {
    fn to_edge(&self) -> Edge {
        Edge::new(self.id, self.source_id, self.target_id)
    }
}

/// The three tables, loaded in full.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RelationalStore {
    #[serde(default)]
    pub flowcharts: Vec<FlowchartRow>,
    #[serde(default)]
    pub nodes: Vec<NodeRow>,
    #[serde(default)]
    pub edges: Vec<EdgeRow>,
}

impl RelationalStore {
    /// Load a JSON dump of the three tables from a file.
    pub fn read_from_file(path: &Path) -> FlowResult<Self> {
        let data = std::fs::read(path)?;
        let store: Self = serde_json::from_slice(&data)?;
        debug!(
            "read {} flowchart rows, {} node rows, {} edge rows from {}",
            store.flowcharts.len(),
            store.nodes.len(),
            store.edges.len(),
            path.display()
        );
        Ok(store)
    }

    /// Load a JSON dump of the three tables from any reader.
    pub fn read_from(reader: &mut impl Read) -> FlowResult<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Ok(serde_json::from_slice(&data)?)
    }

    fn flowchart_row(&self, flowchart_id: u64) -> FlowResult<&FlowchartRow> {
        self.flowcharts
            .iter()
            .find(|f| f.id == flowchart_id)
            .ok_or(FlowError::FlowchartNotFound(flowchart_id))
    }

    /// Node rows owned by a flowchart, in table order.
    pub fn nodes_of(&self, flowchart_id: u64) -> impl Iterator<Item = &NodeRow> {
        self.nodes
            .iter()
            .filter(move |n| n.flowchart_id == flowchart_id)
    }

    /// Edge rows owned by a flowchart, in table order.
    pub fn edges_of(&self, flowchart_id: u64) -> impl Iterator<Item = &EdgeRow> {
        self.edges
            .iter()
            .filter(move |e| e.flowchart_id == flowchart_id)
    }
}

impl SnapshotSource for RelationalStore {
    fn load_flowchart(&self, flowchart_id: u64) -> FlowResult<Flowchart> {
        let row = self.flowchart_row(flowchart_id)?;
        let nodes = self
            .nodes_of(flowchart_id)
            .map(|n| Node::named(n.id, n.name.clone()))
            .collect();
        let edges = self.edges_of(flowchart_id).map(EdgeRow::to_edge).collect();

        let mut flowchart = Flowchart::new(row.id, row.title.clone()).with_data(nodes, edges);
        flowchart.created_at = row.created_at;
        Ok(flowchart)
    }

    fn load_snapshot(&self, flowchart_id: u64) -> FlowResult<GraphSnapshot> {
        self.flowchart_row(flowchart_id)?;
        Ok(GraphSnapshot::from_parts(
            self.nodes_of(flowchart_id).map(|n| NodeId::from(n.id)),
            self.edges_of(flowchart_id).map(EdgeRow::to_edge).collect(),
        ))
    }
}
