//! The storage seam: anything that can hand out a flowchart snapshot.

use crate::graph::GraphSnapshot;
use crate::types::{FlowError, FlowResult, Flowchart};

/// A store that can materialise flowcharts by ID.
///
/// Both the document blob and the relational rows implement this, so the
/// engine never sees which representation its snapshot came from.
pub trait SnapshotSource {
    /// Load the full flowchart document.
    fn load_flowchart(&self, flowchart_id: u64) -> FlowResult<Flowchart>;

    /// Load only the graph snapshot.
    fn load_snapshot(&self, flowchart_id: u64) -> FlowResult<GraphSnapshot> {
        Ok(self.load_flowchart(flowchart_id)?.snapshot())
    }
}

/// A single document answers only to its own ID.
impl SnapshotSource for Flowchart {
    fn load_flowchart(&self, flowchart_id: u64) -> FlowResult<Flowchart> {
        if self.id != flowchart_id {
            return Err(FlowError::FlowchartNotFound(flowchart_id));
        }
        Ok(self.clone())
    }

    fn load_snapshot(&self, flowchart_id: u64) -> FlowResult<GraphSnapshot> {
        if self.id != flowchart_id {
            return Err(FlowError::FlowchartNotFound(flowchart_id));
        }
        Ok(self.snapshot())
    }
}

/// A collection of documents, searched by ID.
impl SnapshotSource for [Flowchart] {
    fn load_flowchart(&self, flowchart_id: u64) -> FlowResult<Flowchart> {
        self.iter()
            .find(|f| f.id == flowchart_id)
            .cloned()
            .ok_or(FlowError::FlowchartNotFound(flowchart_id))
    }
}
