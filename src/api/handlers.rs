//! Request handlers for the flowchart graph endpoints.

use log::debug;

use crate::engine::GraphEngine;
use crate::format::SnapshotSource;
use crate::types::{FlowError, FlowResult, Flowchart};

use super::response::{
    edges_response, error_response, flowchart_response, nodes_response, validation_response,
    ApiResponse, NODE_ID_REQUIRED,
};

/// Extract the required `node_id` query parameter.
pub fn required_node_id(param: Option<&str>) -> FlowResult<&str> {
    match param {
        Some(id) if !id.trim().is_empty() => Ok(id),
        _ => Err(FlowError::InvalidArgument(NODE_ID_REQUIRED.to_string())),
    }
}

/// Read-side endpoints over any snapshot source.
pub struct FlowchartApi<'s, S: SnapshotSource + ?Sized> {
    store: &'s S,
    engine: GraphEngine,
}

impl<'s, S: SnapshotSource + ?Sized> FlowchartApi<'s, S> {
    /// Create handlers backed by `store`.
    pub fn new(store: &'s S) -> Self {
        Self {
            store,
            engine: GraphEngine::new(),
        }
    }

    /// `GET /flowcharts/{id}/validate_graph`
    pub fn validate_graph(&self, flowchart_id: u64) -> ApiResponse {
        let graph = match self.store.load_snapshot(flowchart_id) {
            Ok(g) => g,
            Err(e) => return error_response(&e),
        };
        validation_response(&self.engine.validation_report(&graph))
    }

    /// `GET /flowcharts/{id}/outgoing_edges?node_id=...`
    pub fn outgoing_edges(&self, flowchart_id: u64, node_id: Option<&str>) -> ApiResponse {
        self.try_outgoing_edges(flowchart_id, node_id)
            .unwrap_or_else(|e| error_response(&e))
    }

    fn try_outgoing_edges(
        &self,
        flowchart_id: u64,
        node_id: Option<&str>,
    ) -> FlowResult<ApiResponse> {
        let node_id = required_node_id(node_id)?;
        let graph = self.store.load_snapshot(flowchart_id)?;
        let edges = self.engine.outgoing_edges(&graph, node_id)?;
        Ok(edges_response(&edges))
    }

    /// `GET /flowcharts/{id}/connected_nodes?node_id=...`
    ///
    /// Returns the node records reachable from `node_id`, in document order.
    pub fn connected_nodes(&self, flowchart_id: u64, node_id: Option<&str>) -> ApiResponse {
        self.try_connected_nodes(flowchart_id, node_id)
            .unwrap_or_else(|e| error_response(&e))
    }

    fn try_connected_nodes(
        &self,
        flowchart_id: u64,
        node_id: Option<&str>,
    ) -> FlowResult<ApiResponse> {
        let node_id = required_node_id(node_id)?;
        let flowchart = self.store.load_flowchart(flowchart_id)?;
        let reachable = self.engine.reachable_from(&flowchart.snapshot(), node_id)?;
        let nodes = flowchart.nodes_in(&reachable);
        debug!(
            "flowchart {}: {} nodes connected to {}",
            flowchart_id,
            nodes.len(),
            node_id
        );
        Ok(nodes_response(&nodes))
    }
}

/// `PUT /flowcharts/{id}`: apply a title-only update and echo the document.
pub fn update_flowchart(flowchart: &mut Flowchart, patch: &serde_json::Value) -> ApiResponse {
    match flowchart.apply_update(patch) {
        Ok(()) => flowchart_response(flowchart),
        Err(e) => error_response(&e),
    }
}
