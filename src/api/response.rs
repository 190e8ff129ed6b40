//! Mapping engine results and errors to status + JSON body pairs.

use serde::Serialize;
use serde_json::{json, Value};

use crate::engine::ValidationReport;
use crate::types::{Edge, FlowError, Flowchart, Node};

pub const STATUS_OK: u16 = 200;
pub const STATUS_BAD_REQUEST: u16 = 400;
pub const STATUS_NOT_FOUND: u16 = 404;
pub const STATUS_INTERNAL_ERROR: u16 = 500;

/// Message returned when validation passes.
pub const GRAPH_VALID: &str = "Graph is valid.";
/// Message returned when validation finds dangling edges.
pub const GRAPH_INVALID: &str = "Invalid graph: some edges have invalid nodes.";
/// Message returned when the `node_id` query parameter is absent.
pub const NODE_ID_REQUIRED: &str = "node_id query parameter is required.";

/// A response as the HTTP layer would send it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    /// A response with an explicit status.
    pub fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    /// A 200 response.
    pub fn ok(body: Value) -> Self {
        Self::new(STATUS_OK, body)
    }

    /// True for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Validation verdict. Dangling edges are a client error, listed in full.
pub fn validation_response(report: &ValidationReport<'_>) -> ApiResponse {
    if report.is_valid() {
        return ApiResponse::ok(json!({ "message": GRAPH_VALID }));
    }
    ApiResponse::new(
        STATUS_BAD_REQUEST,
        json!({
            "message": GRAPH_INVALID,
            "invalid_edges": report.edges,
        }),
    )
}

/// A list of edge records.
pub fn edges_response(edges: &[&Edge]) -> ApiResponse {
    ApiResponse::ok(json!(edges))
}

/// A list of node records.
pub fn nodes_response(nodes: &[&Node]) -> ApiResponse {
    ApiResponse::ok(json!(nodes))
}

/// A whole flowchart document.
pub fn flowchart_response(flowchart: &Flowchart) -> ApiResponse {
    match serde_json::to_value(flowchart) {
        Ok(body) => ApiResponse::ok(body),
        Err(e) => error_response(&FlowError::Json(e)),
    }
}

/// Map an error to its status and `{"error": ...}` body.
pub fn error_response(err: &FlowError) -> ApiResponse {
    let (status, message) = match err {
        FlowError::InvalidArgument(msg) => (STATUS_BAD_REQUEST, msg.clone()),
        FlowError::NodeNotFound(_) => (STATUS_NOT_FOUND, "Node not found.".to_string()),
        FlowError::FlowchartNotFound(_) => (STATUS_NOT_FOUND, "Not found.".to_string()),
        FlowError::Io(_) | FlowError::Json(_) => (STATUS_INTERNAL_ERROR, err.to_string()),
    };
    ApiResponse::new(status, json!({ "error": message }))
}
