//! Request/response mapping for the flowchart endpoints.
//!
//! Routing and transport live elsewhere; this module only turns a loaded
//! store plus request parameters into a status and JSON body.

pub mod handlers;
pub mod response;

pub use handlers::{required_node_id, update_flowchart, FlowchartApi};
pub use response::{error_response, validation_response, ApiResponse};
