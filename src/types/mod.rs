//! All data types for the flowchart-graph library.

pub mod edge;
pub mod error;
pub mod flowchart;
pub mod id;
pub mod node;

pub use edge::Edge;
pub use error::{FlowError, FlowResult};
pub use flowchart::{Flowchart, FlowchartData};
pub use id::{EdgeId, NodeId};
pub use node::Node;

/// Maximum flowchart title length, in characters.
pub const MAX_TITLE_LEN: usize = 255;
