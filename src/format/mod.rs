//! Storage adapters: JSON document blobs and relational rows.

pub mod reader;
pub mod relational;
pub mod source;
pub mod writer;

pub use reader::DocumentReader;
pub use relational::{EdgeRow, FlowchartRow, NodeRow, RelationalStore};
pub use source::SnapshotSource;
pub use writer::DocumentWriter;
