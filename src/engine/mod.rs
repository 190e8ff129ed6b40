//! High-level operations over a graph snapshot.

pub mod query;
pub mod validation;

pub use query::GraphEngine;
pub use validation::{find_invalid_edges, ValidationReport, ValidationResult};
