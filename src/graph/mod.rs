//! In-memory graph snapshot and traversal.

pub mod builder;
pub mod snapshot;
pub mod traversal;

pub use builder::SnapshotBuilder;
pub use snapshot::GraphSnapshot;
pub use traversal::dfs_reachable;
