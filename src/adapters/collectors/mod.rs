//! State collector adapters.

/// Snapshot files
pub mod file;
/// Seeded generator
pub mod synthetic;

pub use file::{FileStateCollector, SnapshotFormat};
pub use synthetic::{SyntheticConfig, SyntheticStateCollector};
