//! Adapters for the domain ports.

/// Snapshot collectors
pub mod collectors;

pub use collectors::{FileStateCollector, SyntheticStateCollector};
