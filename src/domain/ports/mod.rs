//! Port trait definitions (Hexagonal Architecture)
//!
//! - StateCollector: source of agents, patterns and network state
//!
//! Adapters implementing these traits live in `crate::adapters`.

/// Snapshot source port
pub mod state_collector;

pub use state_collector::{CollectorError, StateCollector};
