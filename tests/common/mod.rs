//! Common test utilities for integration tests
//!
//! Provides shared fixtures used across multiple integration test files.

#![allow(dead_code)]

use emergence::{Agent, NetworkState, Pattern, ScoreEngine, Snapshot, SyntheticStateCollector};

pub const PHI: f64 = 1.618_034;

/// The single-agent, single-pattern snapshot where every sub-score is 1.0
pub fn unit_snapshot() -> Snapshot {
    Snapshot::new(
        vec![Agent::new("agent-1", PHI, 530.0, 1.0, true)],
        vec![Pattern::new("pattern-1", 1.0, 1.0, 1.0, 0)],
        NetworkState::new(1, 1, 1.0, 1.0),
    )
}

pub fn unit_engine() -> ScoreEngine {
    ScoreEngine::from_snapshot(unit_snapshot()).expect("unit snapshot is valid")
}

/// Jittered snapshot around the target constants
pub fn jittered_snapshot(seed: u64) -> Snapshot {
    SyntheticStateCollector::new(seed).generate()
}

/// Setup test logging
///
/// Initializes tracing subscriber for test output.
pub fn setup_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}
