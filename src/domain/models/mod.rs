//! Domain records consumed and produced by the engine.

pub mod agent;
pub mod config;
pub mod metrics;
pub mod network;
pub mod pattern;
pub mod snapshot;

pub use agent::Agent;
pub use config::{Config, IntegrationConfig, LoggingConfig};
pub use metrics::{CycleState, EmergenceLevel, EmergenceMetrics, ScoreBreakdown};
pub use network::NetworkState;
pub use pattern::Pattern;
pub use snapshot::Snapshot;
