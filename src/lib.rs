//! Emergence - swarm emergence scoring engine
//!
//! Reduces a snapshot of agents, discovered patterns and network state to four
//! sub-scores, multiplies them into an instantaneous index, and integrates
//! that index over many feedback cycles with per-channel saturation. The
//! integrated value is classified into an [`EmergenceLevel`].
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): input/output records, errors and ports
//! - **Service Layer** (`services`): `ScoreEngine` and `EmergenceIntegrator`
//! - **Adapters** (`adapters`): snapshot collectors (files, synthetic data)
//! - **Infrastructure Layer** (`infrastructure`): configuration and logging
//! - **CLI Layer** (`cli`): command-line interface
//!
//! # Example
//!
//! ```
//! use emergence::{Agent, EmergenceIntegrator, EmergenceLevel, NetworkState, Pattern, ScoreEngine};
//!
//! let engine = ScoreEngine::new(
//!     vec![Agent::new("a-1", 1.618034, 530.0, 1.0, true)],
//!     vec![Pattern::new("p-1", 1.0, 1.0, 1.0, 0)],
//!     NetworkState::new(1, 1, 1.0, 1.0),
//! )?;
//! assert_eq!(engine.instantaneous_index(), 1.0);
//!
//! let metrics = EmergenceIntegrator::new(engine).metrics(1000, 0.01)?;
//! assert!(metrics.level >= EmergenceLevel::Superintelligent);
//! # Ok::<(), emergence::DomainError>(())
//! ```

/// Collectors that produce snapshots
pub mod adapters;
/// Command-line interface
pub mod cli;
/// Records, ports and errors
pub mod domain;
/// Configuration and logging
pub mod infrastructure;
/// Score engine and integrator
pub mod services;

// Re-export commonly used types for convenience
pub use adapters::{FileStateCollector, SyntheticStateCollector};
pub use domain::models::{
    Agent, Config, CycleState, EmergenceLevel, EmergenceMetrics, NetworkState, Pattern,
    ScoreBreakdown, Snapshot,
};
pub use domain::ports::{CollectorError, StateCollector};
pub use domain::{DomainError, DomainResult};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::{EmergenceIntegrator, ScoreEngine};
