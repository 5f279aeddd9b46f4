//! Snapshot source arguments shared by scoring commands.

use clap::Args;
use std::fmt;
use std::path::PathBuf;

use crate::adapters::collectors::{FileStateCollector, SyntheticConfig, SyntheticStateCollector};
use crate::domain::ports::StateCollector;

/// Where a scoring command reads its snapshot from
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Snapshot file (.json, .yaml or .yml); a synthetic snapshot is used when omitted
    #[arg(short, long, conflicts_with_all = ["synthetic", "seed", "agents", "patterns", "modules"])]
    pub snapshot: Option<PathBuf>,

    /// Score a generated snapshot (the default when --snapshot is absent)
    #[arg(long)]
    pub synthetic: bool,

    /// Seed for the synthetic snapshot
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Number of synthetic agents
    #[arg(long, default_value_t = 50)]
    pub agents: usize,

    /// Number of synthetic patterns
    #[arg(long, default_value_t = 20)]
    pub patterns: usize,

    /// Total modules in the synthetic network
    #[arg(long, default_value_t = 12)]
    pub modules: u32,
}

impl SourceArgs {
    /// Build the collector this source describes
    pub fn collector(&self) -> Box<dyn StateCollector> {
        match self.snapshot {
            Some(ref path) => Box::new(FileStateCollector::new(path)),
            None => Box::new(SyntheticStateCollector::with_config(
                self.seed,
                self.synthetic_config(),
            )),
        }
    }

    /// Shape of the synthetic snapshot described by the size options
    pub fn synthetic_config(&self) -> SyntheticConfig {
        SyntheticConfig {
            agent_count: self.agents,
            pattern_count: self.patterns,
            total_modules: self.modules,
            ..SyntheticConfig::default()
        }
    }
}

impl fmt::Display for SourceArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.snapshot {
            Some(ref path) => write!(f, "{}", path.display()),
            None => write!(f, "synthetic (seed {})", self.seed),
        }
    }
}
