//! Generate command: emit a synthetic snapshot usable as `--snapshot` input.

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};

use crate::adapters::collectors::{SyntheticConfig, SyntheticStateCollector};

/// Serialization of the generated snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON
    Json,
    /// YAML
    Yaml,
}

/// Arguments of `generate`
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Seed for the random generator
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Number of agents
    #[arg(long, default_value_t = 50)]
    pub agents: usize,

    /// Number of patterns
    #[arg(long, default_value_t = 20)]
    pub patterns: usize,

    /// Total modules in the network
    #[arg(long, default_value_t = 12)]
    pub modules: u32,

    /// Timestamp of the first pattern (milliseconds)
    #[arg(long, default_value_t = 0)]
    pub base_timestamp: i64,

    /// Serialization format (ignored with --json)
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

/// Run `generate`
pub fn execute(args: GenerateArgs, json_mode: bool) -> Result<()> {
    let config = SyntheticConfig {
        agent_count: args.agents,
        pattern_count: args.patterns,
        total_modules: args.modules,
        base_timestamp: args.base_timestamp,
        ..SyntheticConfig::default()
    };
    let snapshot = SyntheticStateCollector::with_config(args.seed, config).generate();

    let format = if json_mode { OutputFormat::Json } else { args.format };
    let rendered = match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(&snapshot).context("Failed to serialize snapshot")?
        }
        OutputFormat::Yaml => {
            serde_yaml::to_string(&snapshot).context("Failed to serialize snapshot")?
        }
    };

    println!("{rendered}");
    Ok(())
}
