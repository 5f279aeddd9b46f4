//! Command-line interface for the emergence engine.

/// Subcommand handlers
pub mod commands;
/// Output rendering
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use commands::breakdown::BreakdownArgs;
use commands::classify::ClassifyArgs;
use commands::evaluate::EvaluateArgs;
use commands::generate::GenerateArgs;

/// Top-level command line
#[derive(Parser, Debug)]
#[command(name = "emergence")]
#[command(about = "Emergence - swarm emergence scoring and integration engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Configuration file (defaults to .emergence/config.yaml)
    #[arg(long, global = true, env = "EMERGENCE_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score a snapshot and integrate it over feedback cycles
    Evaluate(EvaluateArgs),

    /// Show every intermediate scoring term for a snapshot
    Breakdown(BreakdownArgs),

    /// Classify a cumulative index value
    Classify(ClassifyArgs),

    /// Generate a synthetic snapshot
    Generate(GenerateArgs),

    /// Show the effective configuration
    Config,
}

/// Report a command failure and exit with status 1.
pub fn handle_error(err: anyhow::Error, json_mode: bool) -> ! {
    if json_mode {
        let causes: Vec<String> = err.chain().skip(1).map(ToString::to_string).collect();
        let body = serde_json::json!({
            "error": err.to_string(),
            "causes": causes,
        });
        println!("{}", serde_json::to_string_pretty(&body).unwrap_or_default());
    } else {
        eprintln!("Error: {err:#}");
    }
    std::process::exit(1);
}
