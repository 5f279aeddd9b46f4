//! Evaluate command: score a snapshot and integrate it over many cycles.

use anyhow::{Context, Result};
use clap::Args;
use tracing::{info, instrument};

use crate::cli::commands::source::SourceArgs;
use crate::cli::output::{colorize_level, key_value_table, output, push_value_row, CommandOutput};
use crate::domain::models::{Config, EmergenceMetrics};
use crate::services::{EmergenceIntegrator, ScoreEngine};

/// Arguments of `evaluate`
#[derive(Args, Debug)]
pub struct EvaluateArgs {
    /// Snapshot source
    #[command(flatten)]
    pub source: SourceArgs,

    /// Integration cycles (defaults to integration.cycles)
    #[arg(short, long)]
    pub cycles: Option<u32>,

    /// Feedback rate in (0.0, 1.0] (defaults to integration.feedback_rate)
    #[arg(short, long)]
    pub feedback_rate: Option<f64>,
}

/// Result of `evaluate`
#[derive(Debug, serde::Serialize)]
pub struct EvaluateOutput {
    /// Where the snapshot came from
    pub source: String,
    /// Cycles integrated
    pub cycles: u32,
    /// Feedback rate used
    pub feedback_rate: f64,
    /// Resulting metrics
    pub metrics: EmergenceMetrics,
}

impl CommandOutput for EvaluateOutput {
    fn to_human(&self) -> String {
        let m = &self.metrics;
        let mut table = key_value_table(["score", "value"]);
        push_value_row(&mut table, "C(φ) coherence", m.c_phi);
        push_value_row(&mut table, "R(ω) harmony", m.r_omega);
        push_value_row(&mut table, "E(ψ) emergence", m.e_psi);
        push_value_row(&mut table, "M(μ) network", m.m_mu);
        push_value_row(&mut table, "emergence rate", m.emergence_rate);
        push_value_row(&mut table, "Φ∞ cumulative", m.phi_infinity);

        format!(
            "Source: {}\nCycles: {}  Feedback rate: {}\n\n{}\n\nLevel: {}",
            self.source,
            self.cycles,
            self.feedback_rate,
            table,
            colorize_level(m.level)
        )
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Run `evaluate`
#[instrument(skip_all, fields(source = %args.source))]
pub fn execute(args: EvaluateArgs, config: &Config, json_mode: bool) -> Result<()> {
    let cycles = args.cycles.unwrap_or(config.integration.cycles);
    let feedback_rate = args.feedback_rate.unwrap_or(config.integration.feedback_rate);

    let snapshot = args
        .source
        .collector()
        .collect()
        .with_context(|| format!("Failed to collect snapshot from {}", args.source))?;
    let engine = ScoreEngine::from_snapshot(snapshot).context("Snapshot rejected by engine")?;
    let metrics = EmergenceIntegrator::new(engine)
        .metrics(cycles, feedback_rate)
        .context("Integration failed")?;

    info!(
        cycles,
        feedback_rate,
        phi_infinity = metrics.phi_infinity,
        level = %metrics.level,
        "evaluation complete"
    );

    output(
        &EvaluateOutput {
            source: args.source.to_string(),
            cycles,
            feedback_rate,
            metrics,
        },
        json_mode,
    );
    Ok(())
}
