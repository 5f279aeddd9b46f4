//! Breakdown command: show every intermediate scoring term.

use anyhow::{Context, Result};
use clap::Args;
use tracing::instrument;

use crate::cli::commands::source::SourceArgs;
use crate::cli::output::{key_value_table, output, push_value_row, CommandOutput};
use crate::domain::models::ScoreBreakdown;
use crate::services::ScoreEngine;

/// Arguments of `breakdown`
#[derive(Args, Debug)]
pub struct BreakdownArgs {
    /// Snapshot source
    #[command(flatten)]
    pub source: SourceArgs,
}

/// Result of `breakdown`
#[derive(Debug, serde::Serialize)]
pub struct BreakdownOutput {
    /// Where the snapshot came from
    pub source: String,
    /// Product of the four sub-scores
    pub instantaneous_index: f64,
    /// Every intermediate term
    pub breakdown: ScoreBreakdown,
}

impl CommandOutput for BreakdownOutput {
    fn to_human(&self) -> String {
        let b = &self.breakdown;
        let mut table = key_value_table(["term", "value"]);
        push_value_row(&mut table, "phi_ratio_term", b.phi_ratio_term);
        push_value_row(&mut table, "alignment", b.alignment);
        push_value_row(&mut table, "resonance_term", b.resonance_term);
        push_value_row(&mut table, "  => coherence", b.coherence);
        push_value_row(&mut table, "weighted_sum", b.weighted_sum);
        push_value_row(&mut table, "normalizer", b.normalizer);
        push_value_row(&mut table, "  => harmony", b.harmony);
        push_value_row(&mut table, "pattern_velocity", b.pattern_velocity);
        push_value_row(&mut table, "avg_adoption", b.avg_adoption);
        push_value_row(&mut table, "avg_impact", b.avg_impact);
        push_value_row(&mut table, "  => emergence_coefficient", b.emergence_coefficient);
        push_value_row(&mut table, "module_ratio", b.module_ratio);
        push_value_row(&mut table, "  => network_factor", b.network_factor);
        push_value_row(&mut table, "instantaneous_index", self.instantaneous_index);

        format!("Source: {}\n\n{}", self.source, table)
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

#[instrument(skip_all, fields(source = %args.source))]
/// Run `breakdown`
pub fn execute(args: BreakdownArgs, json_mode: bool) -> Result<()> {
    let snapshot = args
        .source
        .collector()
        .collect()
        .with_context(|| format!("Failed to collect snapshot from {}", args.source))?;
    let engine = ScoreEngine::from_snapshot(snapshot).context("Snapshot rejected by engine")?;

    output(
        &BreakdownOutput {
            source: args.source.to_string(),
            instantaneous_index: engine.instantaneous_index(),
            breakdown: engine.breakdown(),
        },
        json_mode,
    );
    Ok(())
}
