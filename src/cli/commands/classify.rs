//! Classify command: map a cumulative index onto its emergence level.

use anyhow::Result;
use clap::Args;

use crate::cli::output::{colorize_level, format_score, level_range, output, CommandOutput};
use crate::domain::models::EmergenceLevel;
use crate::services::EmergenceIntegrator;

/// Arguments of `classify`
#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// Cumulative index value to classify
    #[arg(allow_negative_numbers = true)]
    pub value: f64,
}

/// Result of `classify`
#[derive(Debug, serde::Serialize)]
pub struct ClassifyOutput {
    /// Classified value
    pub value: f64,
    /// Level the value falls in
    pub level: EmergenceLevel,
    /// Inclusive lower bound of the level
    pub lower_bound: Option<f64>,
    /// Exclusive upper bound of the level
    pub upper_bound: Option<f64>,
}

impl CommandOutput for ClassifyOutput {
    fn to_human(&self) -> String {
        format!(
            "{} => {} {}",
            format_score(self.value),
            colorize_level(self.level),
            level_range(self.level)
        )
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Run `classify`
pub fn execute(args: ClassifyArgs, json_mode: bool) -> Result<()> {
    let level = EmergenceIntegrator::classify(args.value);
    output(
        &ClassifyOutput {
            value: args.value,
            level,
            lower_bound: level.lower_bound(),
            upper_bound: level.upper_bound(),
        },
        json_mode,
    );
    Ok(())
}
