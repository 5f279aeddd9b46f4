//! Config command: print the effective configuration.

use anyhow::Result;

use crate::cli::output::{output, CommandOutput};
use crate::domain::models::Config;

/// Result of `config`
#[derive(Debug, serde::Serialize)]
pub struct ConfigOutput {
    /// Effective configuration after all layers
    pub config: Config,
}

impl CommandOutput for ConfigOutput {
    fn to_human(&self) -> String {
        serde_yaml::to_string(&self.config).unwrap_or_default()
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(&self.config).unwrap_or_default()
    }
}

/// Run `config`
pub fn execute(config: &Config, json_mode: bool) -> Result<()> {
    output(
        &ConfigOutput {
            config: config.clone(),
        },
        json_mode,
    );
    Ok(())
}
