//! Application configuration model.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure for the emergence CLI
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Integration loop defaults
    #[serde(default)]
    pub integration: IntegrationConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Defaults for the recursive integration loop
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct IntegrationConfig {
    /// Number of cycles to integrate (at least 1)
    #[serde(default = "default_cycles")]
    pub cycles: u32,

    /// Feedback rate within (0.0, 1.0]
    #[serde(default = "default_feedback_rate")]
    pub feedback_rate: f64,
}

const fn default_cycles() -> u32 {
    1000
}

const fn default_feedback_rate() -> f64 {
    0.01
}

impl Default for IntegrationConfig {
    fn default() -> Self {
        Self {
            cycles: default_cycles(),
            feedback_rate: default_feedback_rate(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Directory for rolling log files (stderr only when unset)
    #[serde(default)]
    pub log_dir: Option<PathBuf>,

    /// File rotation: daily, hourly or never
    #[serde(default = "default_rotation")]
    pub rotation: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_rotation() -> String {
    "daily".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            log_dir: None,
            rotation: default_rotation(),
        }
    }
}
