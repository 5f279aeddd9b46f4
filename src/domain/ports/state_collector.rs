//! Snapshot collection port.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::models::Snapshot;

/// Errors raised while obtaining a snapshot
#[derive(Debug, Error)]
pub enum CollectorError {
    /// The snapshot file could not be read
    #[error("Failed to read snapshot {path}: {source}")]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The snapshot file is not a valid snapshot
    #[error("Failed to parse snapshot {path}: {reason}")]
    Parse {
        /// File that failed
        path: PathBuf,
        /// Deserializer message
        reason: String,
    },

    /// The file extension names no supported format
    #[error("Unsupported snapshot format: {0}. Expected .json, .yaml or .yml")]
    UnsupportedFormat(String),
}

/// Port for whatever produces the engine's inputs.
///
/// Implementations may read fixtures, poll live telemetry or generate data;
/// the engine only ever sees the returned [`Snapshot`].
pub trait StateCollector {
    /// Produce one snapshot for evaluation
    fn collect(&self) -> Result<Snapshot, CollectorError>;
}
