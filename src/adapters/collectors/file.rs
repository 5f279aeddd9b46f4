//! Snapshot collector backed by a JSON or YAML fixture file.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::models::Snapshot;
use crate::domain::ports::{CollectorError, StateCollector};

/// Serialization format of a snapshot file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotFormat {
    /// `.json`
    Json,
    /// `.yaml` or `.yml`
    Yaml,
}

impl SnapshotFormat {
    /// Infer the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self, CollectorError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(CollectorError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Reads one snapshot from disk on every `collect` call
#[derive(Debug, Clone)]
pub struct FileStateCollector {
    path: PathBuf,
}

impl FileStateCollector {
    /// Collector for the snapshot at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// File this collector reads
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StateCollector for FileStateCollector {
    fn collect(&self) -> Result<Snapshot, CollectorError> {
        let format = SnapshotFormat::from_path(&self.path)?;
        let contents = fs::read_to_string(&self.path).map_err(|source| CollectorError::Io {
            path: self.path.clone(),
            source,
        })?;

        let parsed = match format {
            SnapshotFormat::Json => {
                serde_json::from_str::<Snapshot>(&contents).map_err(|e| e.to_string())
            }
            SnapshotFormat::Yaml => {
                serde_yaml::from_str::<Snapshot>(&contents).map_err(|e| e.to_string())
            }
        };
        let snapshot = parsed.map_err(|reason| CollectorError::Parse {
            path: self.path.clone(),
            reason,
        })?;

        debug!(
            path = %self.path.display(),
            agents = snapshot.agents.len(),
            patterns = snapshot.patterns.len(),
            "snapshot loaded from file"
        );

        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SNAPSHOT_JSON: &str = r#"{
        "agents": [
            {"id": "a-1", "phi_ratio": 1.618034, "resonance_frequency": 530.0,
             "consciousness_depth": 1.0, "phi_locked": true}
        ],
        "patterns": [
            {"id": "p-1", "effectiveness_score": 1.0, "adoption_rate": 1.0,
             "consciousness_impact": 1.0, "timestamp": 0}
        ],
        "network": {"active_modules": 1, "total_modules": 1,
                    "event_efficiency": 1.0, "resolution_speed": 1.0}
    }"#;

    fn write_temp(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            SnapshotFormat::from_path(Path::new("s.json")).unwrap(),
            SnapshotFormat::Json
        );
        assert_eq!(
            SnapshotFormat::from_path(Path::new("s.YML")).unwrap(),
            SnapshotFormat::Yaml
        );
        assert!(matches!(
            SnapshotFormat::from_path(Path::new("s.toml")),
            Err(CollectorError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_collect_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, "snapshot.json", SNAPSHOT_JSON);

        let snapshot = FileStateCollector::new(&path).collect().unwrap();
        assert_eq!(snapshot.agents.len(), 1);
        assert_eq!(snapshot.patterns[0].id, "p-1");
    }

    #[test]
    fn test_collect_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let collector = FileStateCollector::new(dir.path().join("absent.json"));
        assert!(matches!(collector.collect(), Err(CollectorError::Io { .. })));
    }

    #[test]
    fn test_collect_malformed_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, "snapshot.yaml", "agents: [not: a: list");

        let result = FileStateCollector::new(&path).collect();
        assert!(matches!(result, Err(CollectorError::Parse { .. })));
    }
}
