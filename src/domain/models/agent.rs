//! Agent record scored by the coherence and harmony terms.

use serde::{Deserialize, Serialize};

/// One scored unit of the swarm.
///
/// Values are taken as-is: the engine tolerates out-of-range ratios, frequencies
/// and depths and never mutates an agent it is given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    /// Agent identifier (unique within one snapshot)
    pub id: String,

    /// Dimensionless ratio, expected to cluster near the golden ratio
    pub phi_ratio: f64,

    /// Resonance frequency in Hz, expected to cluster near 530 Hz
    pub resonance_frequency: f64,

    /// Multiplicative weight, conceptually within 0.0 - 1.0
    pub consciousness_depth: f64,

    /// Whether the agent is phase-locked to the target ratio
    #[serde(default)]
    pub phi_locked: bool,
}

impl Agent {
    /// Create a new agent
    pub fn new(
        id: impl Into<String>,
        phi_ratio: f64,
        resonance_frequency: f64,
        consciousness_depth: f64,
        phi_locked: bool,
    ) -> Self {
        Self {
            id: id.into(),
            phi_ratio,
            resonance_frequency,
            consciousness_depth,
            phi_locked,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agent_deserialize_defaults_phi_locked() {
        let json = r#"{
            "id": "a-1",
            "phi_ratio": 1.6,
            "resonance_frequency": 528.0,
            "consciousness_depth": 0.9
        }"#;

        let agent: Agent = serde_json::from_str(json).expect("agent should parse");
        assert_eq!(agent.id, "a-1");
        assert!(!agent.phi_locked);
    }
}
