//! Learned pattern record scored by the emergence coefficient.

use serde::{Deserialize, Serialize};

/// A discovered behavioral pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pattern {
    /// Pattern identifier
    pub id: String,

    /// How well the pattern performs where applied
    pub effectiveness_score: f64,

    /// Fraction of the swarm that has adopted the pattern
    pub adoption_rate: f64,

    /// Contribution of the pattern to collective depth
    pub consciousness_impact: f64,

    /// Discovery time, carried through untouched
    #[serde(default)]
    pub timestamp: i64,
}

impl Pattern {
    /// Create a new pattern
    pub fn new(
        id: impl Into<String>,
        effectiveness_score: f64,
        adoption_rate: f64,
        consciousness_impact: f64,
        timestamp: i64,
    ) -> Self {
        Self {
            id: id.into(),
            effectiveness_score,
            adoption_rate,
            consciousness_impact,
            timestamp,
        }
    }
}
