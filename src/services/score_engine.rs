//! Instantaneous scoring over one snapshot.
//!
//! The engine reduces agents, patterns and the network state to four
//! sub-scores:
//!
//! - **C(φ) coherence**: phi-ratio closeness × phase-lock alignment × resonance credit
//! - **R(ω) harmony**: depth-weighted mean frequency relative to the base resonance
//! - **E(ψ) emergence coefficient**: pattern velocity × mean adoption × mean impact
//! - **M(μ) network factor**: active module ratio × event efficiency × resolution speed
//!
//! Their product is the instantaneous index. No value is clamped or validated
//! beyond the three construction preconditions, so out-of-range inputs flow
//! straight through the formulas.

use tracing::debug;

use crate::domain::models::{Agent, NetworkState, Pattern, ScoreBreakdown, Snapshot};
use crate::domain::{DomainError, DomainResult};

/// Target phi ratio agents are measured against
pub const PHI_TARGET: f64 = 1.618_034;

/// Base resonance frequency in Hz
pub const BASE_RESONANCE: f64 = 530.0;

/// Maximum distance from the base resonance that still earns full credit
pub const RESONANCE_TOLERANCE: f64 = 5.0;

/// Resonance credit for an agent outside the tolerance band
const OFF_RESONANCE_CREDIT: f64 = 0.5;

/// Scores one snapshot of agents, patterns and network state
#[derive(Debug, Clone)]
pub struct ScoreEngine {
    agents: Vec<Agent>,
    patterns: Vec<Pattern>,
    network: NetworkState,
}

impl ScoreEngine {
    /// Create an engine over the given inputs.
    ///
    /// Fails with [`DomainError::InvalidInput`] when there are no agents, no
    /// patterns, or the network reports zero total modules.
    pub fn new(
        agents: Vec<Agent>,
        patterns: Vec<Pattern>,
        network: NetworkState,
    ) -> DomainResult<Self> {
        if agents.is_empty() {
            return Err(DomainError::InvalidInput(
                "agent collection cannot be empty".to_string(),
            ));
        }
        if patterns.is_empty() {
            return Err(DomainError::InvalidInput(
                "pattern collection cannot be empty".to_string(),
            ));
        }
        if network.total_modules == 0 {
            return Err(DomainError::InvalidInput(
                "total_modules must be at least 1".to_string(),
            ));
        }

        debug!(
            agents = agents.len(),
            patterns = patterns.len(),
            total_modules = network.total_modules,
            "score engine created"
        );

        Ok(Self {
            agents,
            patterns,
            network,
        })
    }

    /// Create an engine from a collected snapshot
    pub fn from_snapshot(snapshot: Snapshot) -> DomainResult<Self> {
        Self::new(snapshot.agents, snapshot.patterns, snapshot.network)
    }

    /// Agents being scored
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    /// Patterns being scored
    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    /// Network state being scored
    pub const fn network(&self) -> &NetworkState {
        &self.network
    }

    /// Coherence sub-score C(φ)
    pub fn coherence(&self) -> f64 {
        if self.agents.is_empty() {
            return 0.0;
        }
        self.phi_ratio_term() * self.alignment() * self.resonance_term()
    }

    /// Harmony sub-score R(ω)
    pub fn harmony(&self) -> f64 {
        if self.agents.is_empty() {
            return 0.0;
        }
        self.weighted_sum() / self.normalizer()
    }

    /// Emergence coefficient E(ψ)
    pub fn emergence_coefficient(&self) -> f64 {
        if self.patterns.is_empty() {
            return 0.0;
        }
        self.pattern_velocity() * self.avg_adoption() * self.avg_impact()
    }

    /// Network factor M(μ)
    pub fn network_factor(&self) -> f64 {
        self.network.module_ratio() * self.network.event_efficiency * self.network.resolution_speed
    }

    /// Product of the four sub-scores, with no integration or feedback
    pub fn instantaneous_index(&self) -> f64 {
        self.coherence() * self.harmony() * self.emergence_coefficient() * self.network_factor()
    }

    /// Report every intermediate term behind the sub-scores
    pub fn breakdown(&self) -> ScoreBreakdown {
        ScoreBreakdown {
            phi_ratio_term: self.phi_ratio_term(),
            alignment: self.alignment(),
            resonance_term: self.resonance_term(),
            weighted_sum: self.weighted_sum(),
            normalizer: self.normalizer(),
            pattern_velocity: self.pattern_velocity(),
            avg_adoption: self.avg_adoption(),
            avg_impact: self.avg_impact(),
            module_ratio: self.network.module_ratio(),
            coherence: self.coherence(),
            harmony: self.harmony(),
            emergence_coefficient: self.emergence_coefficient(),
            network_factor: self.network_factor(),
        }
    }

    fn phi_ratio_term(&self) -> f64 {
        mean(self.agents.iter().map(|a| a.phi_ratio)) / PHI_TARGET
    }

    fn alignment(&self) -> f64 {
        mean(
            self.agents
                .iter()
                .map(|a| if a.phi_locked { 1.0 } else { 0.0 }),
        )
    }

    fn resonance_term(&self) -> f64 {
        mean(self.agents.iter().map(|a| {
            if (a.resonance_frequency - BASE_RESONANCE).abs() <= RESONANCE_TOLERANCE {
                1.0
            } else {
                OFF_RESONANCE_CREDIT
            }
        }))
    }

    fn weighted_sum(&self) -> f64 {
        self.agents
            .iter()
            .map(|a| a.resonance_frequency * a.consciousness_depth)
            .sum()
    }

    fn normalizer(&self) -> f64 {
        BASE_RESONANCE * self.agents.len() as f64
    }

    fn pattern_velocity(&self) -> f64 {
        // Discoveries per unit window; the window is fixed at 1
        self.patterns.len() as f64
    }

    fn avg_adoption(&self) -> f64 {
        mean(self.patterns.iter().map(|p| p.adoption_rate))
    }

    fn avg_impact(&self) -> f64 {
        mean(self.patterns.iter().map(|p| p.consciousness_impact))
    }
}

/// Arithmetic mean, 0.0 for an empty sequence
fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0_usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}
