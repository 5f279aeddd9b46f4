//! Seeded random snapshot generator.
//!
//! Produces agents and patterns jittered around the engine's target constants
//! so every formula gets exercised with realistic values. The same seed and
//! config always yield the same snapshot.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use uuid::Builder;

use crate::domain::models::{Agent, NetworkState, Pattern, Snapshot};
use crate::domain::ports::{CollectorError, StateCollector};
use crate::services::{BASE_RESONANCE, PHI_TARGET};

const DEFAULT_LOCK_PROBABILITY: f64 = 0.8;

/// Shape of the generated snapshot
#[derive(Debug, Clone)]
pub struct SyntheticConfig {
    /// Number of agents to generate
    pub agent_count: usize,
    /// Number of patterns to generate
    pub pattern_count: usize,
    /// Module count of the generated network; active modules fall in its upper half
    pub total_modules: u32,
    /// Timestamp of the first pattern; later patterns are one second apart
    pub base_timestamp: i64,
    /// Maximum deviation of an agent's phi ratio from the target
    pub phi_jitter: f64,
    /// Maximum deviation of an agent's frequency from the base resonance
    pub resonance_jitter: f64,
    /// Probability that an agent is phase-locked.
    ///
    /// Finite values are clamped to `[0.0, 1.0]`; NaN or infinity falls back
    /// to the default of 0.8.
    pub lock_probability: f64,
}

impl SyntheticConfig {
    fn effective_lock_probability(&self) -> f64 {
        if self.lock_probability.is_finite() {
            self.lock_probability.clamp(0.0, 1.0)
        } else {
            DEFAULT_LOCK_PROBABILITY
        }
    }
}

impl Default for SyntheticConfig {
    fn default() -> Self {
        Self {
            agent_count: 50,
            pattern_count: 20,
            total_modules: 12,
            base_timestamp: 0,
            phi_jitter: 0.05,
            resonance_jitter: 10.0,
            lock_probability: DEFAULT_LOCK_PROBABILITY,
        }
    }
}

/// Collector that fabricates snapshots instead of observing a live swarm
#[derive(Debug, Clone)]
pub struct SyntheticStateCollector {
    seed: u64,
    config: SyntheticConfig,
}

impl SyntheticStateCollector {
    /// Collector with the default snapshot shape
    pub fn new(seed: u64) -> Self {
        Self::with_config(seed, SyntheticConfig::default())
    }

    /// Collector with a custom snapshot shape
    pub const fn with_config(seed: u64, config: SyntheticConfig) -> Self {
        Self { seed, config }
    }

    /// Seed the generator starts from
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate the snapshot for this collector's seed
    pub fn generate(&self) -> Snapshot {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let config = &self.config;
        let lock_probability = config.effective_lock_probability();

        let agents = (0..config.agent_count)
            .map(|_| {
                let id = Builder::from_random_bytes(rng.gen()).into_uuid();
                Agent {
                    id: format!("agent-{id}"),
                    phi_ratio: PHI_TARGET + jitter(&mut rng, config.phi_jitter),
                    resonance_frequency: BASE_RESONANCE
                        + jitter(&mut rng, config.resonance_jitter),
                    consciousness_depth: rng.gen_range(0.5..=1.0),
                    phi_locked: rng.gen_bool(lock_probability),
                }
            })
            .collect();

        let patterns = (0..config.pattern_count)
            .map(|i| {
                let id = Builder::from_random_bytes(rng.gen()).into_uuid();
                Pattern {
                    id: format!("pattern-{id}"),
                    effectiveness_score: rng.gen_range(0.5..=1.0),
                    adoption_rate: rng.gen_range(0.3..=1.0),
                    consciousness_impact: rng.gen_range(0.3..=1.0),
                    timestamp: config.base_timestamp + i as i64 * 1000,
                }
            })
            .collect();

        let total = config.total_modules;
        let network = NetworkState {
            active_modules: rng.gen_range(total.div_ceil(2)..=total),
            total_modules: total,
            event_efficiency: rng.gen_range(0.7..=1.0),
            resolution_speed: rng.gen_range(0.7..=1.0),
        };

        Snapshot::new(agents, patterns, network)
    }
}

impl StateCollector for SyntheticStateCollector {
    fn collect(&self) -> Result<Snapshot, CollectorError> {
        Ok(self.generate())
    }
}

/// Uniform offset in `[-amplitude, amplitude]`; zero for non-finite or non-positive amplitudes
fn jitter(rng: &mut StdRng, amplitude: f64) -> f64 {
    if !amplitude.is_finite() || amplitude <= 0.0 {
        return 0.0;
    }
    rng.gen_range(-amplitude..=amplitude)
}
