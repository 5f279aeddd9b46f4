//! Recursive time-integration of the instantaneous index.
//!
//! Each cycle multiplies the four working values into a step, adds the step to
//! the running total, then grows every working value in proportion to the
//! step before clamping it to its saturation cap:
//!
//! | channel            | growth weight | cap |
//! |--------------------|---------------|-----|
//! | coherence C        | 1.0           | 2.0 |
//! | harmony R          | 0.5           | 2.0 |
//! | emergence E        | 2.0           | 5.0 |
//! | network M          | 1.0           | 1.5 |
//!
//! These weights, caps and the level thresholds in
//! [`EmergenceLevel::from_score`] are tuned against each other and must change
//! together if at all.

use chrono::Utc;
use tracing::debug;

use crate::domain::models::{CycleState, EmergenceLevel, EmergenceMetrics};
use crate::domain::{DomainError, DomainResult};
use crate::services::score_engine::ScoreEngine;

const COHERENCE_GROWTH: f64 = 1.0;
const HARMONY_GROWTH: f64 = 0.5;
const EMERGENCE_GROWTH: f64 = 2.0;
const NETWORK_GROWTH: f64 = 1.0;

/// Upper bound on the entries `trajectory` reserves up front; longer runs grow
/// the history as they go.
const TRAJECTORY_PREALLOC: usize = 4096;

/// Saturation cap for the coherence channel
pub const COHERENCE_CAP: f64 = 2.0;
/// Saturation cap for the harmony channel
pub const HARMONY_CAP: f64 = 2.0;
/// Saturation cap for the emergence channel
pub const EMERGENCE_CAP: f64 = 5.0;
/// Saturation cap for the network channel
pub const NETWORK_CAP: f64 = 1.5;

/// Loop-local working values of one integration run
#[derive(Debug, Clone, Copy)]
struct WorkingState {
    coherence: f64,
    harmony: f64,
    emergence: f64,
    network: f64,
}

impl WorkingState {
    fn from_engine(engine: &ScoreEngine) -> Self {
        Self {
            coherence: engine.coherence(),
            harmony: engine.harmony(),
            emergence: engine.emergence_coefficient(),
            network: engine.network_factor(),
        }
    }

    /// Run one cycle: return its step, then apply feedback and saturation.
    fn advance(&mut self, feedback_rate: f64) -> f64 {
        let step = self.coherence * self.harmony * self.emergence * self.network;
        let pressure = step * feedback_rate;

        self.coherence *= 1.0 + pressure * COHERENCE_GROWTH;
        self.harmony *= 1.0 + pressure * HARMONY_GROWTH;
        self.emergence *= 1.0 + pressure * EMERGENCE_GROWTH;
        self.network *= 1.0 + pressure * NETWORK_GROWTH;

        self.coherence = self.coherence.min(COHERENCE_CAP);
        self.harmony = self.harmony.min(HARMONY_CAP);
        self.emergence = self.emergence.min(EMERGENCE_CAP);
        self.network = self.network.min(NETWORK_CAP);

        step
    }
}

/// Integrates a [`ScoreEngine`]'s index over many feedback cycles.
///
/// Holds no state besides the wrapped engine: every call re-derives its
/// working values from the current sub-scores.
#[derive(Debug, Clone)]
pub struct EmergenceIntegrator {
    engine: ScoreEngine,
}

impl EmergenceIntegrator {
    /// Wrap an engine whose sub-scores seed every integration run
    pub const fn new(engine: ScoreEngine) -> Self {
        Self { engine }
    }

    /// The wrapped engine
    pub const fn engine(&self) -> &ScoreEngine {
        &self.engine
    }

    /// Sum of per-cycle steps over `cycles` feedback cycles.
    ///
    /// Fails with [`DomainError::InvalidParameter`] when `cycles` is zero or
    /// `feedback_rate` lies outside `(0.0, 1.0]`.
    pub fn cumulative_index(&self, cycles: u32, feedback_rate: f64) -> DomainResult<f64> {
        validate_parameters(cycles, feedback_rate)?;

        let mut state = WorkingState::from_engine(&self.engine);
        let mut total = 0.0;
        for _ in 0..cycles {
            total += state.advance(feedback_rate);
        }

        Ok(total)
    }

    /// Per-cycle working state of the same loop `cumulative_index` runs.
    ///
    /// The last entry's `total` equals `cumulative_index(cycles, feedback_rate)`.
    pub fn trajectory(&self, cycles: u32, feedback_rate: f64) -> DomainResult<Vec<CycleState>> {
        validate_parameters(cycles, feedback_rate)?;

        let mut state = WorkingState::from_engine(&self.engine);
        let mut total = 0.0;
        let mut history = Vec::with_capacity(initial_capacity(cycles));
        for cycle in 1..=cycles {
            let step = state.advance(feedback_rate);
            total += step;
            history.push(CycleState {
                cycle,
                step,
                total,
                coherence: state.coherence,
                harmony: state.harmony,
                emergence: state.emergence,
                network: state.network,
            });
        }

        Ok(history)
    }

    /// Map a cumulative index onto its emergence level
    pub fn classify(value: f64) -> EmergenceLevel {
        EmergenceLevel::from_score(value)
    }

    /// Evaluate all sub-scores, integrate, classify and timestamp the result
    pub fn metrics(&self, cycles: u32, feedback_rate: f64) -> DomainResult<EmergenceMetrics> {
        let phi_infinity = self.cumulative_index(cycles, feedback_rate)?;
        let level = Self::classify(phi_infinity);

        let metrics = EmergenceMetrics {
            c_phi: self.engine.coherence(),
            r_omega: self.engine.harmony(),
            e_psi: self.engine.emergence_coefficient(),
            m_mu: self.engine.network_factor(),
            phi_infinity,
            emergence_rate: self.engine.instantaneous_index(),
            level,
            timestamp: Utc::now().timestamp_millis(),
        };

        debug!(
            cycles,
            feedback_rate,
            phi_infinity,
            emergence_rate = metrics.emergence_rate,
            level = %level,
            "emergence metrics computed"
        );

        Ok(metrics)
    }
}

fn initial_capacity(cycles: u32) -> usize {
    usize::try_from(cycles).map_or(TRAJECTORY_PREALLOC, |n| n.min(TRAJECTORY_PREALLOC))
}

fn validate_parameters(cycles: u32, feedback_rate: f64) -> DomainResult<()> {
    if cycles == 0 {
        return Err(DomainError::InvalidParameter(
            "cycles must be at least 1".to_string(),
        ));
    }
    if feedback_rate.is_nan() || feedback_rate <= 0.0 || feedback_rate > 1.0 {
        return Err(DomainError::InvalidParameter(format!(
            "feedback_rate must be in (0.0, 1.0], got {feedback_rate}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{Agent, NetworkState, Pattern};
    use crate::services::score_engine::{BASE_RESONANCE, PHI_TARGET};

    fn unit_integrator() -> EmergenceIntegrator {
        let engine = ScoreEngine::new(
            vec![Agent::new("a-1", PHI_TARGET, BASE_RESONANCE, 1.0, true)],
            vec![Pattern::new("p-1", 1.0, 1.0, 1.0, 0)],
            NetworkState::new(1, 1, 1.0, 1.0),
        )
        .unwrap();
        EmergenceIntegrator::new(engine)
    }

    #[test]
    fn test_single_cycle_returns_instantaneous_index() {
        let integrator = unit_integrator();
        assert_eq!(integrator.cumulative_index(1, 0.01).unwrap(), 1.0);
    }

    #[test]
    fn test_feedback_compounds() {
        let integrator = unit_integrator();
        let total = integrator.cumulative_index(1000, 0.01).unwrap();
        assert!(total > 1000.0);
    }

    #[test]
    fn test_saturated_step_is_product_of_caps() {
        let integrator = unit_integrator();
        let history = integrator.trajectory(1000, 0.01).unwrap();
        let last = history.last().unwrap();

        assert_eq!(last.coherence, COHERENCE_CAP);
        assert_eq!(last.harmony, HARMONY_CAP);
        assert_eq!(last.emergence, EMERGENCE_CAP);
        assert_eq!(last.network, NETWORK_CAP);
        assert_eq!(last.step, COHERENCE_CAP * HARMONY_CAP * EMERGENCE_CAP * NETWORK_CAP);
    }

    #[test]
    fn test_first_cycle_feedback_is_asymmetric() {
        let integrator = unit_integrator();
        let history = integrator.trajectory(1, 0.1).unwrap();
        let first = history[0];

        assert_eq!(first.step, 1.0);
        assert!((first.coherence - 1.1).abs() < 1e-12);
        assert!((first.harmony - 1.05).abs() < 1e-12);
        assert!((first.emergence - 1.2).abs() < 1e-12);
        assert!((first.network - 1.1).abs() < 1e-12);
    }

    #[test]
    fn test_trajectory_total_matches_cumulative_index() {
        let integrator = unit_integrator();
        let total = integrator.cumulative_index(250, 0.05).unwrap();
        let history = integrator.trajectory(250, 0.05).unwrap();

        assert_eq!(history.len(), 250);
        assert_eq!(history.last().unwrap().total, total);
    }

    #[test]
    fn test_rejects_zero_cycles() {
        let integrator = unit_integrator();
        assert!(matches!(
            integrator.cumulative_index(0, 0.5),
            Err(DomainError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_feedback_rate_bounds() {
        let integrator = unit_integrator();
        for rate in [0.0, -0.1, 1.5, f64::NAN] {
            assert!(matches!(
                integrator.cumulative_index(10, rate),
                Err(DomainError::InvalidParameter(_))
            ));
        }
        assert!(integrator.cumulative_index(10, 1.0).is_ok());
    }

    #[test]
    fn test_metrics_assembles_record() {
        let integrator = unit_integrator();
        let metrics = integrator.metrics(1000, 0.01).unwrap();

        assert_eq!(metrics.c_phi, 1.0);
        assert_eq!(metrics.r_omega, 1.0);
        assert_eq!(metrics.e_psi, 1.0);
        assert_eq!(metrics.m_mu, 1.0);
        assert_eq!(metrics.emergence_rate, 1.0);
        assert_eq!(
            metrics.phi_infinity,
            integrator.cumulative_index(1000, 0.01).unwrap()
        );
        assert_eq!(metrics.level, EmergenceIntegrator::classify(metrics.phi_infinity));
        assert!(metrics.timestamp > 0);
    }

    #[test]
    fn test_metrics_propagates_parameter_errors() {
        let integrator = unit_integrator();
        assert!(integrator.metrics(0, 0.01).is_err());
    }

    #[test]
    fn test_trajectory_reservation_is_bounded() {
        assert_eq!(initial_capacity(1), 1);
        assert_eq!(initial_capacity(1000), 1000);
        assert_eq!(initial_capacity(u32::MAX), TRAJECTORY_PREALLOC);
    }

    #[test]
    fn test_trajectory_grows_past_reservation() {
        let integrator = unit_integrator();
        let cycles = u32::try_from(TRAJECTORY_PREALLOC).unwrap() + 10;
        let history = integrator.trajectory(cycles, 0.01).unwrap();

        assert_eq!(history.len(), TRAJECTORY_PREALLOC + 10);
        assert_eq!(history.last().unwrap().cycle, cycles);
    }
}
