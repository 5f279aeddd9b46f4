//! Scoring and integration services.

/// Feedback-loop integration of the index
pub mod emergence_integrator;
/// Instantaneous sub-scores
pub mod score_engine;

pub use emergence_integrator::EmergenceIntegrator;
pub use score_engine::{ScoreEngine, BASE_RESONANCE, PHI_TARGET, RESONANCE_TOLERANCE};
