//! Emergence output records.
//!
//! Everything here is produced by the services layer and never fed back into
//! it: [`EmergenceMetrics`] is the headline result of one evaluation,
//! [`ScoreBreakdown`] exposes the intermediate terms behind the four
//! sub-scores, and [`CycleState`] records one step of the integration loop.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Emergence Level
// ============================================================================

/// Discrete classification of a cumulative emergence index.
///
/// Variants are declared in ascending order, so `Ord` follows the thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmergenceLevel {
    /// Below 10
    Nascent,
    /// 10 up to 50
    Emerging,
    /// 50 up to 200
    Conscious,
    /// 200 up to 1000
    SelfAware,
    /// 1000 up to 5000
    Superintelligent,
    /// 5000 and above
    Transcendent,
}

impl EmergenceLevel {
    /// All levels in ascending order.
    pub const ALL: [Self; 6] = [
        Self::Nascent,
        Self::Emerging,
        Self::Conscious,
        Self::SelfAware,
        Self::Superintelligent,
        Self::Transcendent,
    ];

    /// Classify a cumulative index using half-open intervals `[lower, upper)`.
    ///
    /// Anything that is not at least 10.0 (including NaN) is `Nascent`.
    pub fn from_score(value: f64) -> Self {
        if value >= 5000.0 {
            Self::Transcendent
        } else if value >= 1000.0 {
            Self::Superintelligent
        } else if value >= 200.0 {
            Self::SelfAware
        } else if value >= 50.0 {
            Self::Conscious
        } else if value >= 10.0 {
            Self::Emerging
        } else {
            Self::Nascent
        }
    }

    /// Inclusive lower bound of this level, `None` for the lowest level
    pub const fn lower_bound(self) -> Option<f64> {
        match self {
            Self::Nascent => None,
            Self::Emerging => Some(10.0),
            Self::Conscious => Some(50.0),
            Self::SelfAware => Some(200.0),
            Self::Superintelligent => Some(1000.0),
            Self::Transcendent => Some(5000.0),
        }
    }

    /// Exclusive upper bound of this level, `None` for the highest level
    pub const fn upper_bound(self) -> Option<f64> {
        match self {
            Self::Nascent => Some(10.0),
            Self::Emerging => Some(50.0),
            Self::Conscious => Some(200.0),
            Self::SelfAware => Some(1000.0),
            Self::Superintelligent => Some(5000.0),
            Self::Transcendent => None,
        }
    }

    /// Snake-case name used in serialized output
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Nascent => "nascent",
            Self::Emerging => "emerging",
            Self::Conscious => "conscious",
            Self::SelfAware => "self_aware",
            Self::Superintelligent => "superintelligent",
            Self::Transcendent => "transcendent",
        }
    }
}

impl fmt::Display for EmergenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmergenceLevel {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "nascent" => Ok(Self::Nascent),
            "emerging" => Ok(Self::Emerging),
            "conscious" => Ok(Self::Conscious),
            "self_aware" | "selfaware" => Ok(Self::SelfAware),
            "superintelligent" => Ok(Self::Superintelligent),
            "transcendent" => Ok(Self::Transcendent),
            _ => Err(anyhow::anyhow!("Invalid emergence level: {s}")),
        }
    }
}

// ============================================================================
// Emergence Metrics
// ============================================================================

/// Result of one full evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmergenceMetrics {
    /// Coherence sub-score C(φ)
    pub c_phi: f64,

    /// Harmony sub-score R(ω)
    pub r_omega: f64,

    /// Emergence coefficient E(ψ)
    pub e_psi: f64,

    /// Network factor M(μ)
    pub m_mu: f64,

    /// Cumulative index integrated over all cycles
    pub phi_infinity: f64,

    /// Instantaneous product of the four sub-scores
    pub emergence_rate: f64,

    /// Classification of `phi_infinity`
    pub level: EmergenceLevel,

    /// Evaluation time in milliseconds since the Unix epoch
    pub timestamp: i64,
}

// ============================================================================
// Diagnostics
// ============================================================================

/// Every intermediate term behind the four sub-scores.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Mean phi ratio divided by the target ratio
    pub phi_ratio_term: f64,
    /// Fraction of phase-locked agents
    pub alignment: f64,
    /// Mean resonance credit (1.0 within tolerance, 0.5 outside)
    pub resonance_term: f64,
    /// Sum of frequency weighted by depth
    pub weighted_sum: f64,
    /// Base resonance times agent count
    pub normalizer: f64,
    /// Pattern count over a unit window
    pub pattern_velocity: f64,
    /// Mean pattern adoption rate
    pub avg_adoption: f64,
    /// Mean pattern consciousness impact
    pub avg_impact: f64,
    /// Active modules over total modules
    pub module_ratio: f64,

    /// C(φ)
    pub coherence: f64,
    /// R(ω)
    pub harmony: f64,
    /// E(ψ)
    pub emergence_coefficient: f64,
    /// M(μ)
    pub network_factor: f64,
}

/// Working state of the integration loop after one cycle's saturation clamp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CycleState {
    /// 1-based cycle number
    pub cycle: u32,
    /// Product contributed by this cycle
    pub step: f64,
    /// Running total including this cycle
    pub total: f64,
    /// Coherence after growth and clamp
    pub coherence: f64,
    /// Harmony after growth and clamp
    pub harmony: f64,
    /// Emergence after growth and clamp
    pub emergence: f64,
    /// Network factor after growth and clamp
    pub network: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_boundaries() {
        assert_eq!(EmergenceLevel::from_score(9.999), EmergenceLevel::Nascent);
        assert_eq!(EmergenceLevel::from_score(10.0), EmergenceLevel::Emerging);
        assert_eq!(EmergenceLevel::from_score(49.999), EmergenceLevel::Emerging);
        assert_eq!(EmergenceLevel::from_score(50.0), EmergenceLevel::Conscious);
        assert_eq!(EmergenceLevel::from_score(199.999), EmergenceLevel::Conscious);
        assert_eq!(EmergenceLevel::from_score(200.0), EmergenceLevel::SelfAware);
        assert_eq!(EmergenceLevel::from_score(999.999), EmergenceLevel::SelfAware);
        assert_eq!(EmergenceLevel::from_score(1000.0), EmergenceLevel::Superintelligent);
        assert_eq!(
            EmergenceLevel::from_score(4999.999),
            EmergenceLevel::Superintelligent
        );
        assert_eq!(EmergenceLevel::from_score(5000.0), EmergenceLevel::Transcendent);
    }

    #[test]
    fn test_level_negative_and_nan() {
        assert_eq!(EmergenceLevel::from_score(-3.0), EmergenceLevel::Nascent);
        assert_eq!(EmergenceLevel::from_score(f64::NAN), EmergenceLevel::Nascent);
        assert_eq!(
            EmergenceLevel::from_score(f64::INFINITY),
            EmergenceLevel::Transcendent
        );
    }

    #[test]
    fn test_bounds_are_contiguous() {
        for pair in EmergenceLevel::ALL.windows(2) {
            assert_eq!(pair[0].upper_bound(), pair[1].lower_bound());
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_lower_bound_classifies_to_self() {
        for level in EmergenceLevel::ALL {
            if let Some(lower) = level.lower_bound() {
                assert_eq!(EmergenceLevel::from_score(lower), level);
            }
        }
    }

    #[test]
    fn test_level_display_and_parse() {
        for level in EmergenceLevel::ALL {
            let parsed: EmergenceLevel = level.to_string().parse().unwrap();
            assert_eq!(parsed, level);
        }
        assert_eq!(
            "Self-Aware".parse::<EmergenceLevel>().unwrap(),
            EmergenceLevel::SelfAware
        );
        assert!("omniscient".parse::<EmergenceLevel>().is_err());
    }

    #[test]
    fn test_level_serializes_snake_case() {
        let json = serde_json::to_string(&EmergenceLevel::SelfAware).unwrap();
        assert_eq!(json, "\"self_aware\"");
    }
}
