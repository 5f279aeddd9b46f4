//! Module network health scored by the network factor.

use serde::{Deserialize, Serialize};

/// Snapshot of network topology and efficiency.
///
/// `total_modules` must be at least 1; `ScoreEngine::new` rejects a zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NetworkState {
    /// Modules currently active
    pub active_modules: u32,

    /// Modules deployed in total
    pub total_modules: u32,

    /// Event processing efficiency
    pub event_efficiency: f64,

    /// Issue resolution speed
    pub resolution_speed: f64,
}

impl NetworkState {
    /// Create a new network state
    pub const fn new(
        active_modules: u32,
        total_modules: u32,
        event_efficiency: f64,
        resolution_speed: f64,
    ) -> Self {
        Self {
            active_modules,
            total_modules,
            event_efficiency,
            resolution_speed,
        }
    }

    /// Fraction of modules that are active, or 0.0 when no modules exist
    pub fn module_ratio(&self) -> f64 {
        if self.total_modules == 0 {
            return 0.0;
        }
        f64::from(self.active_modules) / f64::from(self.total_modules)
    }
}
