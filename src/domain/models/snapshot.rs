//! One observation of a swarm: the full input of a scoring run.

use serde::{Deserialize, Serialize};

use super::{Agent, NetworkState, Pattern};

/// The three inputs of one evaluation, as handed over by a state collector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Agents being scored; must not be empty
    pub agents: Vec<Agent>,
    /// Learned patterns; must not be empty
    pub patterns: Vec<Pattern>,
    /// Module network health
    pub network: NetworkState,
}

impl Snapshot {
    /// Bundle the inputs without validating them
    pub const fn new(agents: Vec<Agent>, patterns: Vec<Pattern>, network: NetworkState) -> Self {
        Self {
            agents,
            patterns,
            network,
        }
    }
}
