use std::fmt;
use std::str::FromStr;

mod random;
pub use random::*;
mod tree;
pub use tree::*;

use crate::env::{MoveResponse, TurnRequest};

/// Agent configuration, parsed from JSON on the command line.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub enum Agent {
    Tree(TreeAgent),
    Random(RandomAgent),
}

impl Default for Agent {
    fn default() -> Self {
        Self::Tree(TreeAgent::default())
    }
}

impl Agent {
    /// Computes a move for the given turn. `None` means the player has no
    /// legal placement and forfeits.
    pub async fn step(&self, request: &TurnRequest, latency: u64) -> Option<MoveResponse> {
        match self {
            Agent::Tree(agent) => agent.step(request, latency).await,
            Agent::Random(agent) => agent.step(request).await,
        }
    }
}

impl FromStr for Agent {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}

impl fmt::Display for Agent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&serde_json::to_string(self).unwrap_or_default())
    }
}
