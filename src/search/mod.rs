mod alphabeta;
pub use alphabeta::*;

use std::fmt::Debug;
use std::time::{Duration, Instant};

use crate::game::GameState;

/// A heuristic that evaluates the game state at the leafs of a tree search.
pub trait Heuristic: Debug + Send + Sync + 'static {
    /// Value of `state` from the perspective of `player` — the player that
    /// initiated the search, not the one to move at this node.
    fn eval(&self, state: &GameState, player: u8) -> f64;
}

/// Soft time budget of a search, captured once at the start of a turn and
/// threaded through every recursive call.
///
/// [`Deadline::never`] never expires, which keeps searches deterministic in
/// tests and benchmarks.
#[derive(Debug, Clone, Copy)]
pub struct Deadline(Option<Instant>);

impl Deadline {
    pub fn after(budget: Duration) -> Deadline {
        Deadline(Some(Instant::now() + budget))
    }

    pub fn never() -> Deadline {
        Deadline(None)
    }

    pub fn expired(self) -> bool {
        self.0.map_or(false, |at| Instant::now() >= at)
    }
}

/// Returned when a search ran over its deadline. The partially explored
/// depth carries no usable result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cancelled;
