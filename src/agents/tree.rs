use std::time::Duration;

use log::{debug, info};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tokio::time;

use crate::env::{Move, MoveResponse, TurnRequest};
use crate::game::GameState;
use crate::search::{alphabeta, Cancelled, Deadline, Heuristic};

/// Interval at which the standing proposal is repeated once the search has
/// run out of budget.
const REPROPOSE_INTERVAL: Duration = Duration::from_millis(100);

/// Sending half of the engine → host proposal channel.
///
/// The host keeps the [`watch::Receiver`] and reads the latest proposal at a
/// deadline of its own choosing. `None` means no legal move exists (forfeit).
pub struct Proposer(watch::Sender<Option<Move>>);

impl Proposer {
    /// Publishes `mv`, replacing any earlier proposal. Returns `false` once
    /// the host has dropped its receiver.
    pub fn propose(&self, mv: Move) -> bool {
        self.0.send(Some(mv)).is_ok()
    }
}

pub fn proposal_channel() -> (Proposer, watch::Receiver<Option<Move>>) {
    let (tx, rx) = watch::channel(None);
    (Proposer(tx), rx)
}

/// Iterative-deepening alpha-beta agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TreeAgent {
    /// Weight of the board-progress term of the leaf evaluation.
    progress: f64,
}

impl Default for TreeAgent {
    fn default() -> Self {
        Self { progress: 0.01 }
    }
}

impl Heuristic for TreeAgent {
    fn eval(&self, state: &GameState, player: u8) -> f64 {
        let diff = state.scores[player as usize] - state.scores[1 - player as usize];
        state.board.filled_fraction() * self.progress + diff as f64
    }
}

impl TreeAgent {
    pub async fn step(&self, request: &TurnRequest, latency: u64) -> Option<MoveResponse> {
        let ms = request.game.timeout.saturating_sub(latency);
        let state = GameState::from_request(request);
        let deadline = Deadline::after(Duration::from_millis(ms));
        let mut rng = SmallRng::from_entropy();

        let (proposer, rx) = proposal_channel();
        let _ = time::timeout(
            Duration::from_millis(ms),
            iterative_search(self, &state, deadline, &mut rng, &proposer),
        )
        .await;

        let best = *rx.borrow();
        best.map(MoveResponse::from)
    }
}

/// Iterative-deepening driver: keeps a legal proposal standing from the
/// first instant on, replacing it after every fully completed depth.
///
/// Runs until the host drops its receiver or the surrounding future is
/// cancelled; a position without a legal move ends it immediately.
pub async fn iterative_search<H: Heuristic>(
    heuristic: &H,
    state: &GameState,
    deadline: Deadline,
    rng: &mut SmallRng,
    proposer: &Proposer,
) {
    // Immediate fallback so the host is never left without a proposal.
    let Some(first) = state.legal_moves().choose(rng).copied() else {
        info!(">>> no legal move");
        return;
    };
    let mut best = first;
    proposer.propose(best);

    // Depths beyond the number of empty cells cannot change the result.
    for depth in 1..=state.board.empty_cells() {
        if deadline.expired() {
            break;
        }
        match alphabeta(state, depth, heuristic, deadline) {
            Ok((value, Some(mv))) => {
                debug!(">>> depth {depth} value {value} move {mv}");
                best = mv;
                if !proposer.propose(best) {
                    return;
                }
            }
            Ok((_, None)) => break,
            Err(Cancelled) => {
                debug!(">>> depth {depth} cancelled");
                break;
            }
        }
        // let the surrounding timeout fire between depths
        tokio::task::yield_now().await;
    }

    // Budget exhausted: keep the standing move on the wire until the host
    // hangs up.
    loop {
        time::sleep(REPROPOSE_INTERVAL).await;
        if !proposer.propose(best) {
            return;
        }
    }
}
