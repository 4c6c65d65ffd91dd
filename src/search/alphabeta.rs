use super::{Cancelled, Deadline, Heuristic};
use crate::env::Move;
use crate::game::GameState;

/// Alpha-Beta tree search with explicit deadline cancellation.
///
/// @see https://en.wikipedia.org/wiki/Alpha%E2%80%93beta_pruning
/// - The player to move at the root is the maximizing side and the reference
///   point for all leaf evaluations.
/// - `Err(Cancelled)` propagates through every active frame; a depth that ran
///   over its deadline yields no partial value.
///
/// The caller's state is never touched: the search explores a private clone
/// with balanced play/undo pairs.
pub fn alphabeta(
    state: &GameState,
    depth: usize,
    heuristic: &dyn Heuristic,
    deadline: Deadline,
) -> Result<(f64, Option<Move>), Cancelled> {
    let mut state = state.clone();
    let player = state.current;
    alphabeta_rec(
        &mut state,
        depth,
        f64::NEG_INFINITY,
        f64::INFINITY,
        player,
        heuristic,
        deadline,
    )
}

fn alphabeta_rec(
    state: &mut GameState,
    depth: usize,
    mut alpha: f64,
    mut beta: f64,
    player: u8,
    heuristic: &dyn Heuristic,
    deadline: Deadline,
) -> Result<(f64, Option<Move>), Cancelled> {
    if deadline.expired() {
        return Err(Cancelled);
    }

    let mut moves = state.legal_moves();
    if depth == 0 || moves.is_empty() {
        // A mover without a legal placement passes; the subtree ends here.
        return Ok((heuristic.eval(state, player), None));
    }

    // Crowded units first for the maximizing side, sparse units first for
    // the minimizing side.
    let maximizing = state.current == player;
    moves.sort_unstable_by_key(|mv| state.board.crowdedness(mv.square));
    if maximizing {
        moves.reverse();
    }

    let mut best = None;
    if maximizing {
        let mut value = f64::NEG_INFINITY;
        for mv in moves {
            state.play(mv);
            let result = alphabeta_rec(state, depth - 1, alpha, beta, player, heuristic, deadline);
            state.undo();
            let (score, _) = result?;
            if score > value {
                value = score;
                best = Some(mv);
            }
            if value > alpha {
                alpha = value;
            }
            if alpha >= beta {
                break;
            }
        }
        Ok((value, best))
    } else {
        let mut value = f64::INFINITY;
        for mv in moves {
            state.play(mv);
            let result = alphabeta_rec(state, depth - 1, alpha, beta, player, heuristic, deadline);
            state.undo();
            let (score, _) = result?;
            if score < value {
                value = score;
                best = Some(mv);
            }
            if value < beta {
                beta = value;
            }
            if alpha >= beta {
                break;
            }
        }
        Ok((value, best))
    }
}
