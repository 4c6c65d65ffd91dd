use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::env::{MoveResponse, TurnRequest};
use crate::game::GameState;

/// Plays a uniformly random legal move.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct RandomAgent;

impl RandomAgent {
    pub async fn step(&self, request: &TurnRequest) -> Option<MoveResponse> {
        let state = GameState::from_request(request);
        let mut rng = SmallRng::from_entropy();
        self.step_with(&state, &mut rng)
    }

    /// Deterministic variant with an injected random source.
    pub fn step_with(&self, state: &GameState, rng: &mut SmallRng) -> Option<MoveResponse> {
        state
            .legal_moves()
            .choose(rng)
            .copied()
            .map(MoveResponse::from)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::env::Move;

    #[test]
    fn proposes_a_legal_move_from_the_wire_format() {
        let request: TurnRequest = serde_json::from_str(
            r#"{
                "game": {"id": "g1", "timeout": 500},
                "board": {
                    "region_height": 2,
                    "region_width": 2,
                    "cells": [1, 2, 3, 0,  0, 0, 0, 0,  0, 0, 0, 0,  0, 0, 0, 0]
                },
                "taboo": [{"square": {"row": 3, "col": 3}, "value": 1}],
                "scores": [1, 0],
                "you": 1
            }"#,
        )
        .unwrap();
        let state = GameState::from_request(&request);
        assert_eq!(state.current, 1);
        assert_eq!(state.scores, [1, 0]);

        let mut rng = SmallRng::seed_from_u64(7);
        let response = RandomAgent.step_with(&state, &mut rng).unwrap();
        assert!(state.is_legal(Move::from(response)));

        // same seed, same proposal
        let mut rng = SmallRng::seed_from_u64(7);
        assert_eq!(RandomAgent.step_with(&state, &mut rng), Some(response));
    }

    #[test]
    fn dead_position_yields_nothing() {
        let request: TurnRequest = serde_json::from_str(
            r#"{
                "game": {"id": "g2"},
                "board": {
                    "region_height": 2,
                    "region_width": 2,
                    "cells": [1, 2, 3, 4,  3, 4, 1, 2,  2, 1, 4, 3,  4, 3, 2, 1]
                }
            }"#,
        )
        .unwrap();
        let state = GameState::from_request(&request);
        let mut rng = SmallRng::seed_from_u64(7);
        assert_eq!(RandomAgent.step_with(&state, &mut rng), None);
    }
}
