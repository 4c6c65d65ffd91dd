use std::time::Instant;

use clap::Parser;
use log::{debug, info};

use duoku::agents::Agent;
use duoku::env::{BoardData, GameData, Move, Square, TurnRequest};
use duoku::game::{Board, GameState, EMPTY};
use duoku::logging;

#[derive(Debug, Parser)]
#[clap(version, about = "Simulate games between two agents.")]
struct Opts {
    /// Time budget per turn in ms.
    #[clap(long, default_value_t = 200)]
    runtime: u64,
    #[clap(long, default_value_t = 3)]
    region_height: usize,
    #[clap(long, default_value_t = 3)]
    region_width: usize,
    #[clap(short, long, default_value_t = 1)]
    game_count: usize,
    /// The two competing agent configurations.
    agents: Vec<Agent>,
}

/// Points for completing 0, 1, 2 or 3 units with a single placement.
const UNIT_SCORES: [i32; 4] = [0, 1, 3, 7];

/// How many of the units through `sq` the placement just filled completely.
fn completed_units(board: &Board, sq: Square) -> usize {
    let n = board.n();
    let mut units = 0;
    if (0..n).all(|col| board[Square::new(sq.row, col as u8)] != EMPTY) {
        units += 1;
    }
    if (0..n).all(|row| board[Square::new(row as u8, sq.col)] != EMPTY) {
        units += 1;
    }
    let r0 = (sq.row as usize / board.region_height()) * board.region_height();
    let c0 = (sq.col as usize / board.region_width()) * board.region_width();
    let region_full = (r0..r0 + board.region_height())
        .all(|r| (c0..c0 + board.region_width()).all(|c| board[Square::new(r as u8, c as u8)] != EMPTY));
    if region_full {
        units += 1;
    }
    units
}

fn to_request(state: &GameState, runtime: u64) -> TurnRequest {
    TurnRequest {
        game: GameData {
            id: String::new(),
            timeout: runtime,
        },
        board: BoardData {
            region_height: state.board.region_height(),
            region_width: state.board.region_width(),
            cells: state.board.squares().map(|sq| state.board[sq]).collect(),
        },
        taboo: state.taboo.iter().copied().collect(),
        moves: state.history.clone(),
        scores: state.scores,
        you: state.current,
        allowed: [None, None],
    }
}

/// Plays one game and returns the final scores. The simulator is the score
/// authority: the engines only ever observe the resulting deltas.
async fn play_game(agents: &[Agent; 2], region_height: usize, region_width: usize, runtime: u64) -> [i32; 2] {
    let mut state = GameState::new(Board::new(region_height, region_width));

    while state.board.empty_cells() > 0 {
        let request = to_request(&state, runtime);
        let player = state.current as usize;
        let Some(response) = agents[player].step(&request, 0).await else {
            // the mover is stuck; the game ends on the current scores
            debug!("player {player} has no legal move");
            break;
        };

        let mv = Move::from(response);
        assert!(state.is_legal(mv), "player {player} played an illegal move {mv}");
        state = state.apply(mv);
        state.scores[player] += UNIT_SCORES[completed_units(&state.board, mv.square)];
        debug!("player {player} plays {mv}, scores {:?}", state.scores);
    }

    info!("{:?}", state.board);
    state.scores
}

#[tokio::main]
async fn main() {
    logging();

    let Opts {
        runtime,
        region_height,
        region_width,
        game_count,
        agents,
    } = Opts::parse();

    assert!(agents.len() == 2, "Exactly two agents are required");
    let agents = [agents[0].clone(), agents[1].clone()];

    let start = Instant::now();
    let mut wins = [0; 2];
    let mut draws = 0;
    for i in 0..game_count {
        let scores = play_game(&agents, region_height, region_width, runtime).await;
        match scores[0].cmp(&scores[1]) {
            std::cmp::Ordering::Greater => wins[0] += 1,
            std::cmp::Ordering::Less => wins[1] += 1,
            std::cmp::Ordering::Equal => draws += 1,
        }
        info!("game {i}: {scores:?}");
    }

    info!(
        "Simulation time: {}ms",
        (Instant::now() - start).as_millis()
    );
    println!("Result: {}/{}/{} of {}", wins[0], draws, wins[1], game_count);
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn unit_completion_scores() {
        // last cell of row 0, its column, and the top-right region at once
        let cells = vec![
            1, 2, 3, 0, //
            3, 4, 1, 2, //
            2, 1, 4, 3, //
            4, 3, 2, 1, //
        ];
        let mut board = Board::from_cells(2, 2, cells);
        board.put(Square::new(0, 3), 4);
        assert_eq!(completed_units(&board, Square::new(0, 3)), 3);
        assert_eq!(UNIT_SCORES[3], 7);

        // a placement that completes nothing
        let mut board = Board::new(2, 2);
        board.put(Square::new(1, 1), 1);
        assert_eq!(completed_units(&board, Square::new(1, 1)), 0);

        // completing a single row
        let cells = vec![
            1, 2, 3, 0, //
            0, 0, 0, 2, //
            0, 0, 0, 0, //
            0, 0, 0, 0, //
        ];
        let mut board = Board::from_cells(2, 2, cells);
        board.put(Square::new(0, 3), 4);
        assert_eq!(completed_units(&board, Square::new(0, 3)), 1);
    }
}
