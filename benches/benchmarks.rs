use criterion::{black_box, criterion_group, criterion_main, Criterion};

use duoku::agents::TreeAgent;
use duoku::game::{Board, GameState};
use duoku::search::{alphabeta, Deadline};

/// A well-known 9x9 puzzle position, 30 cells filled.
fn mid_game_state() -> GameState {
    const GRID: &str = "530070000\
                        600195000\
                        098000060\
                        800060003\
                        400803001\
                        700020006\
                        060000280\
                        000419005\
                        000080079";
    let cells = GRID.bytes().map(|b| b - b'0').collect();
    GameState::new(Board::from_cells(3, 3, cells))
}

fn alphabeta_benchmark(c: &mut Criterion) {
    let state = mid_game_state();
    let heuristic = TreeAgent::default();

    c.bench_function("alphabeta depth 1", |b| {
        b.iter(|| alphabeta(black_box(&state), 1, &heuristic, Deadline::never()))
    });
    c.bench_function("alphabeta depth 2", |b| {
        b.iter(|| alphabeta(black_box(&state), 2, &heuristic, Deadline::never()))
    });
    c.bench_function("legal moves", |b| {
        b.iter(|| black_box(&state).legal_moves())
    });
}

criterion_group!(benches, alphabeta_benchmark);
criterion_main!(benches);
