use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use term_tetris::core::{landing_position, Board, GameConfig, GameSnapshot, GameState, Piece};
use term_tetris::types::{Cell, GameAction, PieceKind};

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new(GameConfig::default(), 12345);

    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| {
            if state.game_over() {
                state = GameState::new(GameConfig::default(), 12345);
            }
            state.tick(black_box(Duration::from_millis(16)));
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::default();
            // Fill bottom 4 rows
            for y in 16..20 {
                for x in 0..10 {
                    board.set(x, y, Cell::Occupied(PieceKind::I));
                }
            }
            black_box(board.clear_lines());
        })
    });
}

fn bench_ghost(c: &mut Criterion) {
    let board = Board::default();
    let piece = Piece::new(PieceKind::T, 4, 0);

    c.bench_function("landing_position", |b| {
        b.iter(|| black_box(landing_position(&board, black_box(&piece))))
    });
}

fn bench_move_and_rotate(c: &mut Criterion) {
    let mut state = GameState::new(GameConfig::default(), 12345);

    c.bench_function("move_and_rotate", |b| {
        b.iter(|| {
            state.apply_action(GameAction::MoveRight);
            state.apply_action(GameAction::RotateClockwise);
            state.apply_action(GameAction::MoveLeft);
        })
    });
}

fn bench_hard_drop_game(c: &mut Criterion) {
    c.bench_function("hard_drop_until_game_over", |b| {
        b.iter(|| {
            let mut state = GameState::new(GameConfig::default(), black_box(7));
            while !state.game_over() {
                state.hard_drop();
            }
            black_box(state.score())
        })
    });
}

fn bench_snapshot_into(c: &mut Criterion) {
    let state = GameState::new(GameConfig::default(), 12345);
    let mut snap = GameSnapshot::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| state.snapshot_into(black_box(&mut snap)))
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_ghost,
    bench_move_and_rotate,
    bench_hard_drop_game,
    bench_snapshot_into
);
criterion_main!(benches);
