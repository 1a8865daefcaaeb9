//! Benchmarks for the rules engine.
//!
//! The full CPU-vs-CPU game is the hot path for the `run` command.

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use mancala::game::{Board, GameState, Player};
use mancala::{CpuPlayer, GameMode, NullSink, run_session};

fn bench_cpu_game(c: &mut Criterion) {
    c.bench_function("cpu_only_game", |b| {
        b.iter(|| {
            let outcome = run_session(black_box(GameMode::CpuOnly), &mut CpuPlayer, &mut NullSink);
            black_box(outcome.unwrap())
        });
    });
}

fn bench_sow(c: &mut Criterion) {
    // Pod 0 wraps the board once
    let mut holes = [0u32; 14];
    holes[0] = 20;
    holes[7] = 28;
    let board = Board::from_holes(holes).unwrap();

    c.bench_function("sow_wrapping", |b| {
        b.iter(|| {
            let mut board = black_box(board);
            black_box(board.sow(0, Player::One))
        });
    });
}

fn bench_play_turn(c: &mut Criterion) {
    c.bench_function("play_opening_turn", |b| {
        b.iter(|| {
            let mut state = GameState::new();
            black_box(state.play(black_box(0)).unwrap())
        });
    });
}

criterion_group!(benches, bench_cpu_game, bench_sow, bench_play_turn);
criterion_main!(benches);
