#![no_main]

//! Full game fuzzer.
//!
//! Starts from an arbitrary 48-seed board and plays arbitrary pod choices,
//! legal or not. Illegal choices must be rejected without touching the
//! board; legal ones must keep every invariant.

use arbitrary::Arbitrary;
use mancala::game::{Board, GameState, HOLES, Player, TOTAL_SEEDS, check_invariants};
use libfuzzer_sys::fuzz_target;

/// Structured input for game fuzzing.
#[derive(Arbitrary, Debug)]
struct GameInput {
    /// Hole each of the 48 seeds is dropped into (taken modulo 14).
    drops: Vec<u8>,
    /// Whether Player 2 moves first.
    p2_first: bool,
    /// Raw board indices to play.
    moves: Vec<u8>,
}

fn build_board(drops: &[u8]) -> Board {
    let mut holes = [0u32; HOLES];
    for seed in 0..TOTAL_SEEDS as usize {
        let hole = drops.get(seed).map_or(seed % HOLES, |&d| usize::from(d) % HOLES);
        holes[hole] += 1;
    }
    Board::from_holes(holes).expect("48 seeds placed")
}

fuzz_target!(|input: GameInput| {
    let to_move = if input.p2_first { Player::Two } else { Player::One };
    let mut state = GameState::from_board(build_board(&input.drops), to_move);

    let violations = check_invariants(&state);
    assert!(violations.is_empty(), "Invariants violated at start: {violations:?}");

    for &raw in input.moves.iter().take(500) {
        let pod = usize::from(raw);
        let before = state;
        match state.play(pod) {
            Ok(report) => {
                let violations = check_invariants(&state);
                assert!(
                    violations.is_empty(),
                    "Invariants violated after {report:?}: {violations:?}"
                );
                assert_eq!(
                    state.board().store(report.player.other()),
                    before.board().store(report.player.other()),
                    "opponent's store changed"
                );
            }
            Err(_) => {
                assert_eq!(state.board(), before.board(), "rejected move changed the board");
                assert_eq!(state.current_player(), before.current_player());
            }
        }
    }

    let score = state.finalize();
    assert_eq!(score.player_one + score.player_two, TOTAL_SEEDS);
});
