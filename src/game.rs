//! Game layer: the Kalah rules engine.
//!
//! - Board with 12 pods and 2 stores
//! - Sowing that skips the opponent's store
//! - Extra turns, captures and the end-of-game sweep
//! - The single-rule CPU opponent

mod board;
mod cpu;
mod invariants;
mod player;
mod state;

pub use board::{
    Board, HOLES, POD_START_P2, PODS, PODS_PER_SIDE, START_SEEDS, STORE_P1, STORE_P2, TOTAL_SEEDS,
};
pub use cpu::cpu_select;
pub use invariants::{InvariantViolation, assert_invariants, check_invariants};
pub use player::Player;
pub use state::{FinalScore, GameState, Outcome, TurnReport, TurnResolution};
