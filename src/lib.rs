// Allow unwrap and panics in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::panic))]
//! Mancala: a Kalah rules engine and text-terminal game.
//!
//! This crate provides:
//! - The rules engine: sowing, captures, extra turns, the end-of-game sweep
//! - A single-rule CPU opponent
//! - A turn loop that talks to players and displays through traits
//! - Console implementations of those traits
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │   CLI (play / run)                  │
//! ├─────────────────────────────────────┤
//! │   Session: MoveSource, BoardSink    │
//! ├─────────────────────────────────────┤
//! │   Game: Board, GameState, CPU       │
//! └─────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use mancala::{GameState, Player, STORE_P1};
//!
//! let mut game = GameState::new();
//! // Pod index 2 holds four seeds; the last lands in Player 1's store.
//! let report = game.play(2).unwrap();
//! assert_eq!(report.landing, STORE_P1);
//! assert!(report.resolution.extra_turn);
//! assert_eq!(game.current_player(), Player::One);
//! ```

pub mod error;
pub mod game;
pub mod input;
pub mod render;
pub mod session;

pub use error::{EngineError, InputError, MoveError, SessionError};

// Re-export key game types at crate root for convenience
pub use game::{
    Board, FinalScore, GameState, HOLES, Outcome, Player, STORE_P1, STORE_P2, TOTAL_SEEDS,
    TurnReport, TurnResolution,
};
pub use input::GameMode;
pub use session::{
    Announcement, BoardSink, CpuPlayer, GameRecord, MoveSource, NullSink, Selection,
    SessionOutcome, run_from, run_session,
};
