//! Game invariants - sanity checks that detect bugs.
//!
//! Every rule in the engine moves seeds between holes; none creates or
//! destroys them. If any of these checks fires, the engine is broken.

use crate::game::{GameState, TOTAL_SEEDS};

/// Invariant violation error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invariant violation: {message}")]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub message: String,
}

/// Check all game invariants.
///
/// Returns a list of violations found, or empty if all invariants hold.
#[must_use]
pub fn check_invariants(state: &GameState) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();
    let board = state.board();

    let total = board.total_seeds();
    if total != TOTAL_SEEDS {
        violations.push(InvariantViolation {
            message: format!("Board holds {total} seeds, expected {TOTAL_SEEDS}"),
        });
    }

    if state.is_game_over() != board.is_game_over() {
        violations.push(InvariantViolation {
            message: format!(
                "Game-over flag is {} but the board says {}",
                state.is_game_over(),
                board.is_game_over()
            ),
        });
    }

    violations
}

/// Assert all game invariants hold, panicking if any are violated.
///
/// Only active in debug builds. No-op in release builds.
///
/// # Panics
///
/// Panics with detailed message if any invariant is violated.
#[cfg(debug_assertions)]
pub fn assert_invariants(state: &GameState) {
    let violations = check_invariants(state);
    if !violations.is_empty() {
        let messages: Vec<_> = violations.iter().map(|v| v.message.as_str()).collect();
        panic!("Game invariant violations:\n  - {}", messages.join("\n  - "));
    }
}

/// No-op in release builds.
#[cfg(not(debug_assertions))]
pub fn assert_invariants(_state: &GameState) {}
