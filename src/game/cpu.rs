//! The computer opponent.
//!
//! A single fixed rule: sow the lowest non-empty pod on your side.

use crate::error::EngineError;
use crate::game::{Board, Player};

/// Pick the CPU's pod for `player`: the first non-empty pod, lowest index
/// first.
///
/// # Errors
///
/// Returns [`EngineError::NoLegalMove`] if every pod on the side is empty.
/// Callers check for game over before asking, so this is a broken contract
/// rather than a game situation.
pub fn cpu_select(board: &Board, player: Player) -> Result<usize, EngineError> {
    player
        .pods()
        .find(|&pod| board.seeds(pod) > 0)
        .ok_or(EngineError::NoLegalMove { player })
}
