//! Error types for the Mancala engine and the turn loop.

use crate::game::Player;

/// Why the engine refused to play a pod.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// Index is not a hole on the board.
    #[error("hole {0} is not on the board")]
    OutOfBounds(usize),
    /// Stores cannot be sown from.
    #[error("hole {0} is a store and cannot be selected")]
    Store(usize),
    /// The pod is on the other player's side.
    #[error("pod {0} belongs to the other player")]
    WrongSide(usize),
    /// The pod has no seeds to sow.
    #[error("pod {0} does not contain any seeds")]
    EmptyPod(usize),
    /// No moves are accepted once a side is empty.
    #[error("the game is already over")]
    GameOver,
}

/// Engine failures that end the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// The CPU was asked to move for a side with no seeds.
    ///
    /// The game-over check runs before every turn, so this means the two
    /// have disagreed.
    #[error("CPU player algorithm error: {player} has no pod to sow")]
    NoLegalMove {
        /// The side the CPU was moving for.
        player: Player,
    },

    /// A move source produced a pod the engine rejected.
    #[error("illegal move: {0}")]
    IllegalMove(#[from] MoveError),
}

/// A line of human input that does not name a move.
///
/// These are shown to the player and the prompt is repeated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    /// Not a single digit or `Q`.
    #[error("Try again")]
    Unrecognized,
    /// A digit outside 1-6.
    #[error("Please pick a space between 1 and 6, not {0}")]
    OutOfRange(u8),
    /// The chosen pod (1-6 from the player's view) is empty.
    #[error("Pod {0} does not contain any seeds. Please select another pod.")]
    EmptyPod(u8),
}

/// Errors that end a session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The engine reported a fatal condition.
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// Input ended before the game did.
    #[error("input closed before the game finished")]
    InputClosed,
}

impl From<MoveError> for SessionError {
    fn from(e: MoveError) -> Self {
        Self::Engine(EngineError::IllegalMove(e))
    }
}
