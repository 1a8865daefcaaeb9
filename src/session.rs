//! The turn loop.
//!
//! A session owns one [`GameState`], asks the CPU or a human
//! [`MoveSource`] for each move depending on the [`GameMode`], and hands
//! every board to a [`BoardSink`]. The engine never does I/O; everything that
//! talks to a terminal lives behind these traits.

pub mod console;

use crate::error::SessionError;
use crate::game::{FinalScore, GameState, Player, TurnReport};
use crate::input::GameMode;

/// What a move source decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Sow this board index.
    Pod(usize),
    /// Stop the game without a result.
    Quit,
}

/// Something that picks moves for the player to move.
pub trait MoveSource {
    /// Choose a pod for the current player of `state`.
    ///
    /// Implementations must return a pod the engine accepts, or
    /// [`Selection::Quit`].
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot produce a move at all.
    fn select(&mut self, state: &GameState) -> Result<Selection, SessionError>;
}

/// Events reported to a [`BoardSink`] besides the board itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Announcement {
    /// A turn is starting.
    TurnStart {
        /// The side to move.
        player: Player,
        /// Whether the CPU is moving.
        cpu: bool,
    },
    /// A move has been played and the game goes on.
    Moved(TurnReport),
    /// The human quit.
    Quit,
    /// The game is over and the pods have been swept.
    GameOver(FinalScore),
}

/// Observer of the game. Sinks never change the state they are shown.
pub trait BoardSink {
    /// Show the current board.
    ///
    /// # Errors
    ///
    /// Returns an error if output fails.
    fn render(&mut self, state: &GameState) -> Result<(), SessionError>;

    /// Report an event.
    ///
    /// # Errors
    ///
    /// Returns an error if output fails.
    fn announce(&mut self, announcement: &Announcement) -> Result<(), SessionError>;
}

/// Move source for the computer player.
#[derive(Debug, Clone, Copy, Default)]
pub struct CpuPlayer;

impl MoveSource for CpuPlayer {
    fn select(&mut self, state: &GameState) -> Result<Selection, SessionError> {
        Ok(Selection::Pod(state.cpu_select()?))
    }
}

/// A sink that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl BoardSink for NullSink {
    fn render(&mut self, _state: &GameState) -> Result<(), SessionError> {
        Ok(())
    }

    fn announce(&mut self, _announcement: &Announcement) -> Result<(), SessionError> {
        Ok(())
    }
}

/// Every move of a finished game and its final score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    /// Moves in the order they were played.
    pub moves: Vec<TurnReport>,
    /// Store totals after the sweep.
    pub result: FinalScore,
}

/// How a session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// A side ran out of seeds.
    Finished(GameRecord),
    /// A human quit; no winner is declared.
    Quit,
}

/// Play a game from the opening position.
///
/// Sides the CPU controls under `mode` are played by [`CpuPlayer`]; every
/// other turn is asked of `human`.
///
/// # Errors
///
/// Returns any error raised by a source or the sink, including
/// [`crate::EngineError::NoLegalMove`] from the CPU.
pub fn run_session(
    mode: GameMode,
    human: &mut dyn MoveSource,
    sink: &mut dyn BoardSink,
) -> Result<SessionOutcome, SessionError> {
    run_from(GameState::new(), mode, human, sink)
}

/// Play a game from `state`. See [`run_session`].
///
/// # Errors
///
/// Returns any error raised by a source or the sink.
pub fn run_from(
    mut state: GameState,
    mode: GameMode,
    human: &mut dyn MoveSource,
    sink: &mut dyn BoardSink,
) -> Result<SessionOutcome, SessionError> {
    let mut cpu = CpuPlayer;
    let mut moves = Vec::new();

    sink.render(&state)?;

    while !state.is_game_over() {
        let player = state.current_player();
        let cpu_turn = mode.cpu_controls(player);
        let source: &mut dyn MoveSource = if cpu_turn { &mut cpu } else { &mut *human };

        sink.announce(&Announcement::TurnStart {
            player,
            cpu: cpu_turn,
        })?;

        let pod = match source.select(&state)? {
            Selection::Pod(pod) => pod,
            Selection::Quit => {
                sink.announce(&Announcement::Quit)?;
                return Ok(SessionOutcome::Quit);
            }
        };

        let report = state.play(pod)?;
        moves.push(report);

        if state.is_game_over() {
            break;
        }

        sink.render(&state)?;
        sink.announce(&Announcement::Moved(report))?;
    }

    let result = state.finalize();
    sink.announce(&Announcement::GameOver(result))?;
    sink.render(&state)?;

    Ok(SessionOutcome::Finished(GameRecord { moves, result }))
}
