//! Parsing of human input lines.
//!
//! Players name pods 1-6 counting from their own left; [`pod_index`] turns
//! that into a board index.

use crate::error::InputError;
use crate::game::{PODS_PER_SIDE, Player};

/// A parsed input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Pod number 1-6 from the mover's point of view.
    Pod(u8),
    /// The player asked to quit (still to be confirmed).
    Quit,
}

/// Parse one line of input.
///
/// Surrounding whitespace is ignored. The rest must be a single character:
/// `q`/`Q` or a digit 1-6.
///
/// # Errors
///
/// Returns [`InputError::OutOfRange`] for other digits and
/// [`InputError::Unrecognized`] for everything else.
pub fn parse_command(line: &str) -> Result<Command, InputError> {
    let mut chars = line.trim().chars();
    let (Some(c), None) = (chars.next(), chars.next()) else {
        return Err(InputError::Unrecognized);
    };

    if c.eq_ignore_ascii_case(&'q') {
        return Ok(Command::Quit);
    }

    let digit = c.to_digit(10).ok_or(InputError::Unrecognized)?;
    let number = u8::try_from(digit).map_err(|_| InputError::Unrecognized)?;
    if (1..=PODS_PER_SIDE).contains(&usize::from(number)) {
        Ok(Command::Pod(number))
    } else {
        Err(InputError::OutOfRange(number))
    }
}

/// Check whether an answer to a yes/no question is a yes.
#[must_use]
pub fn parse_confirmation(line: &str) -> bool {
    line.trim()
        .chars()
        .next()
        .is_some_and(|c| c.eq_ignore_ascii_case(&'y'))
}

/// Translate a pod number 1-6 into the board index on `player`'s side.
///
/// # Panics
///
/// Panics in debug builds if `number` is not 1-6. Use [`parse_command`]
/// to get a number that is.
#[must_use]
pub const fn pod_index(number: u8, player: Player) -> usize {
    debug_assert!(
        number >= 1 && number as usize <= PODS_PER_SIDE,
        "pod number must be 1-6"
    );
    player.first_pod() + number as usize - 1
}

/// Who controls each side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameMode {
    /// Two humans share the terminal.
    #[default]
    TwoPlayer,
    /// The CPU plays Player 1.
    CpuPlayerOne,
    /// The CPU plays Player 2.
    CpuPlayerTwo,
    /// The CPU plays both sides.
    CpuOnly,
}

impl GameMode {
    /// Menu shown when asking for a mode.
    pub const MENU: &'static str =
        "Select from Options [0: \"2-Player VS\", 1: \"VS CPU P1\", 2: \"VS CPU P2\"]";

    /// Parse an answer to [`GameMode::MENU`].
    ///
    /// Only the first non-blank character counts.
    #[must_use]
    pub fn from_option(line: &str) -> Option<GameMode> {
        match line.trim().chars().next()? {
            '0' => Some(GameMode::TwoPlayer),
            '1' => Some(GameMode::CpuPlayerOne),
            '2' => Some(GameMode::CpuPlayerTwo),
            _ => None,
        }
    }

    /// Check if the CPU moves for `player` in this mode.
    #[must_use]
    pub const fn cpu_controls(self, player: Player) -> bool {
        matches!(
            (self, player),
            (GameMode::CpuOnly, _)
                | (GameMode::CpuPlayerOne, Player::One)
                | (GameMode::CpuPlayerTwo, Player::Two)
        )
    }
}
