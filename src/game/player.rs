//! Player identity.
//!
//! A player is derivable from a hole index: pods 0-5 and store 6 belong to
//! Player 1, pods 7-12 and store 13 belong to Player 2.

use std::fmt;
use std::ops::Range;

use crate::game::board::{POD_START_P2, PODS_PER_SIDE, STORE_P1, STORE_P2};

const LAST_POD_P1: usize = STORE_P1 - 1;
const LAST_POD_P2: usize = STORE_P2 - 1;

/// One of the two sides of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    /// Moves first; owns pods 0-5 and store 6.
    One,
    /// Owns pods 7-12 and store 13.
    Two,
}

impl Player {
    /// Both players in turn order.
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    /// Get the other player.
    #[must_use]
    pub const fn other(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// 1-based player number used in messages.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    /// Board index of this player's store.
    #[must_use]
    pub const fn store_index(self) -> usize {
        match self {
            Player::One => STORE_P1,
            Player::Two => STORE_P2,
        }
    }

    /// Board index of this player's first pod.
    #[must_use]
    pub const fn first_pod(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => POD_START_P2,
        }
    }

    /// Board indices of this player's six pods, lowest first.
    #[must_use]
    pub const fn pods(self) -> Range<usize> {
        let first = self.first_pod();
        first..first + PODS_PER_SIDE
    }

    /// The player whose side a pod lies on.
    ///
    /// Returns `None` for stores and indices off the board.
    #[must_use]
    pub const fn owning_pod(hole: usize) -> Option<Player> {
        match hole {
            0..=LAST_POD_P1 => Some(Player::One),
            POD_START_P2..=LAST_POD_P2 => Some(Player::Two),
            _ => None,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.number())
    }
}
