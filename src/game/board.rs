//! The 14-hole Kalah board.
//!
//! Layout by index:
//!
//! ```text
//! 0..=5   Player 1 pods
//! 6       Player 1 store
//! 7..=12  Player 2 pods
//! 13      Player 2 store
//! ```

use crate::game::Player;

/// Number of pods per side.
pub const PODS_PER_SIDE: usize = 6;
/// Total number of pods on the board.
pub const PODS: usize = PODS_PER_SIDE * 2;
/// Seeds placed in every pod at the start of a game.
pub const START_SEEDS: u32 = 4;
/// Seeds on the board for the whole game.
#[allow(clippy::cast_possible_truncation)]
pub const TOTAL_SEEDS: u32 = START_SEEDS * PODS as u32;
/// Number of holes (pods plus stores).
pub const HOLES: usize = PODS + 2;
/// Index of Player 1's store.
pub const STORE_P1: usize = HOLES / 2 - 1;
/// Index of Player 2's store.
pub const STORE_P2: usize = HOLES - 1;
/// Index of Player 2's first pod.
pub const POD_START_P2: usize = HOLES / 2;

/// Seed counts for every hole on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    holes: [u32; HOLES],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create a board with [`START_SEEDS`] in every pod and empty stores.
    #[must_use]
    pub fn new() -> Self {
        let mut holes = [START_SEEDS; HOLES];
        holes[STORE_P1] = 0;
        holes[STORE_P2] = 0;
        Self { holes }
    }

    /// Build a board from raw hole counts.
    ///
    /// Returns `None` unless the counts add up to [`TOTAL_SEEDS`]. Counts
    /// whose sum overflows are rejected too.
    #[must_use]
    pub fn from_holes(holes: [u32; HOLES]) -> Option<Self> {
        let total = holes
            .iter()
            .try_fold(0u32, |acc, &seeds| acc.checked_add(seeds))?;
        (total == TOTAL_SEEDS).then_some(Self { holes })
    }

    /// All hole counts in index order.
    #[must_use]
    pub const fn holes(&self) -> &[u32; HOLES] {
        &self.holes
    }

    /// Seeds in a single hole. Off-board indices read as empty.
    #[must_use]
    pub fn seeds(&self, hole: usize) -> u32 {
        self.holes.get(hole).copied().unwrap_or(0)
    }

    /// Seeds in a player's store.
    #[must_use]
    pub const fn store(&self, player: Player) -> u32 {
        self.holes[player.store_index()]
    }

    /// Check if a hole is one of the two stores.
    #[must_use]
    pub const fn is_store(hole: usize) -> bool {
        hole == STORE_P1 || hole == STORE_P2
    }

    /// Index of the pod directly across the board.
    ///
    /// Returns `None` for stores and indices off the board.
    #[must_use]
    pub const fn opposite(hole: usize) -> Option<usize> {
        if Self::is_store(hole) || hole > PODS {
            None
        } else {
            Some(PODS - hole)
        }
    }

    /// Sum of the seeds in a player's six pods, store excluded.
    #[must_use]
    pub fn side_sum(&self, player: Player) -> u32 {
        self.holes[player.pods()].iter().sum()
    }

    /// Check if a player's six pods are all empty.
    #[must_use]
    pub fn is_side_empty(&self, player: Player) -> bool {
        self.side_sum(player) == 0
    }

    /// Check if either side has run out of seeds.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        Player::ALL.into_iter().any(|player| self.is_side_empty(player))
    }

    /// Sum of every hole on the board.
    #[must_use]
    pub fn total_seeds(&self) -> u32 {
        self.holes.iter().sum()
    }

    /// Sow the seeds of `pod` for `player` and return the index of the hole
    /// that received the last seed.
    ///
    /// Seeds go one per hole counter-clockwise, wrapping modulo [`HOLES`].
    /// The opponent's store is passed over without receiving a seed.
    ///
    /// `pod` must be a non-empty pod; anything else is a caller bug.
    pub fn sow(&mut self, pod: usize, player: Player) -> usize {
        debug_assert!(
            pod < HOLES && !Self::is_store(pod),
            "sow called on non-pod hole {pod}"
        );
        debug_assert!(self.holes[pod] > 0, "sow called on empty pod {pod}");

        let skip = player.other().store_index();
        let mut seeds = std::mem::take(&mut self.holes[pod]);
        let mut hole = pod;

        while seeds > 0 {
            hole = (hole + 1) % HOLES;
            if hole != skip {
                self.holes[hole] += 1;
                seeds -= 1;
            }
        }

        hole
    }

    /// Apply the capture rule for a sow by `player` that ended on `landing`.
    ///
    /// A capture happens when the landing pod is on the mover's side, holds
    /// exactly one seed, and the opposite pod is not empty. Both pods are
    /// emptied into the mover's store. Returns the number of seeds banked.
    pub fn capture(&mut self, landing: usize, player: Player) -> Option<u32> {
        if Player::owning_pod(landing) != Some(player) || self.holes[landing] != 1 {
            return None;
        }
        let across = Self::opposite(landing)?;
        let taken = self.holes[across];
        if taken == 0 {
            return None;
        }

        let banked = taken + std::mem::take(&mut self.holes[landing]);
        self.holes[across] = 0;
        self.holes[player.store_index()] += banked;
        Some(banked)
    }

    /// Move every pod's seeds into its owner's store and clear the pods.
    pub fn sweep(&mut self) {
        for player in Player::ALL {
            let remaining = self.side_sum(player);
            self.holes[player.store_index()] += remaining;
            for pod in player.pods() {
                self.holes[pod] = 0;
            }
        }
    }
}
