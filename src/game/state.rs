//! Game state management.

use crate::error::{EngineError, MoveError};
use crate::game::{Board, HOLES, Player, assert_invariants, cpu_select};

/// What happened at the end of a sow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TurnResolution {
    /// The last seed landed in the mover's store; they move again.
    pub extra_turn: bool,
    /// The last seed landed in an empty pod of the mover's opposite a
    /// non-empty pod.
    pub captured: bool,
    /// Seeds banked by the capture (opposite pod plus the landing seed).
    pub captured_seeds: u32,
}

/// A completed move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    /// Who moved.
    pub player: Player,
    /// Board index that was sown.
    pub pod: usize,
    /// Board index that received the last seed.
    pub landing: usize,
    /// Extra turn and capture outcome.
    pub resolution: TurnResolution,
}

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// One store holds more seeds.
    Winner {
        /// The winning side.
        player: Player,
        /// Seeds in the winner's store.
        score: u32,
    },
    /// Both stores hold the same number of seeds.
    Tie {
        /// Seeds in each store.
        score: u32,
    },
}

/// Store totals after the final sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinalScore {
    /// Player 1's store.
    pub player_one: u32,
    /// Player 2's store.
    pub player_two: u32,
    /// Moves played, extra turns included.
    pub turns: u32,
}

impl FinalScore {
    /// Score for one side.
    #[must_use]
    pub const fn score(&self, player: Player) -> u32 {
        match player {
            Player::One => self.player_one,
            Player::Two => self.player_two,
        }
    }

    /// Decide the winner. Equal stores are a tie.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        match self.player_one.cmp(&self.player_two) {
            std::cmp::Ordering::Greater => Outcome::Winner {
                player: Player::One,
                score: self.player_one,
            },
            std::cmp::Ordering::Less => Outcome::Winner {
                player: Player::Two,
                score: self.player_two,
            },
            std::cmp::Ordering::Equal => Outcome::Tie {
                score: self.player_one,
            },
        }
    }
}

/// Complete game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    turn: u32,
    game_over: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Start a game on a fresh board with Player 1 to move.
    #[must_use]
    pub fn new() -> Self {
        Self::from_board(Board::new(), Player::One)
    }

    /// Resume from an arbitrary position.
    #[must_use]
    pub fn from_board(board: Board, to_move: Player) -> Self {
        Self {
            board,
            current_player: to_move,
            turn: 0,
            game_over: board.is_game_over(),
        }
    }

    /// Get reference to board.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Player whose move it is.
    #[must_use]
    pub const fn current_player(&self) -> Player {
        self.current_player
    }

    /// Number of moves played so far.
    #[must_use]
    pub const fn turn(&self) -> u32 {
        self.turn
    }

    /// Check if the game is over (either side has no seeds left in its pods).
    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Hand the move to the other player.
    pub fn switch_player(&mut self) -> Player {
        self.current_player = self.current_player.other();
        self.current_player
    }

    /// Sow `pod` for `player` without validation. See [`Board::sow`].
    pub fn sow(&mut self, pod: usize, player: Player) -> usize {
        self.board.sow(pod, player)
    }

    /// Apply the end-of-sow rules for a sow by `player` ending on `landing`.
    ///
    /// Landing in the mover's own store grants an extra turn and skips the
    /// capture check entirely. Otherwise the capture rule is tried.
    pub fn resolve_turn(&mut self, landing: usize, player: Player) -> TurnResolution {
        if landing == player.store_index() {
            return TurnResolution {
                extra_turn: true,
                ..TurnResolution::default()
            };
        }

        match self.board.capture(landing, player) {
            Some(seeds) => TurnResolution {
                extra_turn: false,
                captured: true,
                captured_seeds: seeds,
            },
            None => TurnResolution::default(),
        }
    }

    /// Check that the current player may sow `pod`.
    ///
    /// # Errors
    ///
    /// Returns a [`MoveError`] describing why the pod cannot be played.
    pub fn validate(&self, pod: usize) -> Result<(), MoveError> {
        if self.game_over {
            return Err(MoveError::GameOver);
        }
        if pod >= HOLES {
            return Err(MoveError::OutOfBounds(pod));
        }
        if Board::is_store(pod) {
            return Err(MoveError::Store(pod));
        }
        if Player::owning_pod(pod) != Some(self.current_player) {
            return Err(MoveError::WrongSide(pod));
        }
        if self.board.seeds(pod) == 0 {
            return Err(MoveError::EmptyPod(pod));
        }
        Ok(())
    }

    /// Play one move for the current player.
    ///
    /// Sows `pod`, resolves extra turn and capture, counts the move, and
    /// re-checks for game over. The move passes to the other player unless
    /// an extra turn was earned.
    ///
    /// # Errors
    ///
    /// Returns a [`MoveError`] if the pod cannot be played; the state is
    /// left untouched.
    pub fn play(&mut self, pod: usize) -> Result<TurnReport, MoveError> {
        self.validate(pod)?;

        let player = self.current_player;
        let landing = self.sow(pod, player);
        let resolution = self.resolve_turn(landing, player);

        self.turn += 1;
        self.game_over = self.board.is_game_over();
        if !resolution.extra_turn {
            self.switch_player();
        }

        assert_invariants(self);

        Ok(TurnReport {
            player,
            pod,
            landing,
            resolution,
        })
    }

    /// Pick the CPU's move for the current player.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NoLegalMove`] if the current side is empty.
    pub fn cpu_select(&self) -> Result<usize, EngineError> {
        cpu_select(&self.board, self.current_player)
    }

    /// Sweep the remaining pods into their owners' stores and report the
    /// final score.
    pub fn finalize(&mut self) -> FinalScore {
        self.board.sweep();
        self.game_over = true;

        FinalScore {
            player_one: self.board.store(Player::One),
            player_two: self.board.store(Player::Two),
            turns: self.turn,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{STORE_P1, STORE_P2, TOTAL_SEEDS};

    #[test]
    fn test_initial_state() {
        let state = GameState::new();
        assert_eq!(state.current_player(), Player::One);
        assert_eq!(state.turn(), 0);
        assert!(!state.is_game_over());
    }

    #[test]
    fn test_opening_move() {
        let mut state = GameState::new();
        let report = state.play(0).unwrap();

        assert_eq!(report.landing, 4);
        assert_eq!(report.resolution, TurnResolution::default());
        assert_eq!(state.current_player(), Player::Two);
        assert_eq!(state.turn(), 1);
        for pod in 1..=4 {
            assert_eq!(state.board().seeds(pod), 5);
        }
    }

    #[test]
    fn test_extra_turn_keeps_mover() {
        let mut holes = [4; HOLES];
        holes[0] = 6;
        holes[1] = 2;
        holes[STORE_P1] = 0;
        holes[STORE_P2] = 0;
        let mut state = GameState::from_board(Board::from_holes(holes).unwrap(), Player::One);

        let report = state.play(0).unwrap();

        assert_eq!(report.landing, STORE_P1);
        assert!(report.resolution.extra_turn);
        assert!(!report.resolution.captured);
        assert_eq!(state.board().store(Player::One), 1);
        assert_eq!(state.current_player(), Player::One);
    }

    #[test]
    fn test_capture_move() {
        // Pod 1 holds 2 seeds and lands on empty pod 3, across from pod 9
        let mut holes = [4; HOLES];
        holes[1] = 2;
        holes[3] = 0;
        holes[STORE_P1] = 0;
        holes[STORE_P2] = 6;
        let board = Board::from_holes(holes).unwrap();
        let mut state = GameState::from_board(board, Player::One);

        let report = state.play(1).unwrap();

        assert_eq!(report.landing, 3);
        assert!(report.resolution.captured);
        assert_eq!(report.resolution.captured_seeds, 5);
        assert_eq!(state.board().seeds(3), 0);
        assert_eq!(state.board().seeds(9), 0);
        assert_eq!(state.board().store(Player::One), 5);
        assert_eq!(state.current_player(), Player::Two);
    }

    #[test]
    fn test_store_landing_skips_capture() {
        let mut state = GameState::new();
        let resolution = state.resolve_turn(STORE_P1, Player::One);
        assert!(resolution.extra_turn);
        assert!(!resolution.captured);
    }

    #[test]
    fn test_validate_rejects_bad_pods() {
        let mut state = GameState::new();
        assert_eq!(state.play(14), Err(MoveError::OutOfBounds(14)));
        assert_eq!(state.play(STORE_P1), Err(MoveError::Store(STORE_P1)));
        assert_eq!(state.play(8), Err(MoveError::WrongSide(8)));

        state.play(0).unwrap();
        state.play(7).unwrap();
        assert_eq!(state.play(0), Err(MoveError::EmptyPod(0)));
        assert_eq!(state.turn(), 2);
    }

    #[test]
    fn test_game_over_blocks_moves() {
        let mut holes = [0; HOLES];
        holes[10] = 8;
        holes[STORE_P1] = 20;
        holes[STORE_P2] = 20;
        let mut state = GameState::from_board(Board::from_holes(holes).unwrap(), Player::Two);

        assert!(state.is_game_over());
        assert_eq!(state.play(10), Err(MoveError::GameOver));
    }

    #[test]
    fn test_finalize_sweeps_and_scores() {
        let mut holes = [0; HOLES];
        holes[10] = 4;
        holes[12] = 4;
        holes[STORE_P1] = 24;
        holes[STORE_P2] = 16;
        let mut state = GameState::from_board(Board::from_holes(holes).unwrap(), Player::One);

        let score = state.finalize();

        assert_eq!(score.player_one, 24);
        assert_eq!(score.player_two, 24);
        assert_eq!(score.player_one + score.player_two, TOTAL_SEEDS);
        assert_eq!(score.outcome(), Outcome::Tie { score: 24 });
        assert!(state.board().holes()[..STORE_P1].iter().all(|&s| s == 0));
    }

    #[test]
    fn test_outcome_winner() {
        let score = FinalScore {
            player_one: 20,
            player_two: 28,
            turns: 40,
        };
        assert_eq!(
            score.outcome(),
            Outcome::Winner {
                player: Player::Two,
                score: 28
            }
        );
        assert_eq!(score.score(Player::One), 20);
    }

    #[test]
    fn test_cpu_game_runs_to_completion() {
        let mut state = GameState::new();
        while !state.is_game_over() {
            let pod = state.cpu_select().unwrap();
            state.play(pod).unwrap();
        }
        let score = state.finalize();
        assert_eq!(score.player_one + score.player_two, TOTAL_SEEDS);
        assert_eq!(score.turns, state.turn());
    }
}
