//! Output formatting utilities for CLI.

use mancala::{GameRecord, Outcome, Player};
use serde::Serialize;

/// JSON-serializable game result.
#[derive(Debug, Serialize)]
pub(super) struct JsonGameResult {
    /// Moves played, extra turns included.
    pub(super) turns: u32,
    /// Winning player number (null if tied).
    pub(super) winner: Option<u8>,
    /// Final store totals.
    pub(super) scores: JsonScores,
    /// Every move in order.
    pub(super) moves: Vec<JsonMove>,
}

/// JSON-serializable store totals.
#[derive(Debug, Serialize)]
pub(super) struct JsonScores {
    /// Player 1's store.
    pub(super) player_one: u32,
    /// Player 2's store.
    pub(super) player_two: u32,
}

/// JSON-serializable move.
#[derive(Debug, Serialize)]
pub(super) struct JsonMove {
    /// Player number (1-2).
    pub(super) player: u8,
    /// Pod number as the player sees it (1-6).
    pub(super) pod: usize,
    /// Board index of the last seed.
    pub(super) landing: usize,
    /// Whether the move earned another turn.
    pub(super) extra_turn: bool,
    /// Seeds banked by a capture (0 if none).
    pub(super) captured: u32,
}

impl JsonGameResult {
    /// Create from a finished game.
    pub(super) fn from_record(record: &GameRecord) -> Self {
        let winner = match record.result.outcome() {
            Outcome::Winner { player, .. } => Some(player.number()),
            Outcome::Tie { .. } => None,
        };

        Self {
            turns: record.result.turns,
            winner,
            scores: JsonScores {
                player_one: record.result.player_one,
                player_two: record.result.player_two,
            },
            moves: record
                .moves
                .iter()
                .map(|m| JsonMove {
                    player: m.player.number(),
                    pod: m.pod - m.player.first_pod() + 1,
                    landing: m.landing,
                    extra_turn: m.resolution.extra_turn,
                    captured: m.resolution.captured_seeds,
                })
                .collect(),
        }
    }
}

/// Format a game result as human-readable text.
pub(super) fn format_text(record: &GameRecord) -> String {
    let mut output = String::new();

    output.push_str("Game Result\n");
    match record.result.outcome() {
        Outcome::Winner { player, score } => {
            output.push_str(&format!("  Winner: {player} ({score} seeds)\n"));
        }
        Outcome::Tie { score } => {
            output.push_str(&format!("  Winner: Tie at {score}\n"));
        }
    }
    output.push_str(&format!("  Turns: {}\n\n", record.result.turns));

    for player in Player::ALL {
        let captures = record
            .moves
            .iter()
            .filter(|m| m.player == player && m.resolution.captured)
            .count();
        let extra_turns = record
            .moves
            .iter()
            .filter(|m| m.player == player && m.resolution.extra_turn)
            .count();
        output.push_str(&format!(
            "  {player}: {} seeds ({captures} captures, {extra_turns} extra turns)\n",
            record.result.score(player)
        ));
    }

    output
}
