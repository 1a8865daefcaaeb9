//! Plain text rendering of the board and game messages.
//!
//! Player 1 sits on the top row reading right to left, Player 2 on the
//! bottom row reading left to right, so both number their pods 1-6 in
//! sowing order.

// format! into push_str reads better here
#![allow(clippy::format_push_string)]

use crate::game::{Board, FinalScore, Outcome, Player, TurnResolution};

/// Bottom border printed under every board.
const BORDER: &str = "*************************************";

/// Render the board.
///
/// Output format:
/// ```text
///              6  5  4  3  2  1       <-- P1
///        ---- 04 04 04 04 04 04 ----
///         00  -- -- -- -- -- --  00
///        ---- 04 04 04 04 04 04 ----
/// P2 -->       1  2  3  4  5  6
/// *************************************
/// ```
#[must_use]
pub fn render_board(board: &Board) -> String {
    let mut output = String::new();

    output.push_str("             6  5  4  3  2  1       <-- P1\n");
    render_row(&mut output, board, Player::One.pods().rev());
    output.push_str(&format!(
        "        {:02}  -- -- -- -- -- --  {:02}\n",
        board.store(Player::One),
        board.store(Player::Two)
    ));
    render_row(&mut output, board, Player::Two.pods());
    output.push_str("P2 -->       1  2  3  4  5  6\n");
    output.push_str(BORDER);
    output.push_str("\n\n");

    output
}

/// Render one side's pods between the row borders.
fn render_row(output: &mut String, board: &Board, pods: impl Iterator<Item = usize>) {
    output.push_str("       ---- ");
    for pod in pods {
        output.push_str(&format!("{:02} ", board.seeds(pod)));
    }
    output.push_str("----\n");
}

/// Message shown after a move that earned an extra turn or a capture.
#[must_use]
pub fn turn_message(resolution: &TurnResolution) -> Option<&'static str> {
    if resolution.extra_turn {
        Some("You get to go again!")
    } else if resolution.captured {
        Some("Capture opponent's pieces")
    } else {
        None
    }
}

/// Header line for a turn.
#[must_use]
pub fn turn_header(player: Player, cpu: bool) -> String {
    let prefix = if cpu { "CPU " } else { "" };
    format!("{prefix}{player}'s Turn")
}

/// Render the end-of-game summary.
///
/// ```text
/// Game Over: 42 turns.
/// Player 1 wins with score of: 30.
/// ```
#[must_use]
pub fn render_result(score: &FinalScore) -> String {
    let mut output = format!("Game Over: {} turns.\n", score.turns);
    match score.outcome() {
        Outcome::Winner { player, score } => {
            output.push_str(&format!("{player} wins with score of: {score}.\n"));
        }
        Outcome::Tie { score } => {
            output.push_str(&format!("Game is tied at {score}.\n"));
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_initial_board() {
        let expected = concat!(
            "             6  5  4  3  2  1       <-- P1\n",
            "       ---- 04 04 04 04 04 04 ----\n",
            "        00  -- -- -- -- -- --  00\n",
            "       ---- 04 04 04 04 04 04 ----\n",
            "P2 -->       1  2  3  4  5  6\n",
            "*************************************\n",
            "\n",
        );
        assert_eq!(render_board(&Board::new()), expected);
    }

    #[test]
    fn test_render_orders_player_one_right_to_left() {
        let holes = [10, 0, 2, 0, 0, 1, 3, 4, 4, 4, 4, 4, 0, 12];
        let board = Board::from_holes(holes).unwrap();

        let text = render_board(&board);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], "       ---- 01 00 00 02 00 10 ----");
        assert_eq!(lines[2], "        03  -- -- -- -- -- --  12");
        assert_eq!(lines[3], "       ---- 04 04 04 04 04 00 ----");
    }

    #[test]
    fn test_turn_messages() {
        let extra = TurnResolution {
            extra_turn: true,
            ..TurnResolution::default()
        };
        let capture = TurnResolution {
            captured: true,
            captured_seeds: 5,
            ..TurnResolution::default()
        };
        assert_eq!(turn_message(&extra), Some("You get to go again!"));
        assert_eq!(turn_message(&capture), Some("Capture opponent's pieces"));
        assert_eq!(turn_message(&TurnResolution::default()), None);
    }

    #[test]
    fn test_turn_header() {
        assert_eq!(turn_header(Player::One, false), "Player 1's Turn");
        assert_eq!(turn_header(Player::Two, true), "CPU Player 2's Turn");
    }

    #[test]
    fn test_render_result() {
        let win = FinalScore {
            player_one: 30,
            player_two: 18,
            turns: 42,
        };
        assert_eq!(
            render_result(&win),
            "Game Over: 42 turns.\nPlayer 1 wins with score of: 30.\n"
        );

        let tie = FinalScore {
            player_one: 24,
            player_two: 24,
            turns: 37,
        };
        assert_eq!(
            render_result(&tie),
            "Game Over: 37 turns.\nGame is tied at 24.\n"
        );
    }
}
