//! End-to-end tests for the `mancala` binary.

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use serde::Deserialize;

#[derive(Deserialize)]
struct ScoresOut {
    player_one: u32,
    player_two: u32,
}

#[derive(Deserialize)]
struct MoveOut {
    player: u8,
    pod: usize,
}

#[derive(Deserialize)]
struct RunOut {
    turns: u32,
    winner: Option<u8>,
    scores: ScoresOut,
    moves: Vec<MoveOut>,
}

fn mancala() -> Command {
    Command::new(env!("CARGO_BIN_EXE_mancala"))
}

#[test]
fn test_run_json_result() {
    let output = mancala()
        .args(["run", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let result: RunOut = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(result.scores.player_one + result.scores.player_two, 48);
    assert_eq!(result.turns as usize, result.moves.len());
    assert!(result.moves.iter().all(|m| (1..=6).contains(&m.pod)));
    assert_eq!(result.moves[0].player, 1);

    let expected_winner = match result.scores.player_one.cmp(&result.scores.player_two) {
        std::cmp::Ordering::Greater => Some(1),
        std::cmp::Ordering::Less => Some(2),
        std::cmp::Ordering::Equal => None,
    };
    assert_eq!(result.winner, expected_winner);
}

#[test]
fn test_run_quiet_text() {
    mancala()
        .args(["run", "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Game Result\n"))
        .stdout(predicate::str::contains("  Turns: "))
        .stdout(predicate::str::contains("  Player 1: "))
        .stdout(predicate::str::contains("*****").not());
}

#[test]
fn test_run_verbose_shows_boards() {
    mancala()
        .arg("run")
        .assert()
        .success()
        .stdout(predicate::str::contains("CPU Player 1's Turn"))
        .stdout(predicate::str::contains("Game Over:"))
        .stdout(predicate::str::contains("Game Result"));
}

#[test]
fn test_play_quit_after_confirmation() {
    mancala()
        .args(["play", "--mode", "two-player"])
        .write_stdin("q\ny\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("#######\nMANCALA!\n#######\n"))
        .stdout(predicate::str::contains("Do you want to quit? [Y/N]"))
        .stdout(predicate::str::contains("Quitting game."));
}

#[test]
fn test_play_menu_then_moves() {
    mancala()
        .arg("play")
        .write_stdin("2\n7\n3\nq\ny\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Please pick a space between 1 and 6, not 7"))
        .stdout(predicate::str::contains("You get to go again!"))
        .stdout(predicate::str::contains("Quitting game."));
}

#[test]
fn test_play_cpu_takes_player_one() {
    mancala()
        .args(["play", "--mode", "cpu-p1"])
        .write_stdin("q\ny\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("CPU Player 1's Turn"))
        .stdout(predicate::str::contains("Player 2's Turn"));
}

#[test]
fn test_play_closed_input_fails() {
    mancala()
        .args(["play", "--mode", "two-player"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("Error: "));
}

#[test]
fn test_unknown_mode_rejected() {
    mancala()
        .args(["play", "--mode", "cpu-only"])
        .assert()
        .failure();
}
