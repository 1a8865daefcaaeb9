//! CLI command implementations for Mancala.

pub(crate) mod play;
pub(crate) mod run;

mod output;

use clap::ValueEnum;
use mancala::{GameMode, SessionError};

/// Seat assignment for the `play` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum ModeArg {
    /// Two humans at one terminal.
    TwoPlayer,
    /// The CPU plays Player 1.
    #[value(name = "cpu-p1")]
    CpuP1,
    /// The CPU plays Player 2.
    #[value(name = "cpu-p2")]
    CpuP2,
}

impl From<ModeArg> for GameMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::TwoPlayer => GameMode::TwoPlayer,
            ModeArg::CpuP1 => GameMode::CpuPlayerOne,
            ModeArg::CpuP2 => GameMode::CpuPlayerTwo,
        }
    }
}

/// Output format for the `run` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// CLI error type.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub(crate) struct CliError {
    message: String,
}

impl CliError {
    /// Create a new CLI error.
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        Self::new(e.to_string())
    }
}

impl From<SessionError> for CliError {
    fn from(e: SessionError) -> Self {
        Self::new(e.to_string())
    }
}
