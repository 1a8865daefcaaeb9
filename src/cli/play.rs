//! Play command implementation.

use super::{CliError, ModeArg};
use mancala::session::console::{ConsolePlayer, ConsoleSink};
use mancala::run_session;
use std::io;

/// Execute the play command.
///
/// Without `mode` the player is asked to pick one from the menu.
///
/// # Errors
///
/// Returns an error if input closes early, output fails, or the CPU breaks
/// its contract with the game-over check.
pub(crate) fn execute(mode: Option<ModeArg>) -> Result<(), CliError> {
    println!("#######\nMANCALA!\n#######");

    let stdin = io::stdin();
    let mut human = ConsolePlayer::new(stdin.lock(), io::stdout());
    let mode = match mode {
        Some(mode) => mode.into(),
        None => human.prompt_mode()?,
    };

    let mut sink = ConsoleSink::new(io::stdout());
    run_session(mode, &mut human, &mut sink)?;

    Ok(())
}
