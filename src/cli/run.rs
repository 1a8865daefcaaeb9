//! Run command implementation.

use super::output::{JsonGameResult, format_text};
use super::{CliError, OutputFormat};
use mancala::session::console::ConsoleSink;
use mancala::{BoardSink, CpuPlayer, GameMode, NullSink, SessionOutcome, run_session};
use std::io;

/// Execute the run command: the CPU plays both sides.
///
/// # Errors
///
/// Returns an error if the game fails to run.
pub(crate) fn execute(format: OutputFormat, quiet: bool) -> Result<(), CliError> {
    let mut console = ConsoleSink::new(io::stdout());
    let mut null = NullSink;
    let sink: &mut dyn BoardSink = if quiet || format == OutputFormat::Json {
        &mut null
    } else {
        &mut console
    };

    let record = match run_session(GameMode::CpuOnly, &mut CpuPlayer, sink)? {
        SessionOutcome::Finished(record) => record,
        SessionOutcome::Quit => return Err(CliError::new("CPU game ended without a result")),
    };

    // Output based on format
    match format {
        OutputFormat::Text => {
            print!("{}", format_text(&record));
        }
        OutputFormat::Json => {
            let json_result = JsonGameResult::from_record(&record);
            let json = serde_json::to_string_pretty(&json_result)
                .map_err(|e| CliError::new(format!("JSON serialization failed: {e}")))?;
            println!("{json}");
        }
    }

    Ok(())
}
