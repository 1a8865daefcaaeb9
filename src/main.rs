//! Mancala CLI - play Kalah in the terminal.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod cli;

use clap::{Parser, Subcommand};
use std::process::ExitCode;

/// Mancala - Kalah rules, six pods a side, four seeds a pod
#[derive(Parser, Debug)]
#[command(name = "mancala")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Play an interactive game in the terminal
    Play {
        /// Who the CPU plays for (default: ask)
        #[arg(short, long)]
        mode: Option<cli::ModeArg>,
    },

    /// Let the CPU play both sides and print the result
    Run {
        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,

        /// Suppress turn-by-turn output
        #[arg(short, long)]
        quiet: bool,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    let result = match args.command {
        Commands::Play { mode } => cli::play::execute(mode),
        Commands::Run { format, quiet } => cli::run::execute(format, quiet),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
