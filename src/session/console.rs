//! Terminal front-end: a prompting human player and a text board sink.
//!
//! Both are generic over their reader and writer so tests can drive them
//! with in-memory buffers.

use std::io::{BufRead, Write};

use crate::error::{InputError, SessionError};
use crate::game::GameState;
use crate::input::{Command, GameMode, parse_command, parse_confirmation, pod_index};
use crate::render::{render_board, render_result, turn_header, turn_message};
use crate::session::{Announcement, BoardSink, MoveSource, Selection};

/// Prompt shown before every move.
pub const MOVE_PROMPT: &str = "Select a space [1 - 6], or Quit Game [Q]";
/// Prompt shown after `Q`.
pub const QUIT_PROMPT: &str = "Do you want to quit? [Y/N]";

/// A human player typing moves.
#[derive(Debug)]
pub struct ConsolePlayer<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsolePlayer<R, W> {
    /// Read moves from `input`, write prompts and complaints to `output`.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the reader and writer.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Ask which seats the CPU takes, repeating until a listed option is
    /// given.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::InputClosed`] if input ends first.
    pub fn prompt_mode(&mut self) -> Result<GameMode, SessionError> {
        loop {
            let line = self.ask(GameMode::MENU)?;
            if let Some(mode) = GameMode::from_option(&line) {
                return Ok(mode);
            }
        }
    }

    /// Print `prompt` and read one line.
    fn ask(&mut self, prompt: &str) -> Result<String, SessionError> {
        writeln!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(SessionError::InputClosed);
        }
        Ok(line)
    }
}

impl<R: BufRead, W: Write> MoveSource for ConsolePlayer<R, W> {
    fn select(&mut self, state: &GameState) -> Result<Selection, SessionError> {
        let player = state.current_player();
        loop {
            let line = self.ask(MOVE_PROMPT)?;
            match parse_command(&line) {
                Ok(Command::Quit) => {
                    if parse_confirmation(&self.ask(QUIT_PROMPT)?) {
                        return Ok(Selection::Quit);
                    }
                }
                Ok(Command::Pod(number)) => {
                    let pod = pod_index(number, player);
                    if state.board().seeds(pod) > 0 {
                        return Ok(Selection::Pod(pod));
                    }
                    writeln!(self.output, "{}", InputError::EmptyPod(number))?;
                }
                Err(e) => writeln!(self.output, "{e}")?,
            }
        }
    }
}

/// Writes boards and messages as plain text.
#[derive(Debug)]
pub struct ConsoleSink<W> {
    output: W,
}

impl<W: Write> ConsoleSink<W> {
    /// Write everything to `output`.
    pub fn new(output: W) -> Self {
        Self { output }
    }

    /// Give back the writer.
    pub fn into_inner(self) -> W {
        self.output
    }
}

impl<W: Write> BoardSink for ConsoleSink<W> {
    fn render(&mut self, state: &GameState) -> Result<(), SessionError> {
        self.output.write_all(render_board(state.board()).as_bytes())?;
        self.output.flush()?;
        Ok(())
    }

    fn announce(&mut self, announcement: &Announcement) -> Result<(), SessionError> {
        match announcement {
            Announcement::TurnStart { player, cpu } => {
                writeln!(self.output, "{}", turn_header(*player, *cpu))?;
            }
            Announcement::Moved(report) => {
                if let Some(message) = turn_message(&report.resolution) {
                    writeln!(self.output, "{message}")?;
                }
            }
            Announcement::Quit => writeln!(self.output, "Quitting game.")?,
            Announcement::GameOver(score) => {
                self.output.write_all(render_result(score).as_bytes())?;
            }
        }
        Ok(())
    }
}
