//! Prompt implementations over real input streams.

use std::io::{BufRead, Write};

use dialoguer::Input;

use crate::engine::core::GameError;
use crate::engine::{PlayerInput, Prompt};
use crate::map::map_line;

/// Line-oriented prompt: writes the prompt text, reads one line.
///
/// End of input counts as quitting, so a piped script shorter than a full game
/// ends cleanly instead of erroring.
pub struct LinePrompt<R, W> {
    reader: R,
    writer: W,
    line: String,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            line: String::with_capacity(64),
        }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> Prompt for LinePrompt<R, W> {
    fn read_move(&mut self, round: u32, prompt: &str) -> Result<PlayerInput, GameError> {
        write!(self.writer, "{prompt} ")?;
        self.writer.flush()?;

        self.line.clear();
        let n = self.reader.read_line(&mut self.line)?;
        if n == 0 {
            log::debug!("round {round}: end of input");
            return Ok(PlayerInput::Quit);
        }
        Ok(map_line(&self.line))
    }
}

/// Terminal prompt with line editing, for interactive sessions.
#[derive(Debug, Default)]
pub struct InteractivePrompt;

impl Prompt for InteractivePrompt {
    fn read_move(&mut self, _round: u32, prompt: &str) -> Result<PlayerInput, GameError> {
        let line = Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| GameError::Io(e.to_string()))?;
        Ok(map_line(&line))
    }
}
