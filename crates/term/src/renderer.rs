//! ConsoleView: flushes view lines to a terminal or any other writer.
//!
//! Lines are encoded into an internal buffer first and written in one go, so a
//! round's block never interleaves with log output on a shared terminal.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    QueueableCommand,
};

use crate::engine::{Presenter, Rejection};
use crate::types::{FinalScore, RoundRecord};
use crate::view::{final_lines, quit_lines, rejection_lines, round_lines, Tone, ViewLine};

pub struct ConsoleView<W> {
    out: W,
    color: bool,
    buf: Vec<u8>,
}

impl ConsoleView<io::Stdout> {
    pub fn stdout(color: bool) -> Self {
        Self::new(io::stdout(), color)
    }
}

impl<W: Write> ConsoleView<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self {
            out,
            color,
            buf: Vec::with_capacity(1024),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn draw(&mut self, lines: &[ViewLine]) {
        self.buf.clear();
        let result = encode_lines_into(lines, self.color, &mut self.buf).and_then(|()| {
            self.out.write_all(&self.buf)?;
            self.out.flush()?;
            Ok(())
        });
        if let Err(e) = result {
            log::warn!("failed to write game output: {e}");
        }
    }
}

impl<W: Write> Presenter for ConsoleView<W> {
    fn show_round(&mut self, record: &RoundRecord) {
        self.draw(&round_lines(record));
    }

    fn show_rejection(&mut self, rejection: &Rejection) {
        self.draw(&rejection_lines(rejection));
    }

    fn show_final(&mut self, score: &FinalScore) {
        self.draw(&final_lines(score));
    }

    fn show_quit(&mut self, score: &FinalScore, rounds_played: u32) {
        self.draw(&quit_lines(score, rounds_played));
    }
}

/// Encode a block of lines into `out`, followed by a blank separator line.
///
/// With `color` off the output is the bare text.
pub fn encode_lines_into(lines: &[ViewLine], color: bool, out: &mut Vec<u8>) -> Result<()> {
    for line in lines {
        if color {
            apply_tone_into(out, line.tone)?;
            out.queue(Print(&line.text))?;
            out.queue(ResetColor)?;
            out.queue(SetAttribute(Attribute::Reset))?;
        } else {
            out.extend_from_slice(line.text.as_bytes());
        }
        out.push(b'\n');
    }
    out.push(b'\n');
    Ok(())
}

fn apply_tone_into(out: &mut Vec<u8>, tone: Tone) -> Result<()> {
    match tone {
        Tone::Plain => {}
        Tone::Heading => {
            out.queue(SetAttribute(Attribute::Bold))?;
        }
        Tone::Good => {
            out.queue(SetForegroundColor(Color::Green))?;
        }
        Tone::Bad => {
            out.queue(SetForegroundColor(Color::Red))?;
        }
        Tone::Neutral => {
            out.queue(SetForegroundColor(Color::Yellow))?;
        }
        Tone::Warning => {
            out.queue(SetForegroundColor(Color::Magenta))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Move, RoundOutcome};

    fn record() -> RoundRecord {
        RoundRecord {
            round: 1,
            player: Move::Paper,
            opponent: Move::Rock,
            outcome: RoundOutcome::PlayerWin,
        }
    }

    #[test]
    fn test_plain_output_is_bare_text() {
        let mut view = ConsoleView::new(Vec::new(), false);
        view.show_round(&record());

        let text = String::from_utf8(view.into_inner()).unwrap();
        assert_eq!(
            text,
            "Round 1:\nYou chose paper\nComputer chose rock\nYou win!\n\n"
        );
    }

    #[test]
    fn test_colored_output_wraps_text_in_escapes() {
        let mut view = ConsoleView::new(Vec::new(), true);
        view.show_round(&record());

        let text = String::from_utf8(view.into_inner()).unwrap();
        assert!(text.contains("You win!"));
        assert!(text.contains('\u{1b}'), "expected ANSI escapes in {text:?}");
    }

    #[test]
    fn test_final_block_follows_rounds() {
        let mut view = ConsoleView::new(Vec::new(), false);
        view.show_round(&record());
        view.show_final(&FinalScore {
            player: 1,
            ..FinalScore::default()
        });

        let text = String::from_utf8(view.into_inner()).unwrap();
        assert!(text.ends_with("Final Score:\nYou: 1 | Computer: 0\nYou won the game!\n\n"));
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failures_do_not_panic() {
        let mut view = ConsoleView::new(BrokenPipe, false);
        view.show_round(&record());
        view.show_final(&FinalScore::default());
    }
}
