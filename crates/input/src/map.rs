//! Line mapping from console text to player input.

use crate::engine::PlayerInput;

/// Words that end the game early (case-insensitive).
const QUIT_WORDS: [&str; 3] = ["q", "quit", "exit"];

/// Check if a line asks to stop the game.
pub fn should_quit(line: &str) -> bool {
    let word = line.trim();
    QUIT_WORDS.iter().any(|q| word.eq_ignore_ascii_case(q))
}

/// Map one console line to player input.
///
/// Surrounding whitespace (including the line terminator) is stripped; the rest is
/// handed to the engine untouched so it can accept or reject it.
pub fn map_line(line: &str) -> PlayerInput {
    if should_quit(line) {
        PlayerInput::Quit
    } else {
        PlayerInput::Line(line.trim().to_string())
    }
}
