//! Console input module (engine-facing).
//!
//! Maps raw console lines into [`rps_engine::PlayerInput`] and provides two
//! [`rps_engine::Prompt`] implementations: a line reader over any `BufRead`
//! (pipes, files, tests) and an interactive terminal prompt.

pub mod map;
pub mod prompt;

pub use rps_engine as engine;
pub use rps_types as types;

pub use map::{map_line, should_quit};
pub use prompt::{InteractivePrompt, LinePrompt};
