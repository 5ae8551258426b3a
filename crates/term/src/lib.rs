//! Terminal output module.
//!
//! Split in two layers:
//! - [`view`] turns round and final records into styled text lines (pure, no I/O)
//! - [`renderer`] flushes those lines to a writer, with or without ANSI colors
//!
//! Goals:
//! - Keep the wording testable without a terminal
//! - Keep colors optional (pipes, `NO_COLOR`)

pub mod renderer;
pub mod view;

pub use rps_engine as engine;
pub use rps_types as types;

pub use renderer::{encode_lines_into, ConsoleView};
pub use view::{final_lines, quit_lines, rejection_lines, round_lines, Tone, ViewLine};
