//! Rock-paper-scissors console game (workspace facade crate).
//!
//! Re-exports the workspace crates as `rps_console::{core,engine,input,term,types}`
//! and adds the binary-side concerns: configuration and logging.

pub mod config;
pub mod logging;

pub use rps_core as core;
pub use rps_engine as engine;
pub use rps_input as input;
pub use rps_term as term;
pub use rps_types as types;

pub use config::{Args, Config};
