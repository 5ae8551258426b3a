//! Logger setup for the binary.
//!
//! Logs go to stderr so they never mix with the game on stdout.

use env_logger::{Builder, Env};

/// Default filter for a `-v` count, used when `RUST_LOG` is unset.
pub fn default_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Install the global logger. Safe to call more than once.
pub fn init(verbosity: u8) {
    let env = Env::default().default_filter_or(default_filter(verbosity));
    let _ = Builder::from_env(env).format_timestamp(None).try_init();
}
