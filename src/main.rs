//! Console rock-paper-scissors runner (default binary).
//!
//! Plays one five-round game: prompts on the terminal (or reads lines from a pipe),
//! prints every round and the final score to stdout.

use std::io::{self, IsTerminal};

use anyhow::{Context, Result};
use clap::Parser;

use rps_console::core::{GameError, RandomMoves};
use rps_console::engine::{GameEngine, Prompt};
use rps_console::input::{InteractivePrompt, LinePrompt};
use rps_console::term::ConsoleView;
use rps_console::{logging, Args, Config};

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let config = Config::from_env().with_args(&args);
    log::debug!("config: {config:?}");
    run(&config)
}

fn run(config: &Config) -> Result<()> {
    let source = match config.seed {
        Some(seed) => RandomMoves::seeded(seed),
        None => RandomMoves::from_os_rng().context("failed to seed the computer's moves")?,
    };

    let prompt: Box<dyn Prompt> = if config.plain_input || !io::stdin().is_terminal() {
        Box::new(LinePrompt::new(io::stdin().lock(), io::stdout()))
    } else {
        Box::new(InteractivePrompt)
    };

    let color = config.color && io::stdout().is_terminal();
    let presenter = ConsoleView::stdout(color);

    let mut engine = GameEngine::new(prompt, presenter, source).with_policy(config.on_invalid);
    match engine.run() {
        Ok(_) => Ok(()),
        // Quitting is a normal way to leave; the partial score is already shown.
        Err(GameError::Quit { .. }) => Ok(()),
        Err(e) => Err(e).context("game aborted"),
    }
}
