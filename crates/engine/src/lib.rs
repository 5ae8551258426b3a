//! Round loop for a fixed-length rock-paper-scissors match.
//!
//! The engine owns one [`rps_core::GameState`] for the duration of a game and
//! talks to the outside world only through three injected seams:
//!
//! - [`Prompt`]: blocking read of the player's raw input for a round
//! - [`Presenter`]: fire-and-forget display of round and final results
//! - [`rps_core::MoveSource`]: the computer's moves
//!
//! ```
//! use rps_core::ScriptedMoves;
//! use rps_engine::{GameEngine, ScriptedPrompt, RecordingPresenter};
//!
//! let prompt = ScriptedPrompt::new(["paper"; 5]);
//! let opponent = ScriptedMoves::from_names(["rock"; 5]).unwrap();
//! let mut engine = GameEngine::new(prompt, RecordingPresenter::default(), opponent);
//!
//! let score = engine.run().unwrap();
//! assert_eq!((score.player, score.computer), (5, 0));
//! ```

pub mod game;
pub mod io;
pub mod policy;

pub use rps_core as core;
pub use rps_types as types;

pub use game::{prompt_text, GameEngine};
pub use io::{PlayerInput, Presenter, Prompt, RecordingPresenter, Rejection, ScriptedPrompt};
pub use policy::InvalidInputPolicy;
