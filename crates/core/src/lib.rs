//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the round rules, the opponent's move sources, and the
//! score tally. It has **no dependencies** on terminals or prompts, making it:
//!
//! - **Deterministic**: A seeded or scripted opponent produces identical games
//! - **Testable**: Every rule is a total function over a three-valued enum
//! - **Portable**: Any presentation layer can drive it
//!
//! # Module Structure
//!
//! - [`rules`]: the cyclic-dominance judge
//! - [`rng`]: opponent move sources (uniform random, scripted)
//! - [`game_state`]: running tally of one fixed-length match
//! - [`error`]: the game's failure taxonomy
//!
//! # Example
//!
//! ```
//! use rps_core::{judge, GameState, MoveSource, ScriptedMoves};
//! use rps_types::{Move, RoundOutcome};
//!
//! let mut opponent = ScriptedMoves::new([Move::Scissors]);
//! let mut state = GameState::new();
//!
//! let theirs = opponent.next_move().unwrap();
//! let record = state.record_round(Move::Rock, theirs);
//!
//! assert_eq!(record.outcome, RoundOutcome::PlayerWin);
//! assert_eq!(judge(Move::Rock, Move::Paper), RoundOutcome::ComputerWin);
//! assert_eq!(state.player_score(), 1);
//! ```

pub mod error;
pub mod game_state;
pub mod rng;
pub mod rules;

pub use rps_types as types;

// Re-export commonly used types for convenience
pub use error::GameError;
pub use game_state::GameState;
pub use rng::{MoveSource, RandomMoves, ScriptedMoves};
pub use rules::judge;
