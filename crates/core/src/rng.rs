//! RNG module - where the computer's moves come from
//!
//! The round loop never touches a random number generator directly. It asks a
//! [`MoveSource`], which makes the opponent injectable:
//!
//! - [`RandomMoves`]: uniform draw from the three moves, no memory of prior rounds
//! - [`ScriptedMoves`]: replays a fixed sequence, for tests and reproducible demos

use std::collections::VecDeque;

use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

use crate::error::GameError;
use crate::types::{Move, MOVES};

/// Supplies the opponent's move for each round.
pub trait MoveSource {
    fn next_move(&mut self) -> Result<Move, GameError>;
}

impl<S: MoveSource + ?Sized> MoveSource for Box<S> {
    fn next_move(&mut self) -> Result<Move, GameError> {
        (**self).next_move()
    }
}

/// Uniformly random opponent.
#[derive(Debug, Clone)]
pub struct RandomMoves<R = SmallRng> {
    rng: R,
}

impl RandomMoves<SmallRng> {
    /// Deterministic opponent: the same seed replays the same moves.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Opponent seeded from operating system entropy.
    pub fn from_os_rng() -> Result<Self, GameError> {
        let rng = SmallRng::try_from_os_rng().map_err(|e| GameError::RandomSourceFailure {
            reason: e.to_string(),
        })?;
        Ok(Self { rng })
    }
}

impl<R: Rng> MoveSource for RandomMoves<R> {
    fn next_move(&mut self) -> Result<Move, GameError> {
        MOVES
            .choose(&mut self.rng)
            .copied()
            .ok_or_else(|| GameError::RandomSourceFailure {
                reason: "no moves to choose from".to_string(),
            })
    }
}

/// Opponent that plays a fixed list of moves, then fails.
#[derive(Debug, Clone, Default)]
pub struct ScriptedMoves {
    queue: VecDeque<Move>,
}

impl ScriptedMoves {
    pub fn new(moves: impl IntoIterator<Item = Move>) -> Self {
        Self {
            queue: moves.into_iter().collect(),
        }
    }

    /// Build a script from move names, e.g. `["rock", "paper"]`.
    pub fn from_names<'a>(names: impl IntoIterator<Item = &'a str>) -> Result<Self, GameError> {
        let queue = names
            .into_iter()
            .map(|name| name.parse::<Move>().map_err(GameError::from))
            .collect::<Result<VecDeque<_>, _>>()?;
        Ok(Self { queue })
    }
}

impl MoveSource for ScriptedMoves {
    fn next_move(&mut self) -> Result<Move, GameError> {
        self.queue
            .pop_front()
            .ok_or_else(|| GameError::RandomSourceFailure {
                reason: "scripted moves exhausted".to_string(),
            })
    }
}
