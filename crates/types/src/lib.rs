//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are pure data with no external dependencies, so they can be used
//! by the rules, the round loop, and any presentation layer alike.
//!
//! # Match Shape
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TOTAL_ROUNDS` | 5 | Scored rounds per game, no early stop |
//! | `MAX_INVALID_ATTEMPTS` | 10 | Consecutive rejected inputs before a round gives up |
//!
//! # Examples
//!
//! ```
//! use rps_types::{Move, RoundOutcome, TOTAL_ROUNDS};
//!
//! // Parse from string (case-insensitive)
//! let parsed = Move::parse("ROCK").unwrap();
//! assert_eq!(parsed, Move::Rock);
//!
//! // Anything else is rejected
//! assert_eq!(Move::parse("lizard"), None);
//!
//! // Cyclic dominance
//! assert!(Move::Rock.beats(Move::Scissors));
//! assert_eq!(RoundOutcome::PlayerWin.reversed(), RoundOutcome::ComputerWin);
//!
//! assert_eq!(TOTAL_ROUNDS, 5);
//! ```

use std::fmt;
use std::str::FromStr;

/// Number of scored rounds in one game.
pub const TOTAL_ROUNDS: u32 = 5;

/// Consecutive invalid inputs tolerated for a single round before the game aborts.
pub const MAX_INVALID_ATTEMPTS: u32 = 10;

/// The three throws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Rock,
    Paper,
    Scissors,
}

/// Every move, in canonical order.
pub const MOVES: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

impl Move {
    /// Parse a move from its name (case-insensitive, exact spelling)
    ///
    /// # Examples
    ///
    /// ```
    /// use rps_types::Move;
    ///
    /// assert_eq!(Move::parse("rock"), Some(Move::Rock));
    /// assert_eq!(Move::parse("Paper"), Some(Move::Paper));
    /// assert_eq!(Move::parse("SCISSORS"), Some(Move::Scissors));
    /// assert_eq!(Move::parse("scissor"), None);
    /// assert_eq!(Move::parse(" rock"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "rock" => Some(Move::Rock),
            "paper" => Some(Move::Paper),
            "scissors" => Some(Move::Scissors),
            _ => None,
        }
    }

    /// Lowercase name, as typed by the player.
    pub fn as_str(&self) -> &'static str {
        match self {
            Move::Rock => "rock",
            Move::Paper => "paper",
            Move::Scissors => "scissors",
        }
    }

    /// The move this one defeats.
    pub fn victim(&self) -> Move {
        match self {
            Move::Rock => Move::Scissors,
            Move::Scissors => Move::Paper,
            Move::Paper => Move::Rock,
        }
    }

    /// True when `self` wins against `other`.
    pub fn beats(&self, other: Move) -> bool {
        self.victim() == other
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw text that does not name a move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseMoveError {
    pub raw: String,
}

impl fmt::Display for ParseMoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} is not a move (expected rock, paper, or scissors)",
            self.raw
        )
    }
}

impl std::error::Error for ParseMoveError {}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Move::parse(s).ok_or_else(|| ParseMoveError { raw: s.to_string() })
    }
}

/// Result of one round, always from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundOutcome {
    PlayerWin,
    ComputerWin,
    Tie,
}

impl RoundOutcome {
    /// The same round seen from the other side of the table.
    pub fn reversed(&self) -> Self {
        match self {
            RoundOutcome::PlayerWin => RoundOutcome::ComputerWin,
            RoundOutcome::ComputerWin => RoundOutcome::PlayerWin,
            RoundOutcome::Tie => RoundOutcome::Tie,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RoundOutcome::PlayerWin => "win",
            RoundOutcome::ComputerWin => "lose",
            RoundOutcome::Tie => "tie",
        }
    }
}

/// One judged round, as handed to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundRecord {
    /// 1-based round number.
    pub round: u32,
    pub player: Move,
    pub opponent: Move,
    pub outcome: RoundOutcome,
}

/// Overall result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Player,
    Computer,
    Draw,
}

/// Tally emitted once the loop is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FinalScore {
    pub player: u32,
    pub computer: u32,
    pub ties: u32,
    /// Rounds consumed by rejected input and left unscored.
    pub voided: u32,
}

impl FinalScore {
    pub fn verdict(&self) -> Verdict {
        match self.player.cmp(&self.computer) {
            std::cmp::Ordering::Greater => Verdict::Player,
            std::cmp::Ordering::Less => Verdict::Computer,
            std::cmp::Ordering::Equal => Verdict::Draw,
        }
    }

    /// Rounds accounted for by this tally.
    pub fn rounds(&self) -> u32 {
        self.player + self.computer + self.ties + self.voided
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_match_shape() {
        assert_eq!(TOTAL_ROUNDS, 5);
        assert_eq!(MOVES.len(), 3);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        for raw in ["rock", "ROCK", "Rock", "rOcK"] {
            assert_eq!(Move::parse(raw), Some(Move::Rock), "raw={raw}");
        }
        assert_eq!(Move::parse("PAPER"), Some(Move::Paper));
        assert_eq!(Move::parse("Scissors"), Some(Move::Scissors));
    }

    #[test]
    fn test_parse_rejects_near_misses() {
        for raw in ["", "r", "rocks", "scissor", "paper ", "stone"] {
            assert_eq!(Move::parse(raw), None, "raw={raw:?}");
        }
    }

    #[test]
    fn test_from_str_carries_raw_text() {
        let err = "lizard".parse::<Move>().unwrap_err();
        assert_eq!(err.raw, "lizard");
        assert!(err.to_string().contains("lizard"));
    }

    #[test]
    fn test_as_str_parses_back() {
        for m in MOVES {
            assert_eq!(Move::parse(m.as_str()), Some(m));
        }
    }

    #[test]
    fn test_each_move_beats_exactly_one() {
        for m in MOVES {
            let wins = MOVES.iter().filter(|&&o| m.beats(o)).count();
            assert_eq!(wins, 1, "{m} should beat exactly one move");
            assert!(!m.beats(m));
        }
    }

    #[test]
    fn test_verdict() {
        let score = FinalScore {
            player: 2,
            computer: 2,
            ties: 1,
            voided: 0,
        };
        assert_eq!(score.verdict(), Verdict::Draw);
        assert_eq!(score.rounds(), 5);

        let score = FinalScore {
            player: 3,
            computer: 1,
            ties: 1,
            voided: 0,
        };
        assert_eq!(score.verdict(), Verdict::Player);
    }
}
