//! Failure taxonomy shared by the round loop and its collaborators.

use std::fmt;

use crate::types::ParseMoveError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Player text that does not name a move.
    InvalidMoveInput { raw: String },
    /// The opponent could not produce a move. Fatal.
    RandomSourceFailure { reason: String },
    /// The player asked to stop before the last round.
    Quit { rounds_played: u32 },
    /// The input channel broke.
    Io(String),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidMoveInput { raw } => {
                write!(f, "invalid move {raw:?}: expected rock, paper, or scissors")
            }
            GameError::RandomSourceFailure { reason } => {
                write!(f, "opponent could not pick a move: {reason}")
            }
            GameError::Quit { rounds_played } => {
                write!(f, "game abandoned after {rounds_played} round(s)")
            }
            GameError::Io(msg) => write!(f, "input failed: {msg}"),
        }
    }
}

impl std::error::Error for GameError {}

impl From<ParseMoveError> for GameError {
    fn from(err: ParseMoveError) -> Self {
        GameError::InvalidMoveInput { raw: err.raw }
    }
}

impl From<std::io::Error> for GameError {
    fn from(err: std::io::Error) -> Self {
        GameError::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Move;

    #[test]
    fn test_parse_error_converts() {
        let err: GameError = "spock".parse::<Move>().unwrap_err().into();
        assert_eq!(
            err,
            GameError::InvalidMoveInput {
                raw: "spock".to_string()
            }
        );
    }

    #[test]
    fn test_error_messages() {
        let err = GameError::RandomSourceFailure {
            reason: "empty".to_string(),
        };
        assert_eq!(err.to_string(), "opponent could not pick a move: empty");
        assert_eq!(
            GameError::Quit { rounds_played: 2 }.to_string(),
            "game abandoned after 2 round(s)"
        );
    }
}
