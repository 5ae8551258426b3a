//! What happens when the player types something that is not a move.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InvalidInputPolicy {
    /// Report the rejection and ask again; the round is not consumed.
    #[default]
    Reprompt,
    /// Report the rejection and consume the round without scoring it.
    Forfeit,
}

impl InvalidInputPolicy {
    /// Parse policy from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use rps_engine::InvalidInputPolicy;
    ///
    /// assert_eq!(InvalidInputPolicy::from_str("reprompt"), Some(InvalidInputPolicy::Reprompt));
    /// assert_eq!(InvalidInputPolicy::from_str("Forfeit"), Some(InvalidInputPolicy::Forfeit));
    /// assert_eq!(InvalidInputPolicy::from_str("ignore"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "reprompt" => Some(InvalidInputPolicy::Reprompt),
            "forfeit" => Some(InvalidInputPolicy::Forfeit),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            InvalidInputPolicy::Reprompt => "reprompt",
            InvalidInputPolicy::Forfeit => "forfeit",
        }
    }
}

impl fmt::Display for InvalidInputPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
