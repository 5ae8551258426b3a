//! Round rules - who wins a single throw.

use crate::types::{Move, RoundOutcome};

/// Judge one round from the player's point of view.
///
/// Rock beats scissors, scissors beats paper, paper beats rock; equal moves tie.
pub fn judge(player: Move, opponent: Move) -> RoundOutcome {
    if player == opponent {
        RoundOutcome::Tie
    } else if player.beats(opponent) {
        RoundOutcome::PlayerWin
    } else {
        RoundOutcome::ComputerWin
    }
}
