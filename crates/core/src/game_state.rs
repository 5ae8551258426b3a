//! Game state module - the running tally of one match
//!
//! A `GameState` lives for exactly one game. It is created with every counter at
//! zero and advanced once per round, either by a judged round or by a voided one.
//!
//! Invariant: `player_score + computer_score <= rounds_played <= TOTAL_ROUNDS`.

use crate::rules::judge;
use crate::types::{FinalScore, Move, RoundOutcome, RoundRecord, TOTAL_ROUNDS};

#[derive(Debug, Clone, Default)]
pub struct GameState {
    player_score: u32,
    computer_score: u32,
    ties: u32,
    /// Rounds consumed without a score (rejected input under the forfeit policy).
    voided: u32,
    rounds_played: u32,
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 1-based number of the round about to be played.
    pub fn current_round(&self) -> u32 {
        self.rounds_played + 1
    }

    pub fn is_over(&self) -> bool {
        self.rounds_played >= TOTAL_ROUNDS
    }

    /// Judge a round and fold it into the tally.
    pub fn record_round(&mut self, player: Move, opponent: Move) -> RoundRecord {
        debug_assert!(!self.is_over(), "round recorded after the final round");

        let outcome = judge(player, opponent);
        match outcome {
            RoundOutcome::PlayerWin => self.player_score += 1,
            RoundOutcome::ComputerWin => self.computer_score += 1,
            RoundOutcome::Tie => self.ties += 1,
        }

        let record = RoundRecord {
            round: self.current_round(),
            player,
            opponent,
            outcome,
        };
        self.rounds_played += 1;
        record
    }

    /// Consume the current round without scoring it. Returns the voided round number.
    pub fn void_round(&mut self) -> u32 {
        debug_assert!(!self.is_over(), "round voided after the final round");

        let round = self.current_round();
        self.voided += 1;
        self.rounds_played += 1;
        round
    }

    pub fn player_score(&self) -> u32 {
        self.player_score
    }

    pub fn computer_score(&self) -> u32 {
        self.computer_score
    }

    pub fn ties(&self) -> u32 {
        self.ties
    }

    pub fn voided(&self) -> u32 {
        self.voided
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    pub fn final_score(&self) -> FinalScore {
        FinalScore {
            player: self.player_score,
            computer: self.computer_score,
            ties: self.ties,
            voided: self.voided,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Verdict;

    #[test]
    fn test_new_state_is_empty() {
        let state = GameState::new();
        assert_eq!(state.player_score(), 0);
        assert_eq!(state.computer_score(), 0);
        assert_eq!(state.rounds_played(), 0);
        assert_eq!(state.current_round(), 1);
        assert_eq!(state.voided(), 0);
        assert!(!state.is_over());
    }

    #[test]
    fn test_record_round_updates_winner_only() {
        let mut state = GameState::new();

        let r1 = state.record_round(Move::Rock, Move::Scissors);
        assert_eq!(r1.round, 1);
        assert_eq!(r1.outcome, RoundOutcome::PlayerWin);

        let r2 = state.record_round(Move::Rock, Move::Rock);
        assert_eq!(r2.round, 2);
        assert_eq!(r2.outcome, RoundOutcome::Tie);

        let r3 = state.record_round(Move::Rock, Move::Paper);
        assert_eq!(r3.outcome, RoundOutcome::ComputerWin);

        assert_eq!(state.player_score(), 1);
        assert_eq!(state.computer_score(), 1);
        assert_eq!(state.ties(), 1);
        assert_eq!(state.rounds_played(), 3);
    }

    #[test]
    fn test_scores_never_exceed_rounds_played() {
        let mut state = GameState::new();
        let pairs = [
            (Move::Paper, Move::Paper),
            (Move::Scissors, Move::Paper),
            (Move::Paper, Move::Scissors),
            (Move::Rock, Move::Rock),
            (Move::Scissors, Move::Rock),
        ];

        for (p, o) in pairs {
            state.record_round(p, o);
            assert!(state.player_score() + state.computer_score() <= state.rounds_played());
            assert!(state.rounds_played() <= TOTAL_ROUNDS);
        }

        assert!(state.is_over());
        let score = state.final_score();
        assert_eq!(score.player + score.computer + score.ties, TOTAL_ROUNDS);
        assert_eq!(score.verdict(), Verdict::Computer);
    }

    #[test]
    fn test_void_round_consumes_without_scoring() {
        let mut state = GameState::new();
        state.record_round(Move::Paper, Move::Rock);

        let voided = state.void_round();
        assert_eq!(voided, 2);
        assert_eq!(state.rounds_played(), 2);
        assert_eq!(state.voided(), 1);
        assert_eq!(state.player_score(), 1);
        assert_eq!(state.ties(), 0);
        assert_eq!(state.current_round(), 3);
    }
}
