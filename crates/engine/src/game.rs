//! The game loop.
//!
//! Runs exactly [`TOTAL_ROUNDS`] rounds with no early exit: read the player's
//! move, draw the opponent's, judge, tally, report. The final tally is reported
//! once after the last round.

use log::{debug, info};

use crate::core::{GameError, GameState, MoveSource};
use crate::io::{PlayerInput, Presenter, Prompt, Rejection};
use crate::policy::InvalidInputPolicy;
use crate::types::{FinalScore, Move, MAX_INVALID_ATTEMPTS, TOTAL_ROUNDS};

/// Prompt text shown at the start of a round.
pub fn prompt_text(round: u32) -> String {
    format!("Round {round}: Rock, Paper, or Scissors?")
}

pub struct GameEngine<P, D, S> {
    prompt: P,
    presenter: D,
    source: S,
    policy: InvalidInputPolicy,
    state: GameState,
}

impl<P, D, S> GameEngine<P, D, S>
where
    P: Prompt,
    D: Presenter,
    S: MoveSource,
{
    pub fn new(prompt: P, presenter: D, source: S) -> Self {
        Self {
            prompt,
            presenter,
            source,
            policy: InvalidInputPolicy::default(),
            state: GameState::new(),
        }
    }

    pub fn with_policy(mut self, policy: InvalidInputPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn presenter(&self) -> &D {
        &self.presenter
    }

    pub fn prompt(&self) -> &P {
        &self.prompt
    }

    /// Take the collaborators back, e.g. to inspect what a presenter wrote.
    pub fn into_parts(self) -> (P, D, S) {
        (self.prompt, self.presenter, self.source)
    }

    /// Play the whole match and return the final tally.
    ///
    /// Errors abort the game: a failing move source, a broken input channel, the
    /// player quitting, or too many consecutive invalid inputs for one round.
    pub fn run(&mut self) -> Result<FinalScore, GameError> {
        info!(
            "starting a {TOTAL_ROUNDS}-round game (invalid input: {})",
            self.policy
        );

        while !self.state.is_over() {
            self.play_round()?;
        }

        let score = self.state.final_score();
        info!(
            "game over: player {} computer {} ties {} voided {}",
            score.player, score.computer, score.ties, score.voided
        );
        self.presenter.show_final(&score);
        Ok(score)
    }

    fn play_round(&mut self) -> Result<(), GameError> {
        let round = self.state.current_round();
        let Some(player) = self.read_player_move(round)? else {
            // Voided under the forfeit policy.
            return Ok(());
        };

        let opponent = self.source.next_move()?;
        let record = self.state.record_round(player, opponent);
        debug!(
            "round {}: {} vs {} -> {}",
            record.round,
            record.player,
            record.opponent,
            record.outcome.as_str()
        );
        self.presenter.show_round(&record);
        Ok(())
    }

    /// `None` means the round was voided.
    fn read_player_move(&mut self, round: u32) -> Result<Option<Move>, GameError> {
        let text = prompt_text(round);
        let mut attempts = 0u32;

        loop {
            let raw = match self.prompt.read_move(round, &text)? {
                PlayerInput::Line(raw) => raw,
                PlayerInput::Quit => return Err(self.quit()),
            };

            let err = match raw.parse::<Move>() {
                Ok(player) => return Ok(Some(player)),
                Err(err) => err,
            };
            debug!("round {round}: rejected input {:?}", err.raw);

            match self.policy {
                InvalidInputPolicy::Forfeit => {
                    self.state.void_round();
                    self.presenter.show_rejection(&Rejection {
                        round,
                        raw,
                        voided: true,
                    });
                    return Ok(None);
                }
                InvalidInputPolicy::Reprompt => {
                    attempts += 1;
                    if attempts >= MAX_INVALID_ATTEMPTS {
                        return Err(err.into());
                    }
                    self.presenter.show_rejection(&Rejection {
                        round,
                        raw,
                        voided: false,
                    });
                }
            }
        }
    }

    fn quit(&mut self) -> GameError {
        let rounds_played = self.state.rounds_played();
        info!("player quit after {rounds_played} round(s)");
        self.presenter
            .show_quit(&self.state.final_score(), rounds_played);
        GameError::Quit { rounds_played }
    }
}
