//! Presentation seams.
//!
//! The engine never prints and never reads stdin itself. Console adapters live in
//! `rps-input` and `rps-term`; the in-memory stubs below drive tests and demos.

use std::collections::VecDeque;

use crate::core::GameError;
use crate::types::{FinalScore, RoundRecord};

/// What the player handed back for a round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerInput {
    /// Raw text, not yet parsed.
    Line(String),
    /// Stop the game now.
    Quit,
}

/// Blocking source of player input.
pub trait Prompt {
    fn read_move(&mut self, round: u32, prompt: &str) -> Result<PlayerInput, GameError>;
}

/// Input that did not name a move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub round: u32,
    pub raw: String,
    /// True when the round was consumed without a score.
    pub voided: bool,
}

/// Fire-and-forget sink for results. Implementations log their own write failures.
pub trait Presenter {
    fn show_round(&mut self, record: &RoundRecord);

    fn show_rejection(&mut self, rejection: &Rejection);

    fn show_final(&mut self, score: &FinalScore);

    /// Called when the player quits mid-game, with the tally so far.
    fn show_quit(&mut self, _score: &FinalScore, _rounds_played: u32) {}
}

impl<T: Prompt + ?Sized> Prompt for Box<T> {
    fn read_move(&mut self, round: u32, prompt: &str) -> Result<PlayerInput, GameError> {
        (**self).read_move(round, prompt)
    }
}

impl<T: Presenter + ?Sized> Presenter for Box<T> {
    fn show_round(&mut self, record: &RoundRecord) {
        (**self).show_round(record)
    }

    fn show_rejection(&mut self, rejection: &Rejection) {
        (**self).show_rejection(rejection)
    }

    fn show_final(&mut self, score: &FinalScore) {
        (**self).show_final(score)
    }

    fn show_quit(&mut self, score: &FinalScore, rounds_played: u32) {
        (**self).show_quit(score, rounds_played)
    }
}

/// Prompt that answers from a fixed list, then reports end of input as a quit.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPrompt {
    answers: VecDeque<String>,
    asked: Vec<(u32, String)>,
}

impl ScriptedPrompt {
    pub fn new<S: Into<String>>(answers: impl IntoIterator<Item = S>) -> Self {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            asked: Vec::new(),
        }
    }

    /// Every `(round, prompt)` pair the engine asked, in order.
    pub fn asked(&self) -> &[(u32, String)] {
        &self.asked
    }
}

impl Prompt for ScriptedPrompt {
    fn read_move(&mut self, round: u32, prompt: &str) -> Result<PlayerInput, GameError> {
        self.asked.push((round, prompt.to_string()));
        Ok(self
            .answers
            .pop_front()
            .map_or(PlayerInput::Quit, PlayerInput::Line))
    }
}

/// Presenter that keeps everything it was shown.
#[derive(Debug, Clone, Default)]
pub struct RecordingPresenter {
    pub rounds: Vec<RoundRecord>,
    pub rejections: Vec<Rejection>,
    pub final_score: Option<FinalScore>,
    pub quit: Option<(FinalScore, u32)>,
}

impl Presenter for RecordingPresenter {
    fn show_round(&mut self, record: &RoundRecord) {
        self.rounds.push(*record);
    }

    fn show_rejection(&mut self, rejection: &Rejection) {
        self.rejections.push(rejection.clone());
    }

    fn show_final(&mut self, score: &FinalScore) {
        self.final_score = Some(*score);
    }

    fn show_quit(&mut self, score: &FinalScore, rounds_played: u32) {
        self.quit = Some((*score, rounds_played));
    }
}
