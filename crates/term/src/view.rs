//! View: maps game records into styled text lines.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::engine::Rejection;
use crate::types::{FinalScore, RoundOutcome, RoundRecord, Verdict, TOTAL_ROUNDS};

/// How a line should be emphasised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Heading,
    Good,
    Bad,
    Neutral,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewLine {
    pub text: String,
    pub tone: Tone,
}

impl ViewLine {
    fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }
}

fn outcome_line(outcome: RoundOutcome) -> ViewLine {
    match outcome {
        RoundOutcome::PlayerWin => ViewLine::new("You win!", Tone::Good),
        RoundOutcome::ComputerWin => ViewLine::new("Computer wins!", Tone::Bad),
        RoundOutcome::Tie => ViewLine::new("It's a tie!", Tone::Neutral),
    }
}

pub fn round_lines(record: &RoundRecord) -> Vec<ViewLine> {
    vec![
        ViewLine::new(format!("Round {}:", record.round), Tone::Heading),
        ViewLine::new(format!("You chose {}", record.player), Tone::Plain),
        ViewLine::new(format!("Computer chose {}", record.opponent), Tone::Plain),
        outcome_line(record.outcome),
    ]
}

pub fn rejection_lines(rejection: &Rejection) -> Vec<ViewLine> {
    let shown = if rejection.raw.is_empty() {
        "nothing".to_string()
    } else {
        format!("{:?}", rejection.raw)
    };
    let follow_up = if rejection.voided {
        format!("Round {} is forfeited and not scored.", rejection.round)
    } else {
        "Please type rock, paper, or scissors.".to_string()
    };
    vec![
        ViewLine::new(format!("You typed {shown}, which is not a move."), Tone::Warning),
        ViewLine::new(follow_up, Tone::Warning),
    ]
}

fn score_line(score: &FinalScore) -> ViewLine {
    ViewLine::new(
        format!("You: {} | Computer: {}", score.player, score.computer),
        Tone::Plain,
    )
}

pub fn final_lines(score: &FinalScore) -> Vec<ViewLine> {
    let mut lines = vec![ViewLine::new("Final Score:", Tone::Heading), score_line(score)];
    if score.ties > 0 || score.voided > 0 {
        lines.push(ViewLine::new(
            format!("Ties: {} | Forfeited: {}", score.ties, score.voided),
            Tone::Plain,
        ));
    }
    lines.push(match score.verdict() {
        Verdict::Player => ViewLine::new("You won the game!", Tone::Good),
        Verdict::Computer => ViewLine::new("The computer won the game.", Tone::Bad),
        Verdict::Draw => ViewLine::new("The game is a draw.", Tone::Neutral),
    });
    lines
}

pub fn quit_lines(score: &FinalScore, rounds_played: u32) -> Vec<ViewLine> {
    vec![
        ViewLine::new(
            format!("Game stopped after {rounds_played} of {TOTAL_ROUNDS} rounds."),
            Tone::Warning,
        ),
        score_line(score),
    ]
}
