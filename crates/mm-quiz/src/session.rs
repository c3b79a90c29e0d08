//! One player's timed run through a sequence of questions.
//!
//! The time budget is checked after every answer, never while waiting for
//! one, so a slow final answer can overrun the budget by one question.

use std::time::Duration;

use log::{debug, info};
use mm_core::{Question, Standing};

use crate::clock::Clock;
use crate::console::{Console, Tone};
use crate::error::QuizResult;

/// Result of a finished session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOutcome {
    /// The player's display name.
    pub player: String,
    /// Correct answers.
    pub score: u32,
    /// Questions actually presented.
    pub asked: usize,
    /// Whole seconds from start to the last answer.
    pub elapsed_secs: u64,
    /// Whether the session stopped early on the time budget.
    pub timed_out: bool,
}

impl SessionOutcome {
    /// This outcome as a standing for winner resolution.
    pub fn standing(&self) -> Standing {
        Standing::new(self.player.clone(), self.score, self.elapsed_secs)
    }
}

/// A session owns its presentation order until it is run.
#[derive(Debug, Clone)]
pub struct Session {
    player: String,
    questions: Vec<&'static Question>,
    time_limit: Duration,
}

impl Session {
    /// Prepare a session for `player` over `questions` in presentation order.
    pub fn new(
        player: impl Into<String>,
        questions: Vec<&'static Question>,
        time_limit_secs: u64,
    ) -> Self {
        Self {
            player: player.into(),
            questions,
            time_limit: Duration::from_secs(time_limit_secs),
        }
    }

    /// Number of questions the session will present if time allows.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Whether the session has no questions.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Ask every question in order, stopping early once the time budget is
    /// exceeded. Consumes the session.
    pub fn run(self, console: &mut impl Console, clock: &impl Clock) -> QuizResult<SessionOutcome> {
        console.say("\nStarting Solo Quiz...")?;
        console.say(&format!(
            "You have {} to complete the quiz!",
            describe_limit(self.time_limit)
        ))?;
        info!(
            "session started: player={:?} questions={} limit={}s",
            self.player,
            self.questions.len(),
            self.time_limit.as_secs()
        );

        let start = clock.now();
        let mut score = 0u32;
        let mut asked = 0usize;
        let mut elapsed = Duration::ZERO;
        let mut timed_out = false;

        for question in &self.questions {
            console.say(&format!("\n{}, it's your turn!", self.player))?;
            console.say(&format!("\n{question}"))?;
            let answer = console.ask_number("Enter your answer (1-4): ")?;
            asked += 1;

            if answer.is_some_and(|a| question.is_correct(a)) {
                score += 1;
                console.announce(Tone::Good, "Correct!")?;
            } else {
                console.announce(
                    Tone::Bad,
                    &format!("Wrong! The correct answer was: {}", question.correct_text()),
                )?;
            }
            debug!("answer {answer:?} to question {asked}, score now {score}");

            elapsed = clock.now().saturating_sub(start);
            if elapsed > self.time_limit {
                console.announce(Tone::Warning, "\nTime's up! The test has ended.")?;
                info!("time limit exceeded after {asked} questions");
                timed_out = true;
                break;
            }
            console.say(&format!(
                "Time remaining: {}",
                format_mmss(self.time_limit - elapsed)
            ))?;
        }

        let outcome = SessionOutcome {
            player: self.player,
            score,
            asked,
            elapsed_secs: elapsed.as_secs(),
            timed_out,
        };
        info!(
            "session finished: player={:?} score={}/{} elapsed={}s",
            outcome.player, outcome.score, outcome.asked, outcome.elapsed_secs
        );
        Ok(outcome)
    }
}

/// Format a duration as `MM:SS`, truncating to whole seconds.
pub fn format_mmss(d: Duration) -> String {
    let secs = d.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// Describe a time budget for the session intro.
fn describe_limit(limit: Duration) -> String {
    let secs = limit.as_secs();
    match (secs / 60, secs % 60) {
        (1, 0) => "1 minute".to_string(),
        (m, 0) if m > 0 => format!("{m} minutes"),
        (0, s) => format!("{s} seconds"),
        _ => format_mmss(limit),
    }
}
