//! Multiple-choice question records.

use serde::Serialize;

/// Number of options every question offers.
pub const OPTION_COUNT: usize = 4;

/// A single multiple-choice question.
///
/// Questions are defined once as static data and never mutated. The
/// correct option is stored 1-based, matching what a player types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    prompt: &'static str,
    options: [&'static str; OPTION_COUNT],
    correct: u8,
}

impl Question {
    /// Build a question. Panics (at compile time for statics) if `correct`
    /// is outside 1-4.
    pub const fn new(
        prompt: &'static str,
        options: [&'static str; OPTION_COUNT],
        correct: u8,
    ) -> Self {
        assert!(
            correct >= 1 && correct as usize <= OPTION_COUNT,
            "correct option must be in 1-4"
        );
        Self {
            prompt,
            options,
            correct,
        }
    }

    /// The question text.
    pub fn prompt(&self) -> &'static str {
        self.prompt
    }

    /// The four options, in display order.
    pub fn options(&self) -> &[&'static str; OPTION_COUNT] {
        &self.options
    }

    /// The 1-based number of the correct option.
    pub fn correct(&self) -> u8 {
        self.correct
    }

    /// Text of the correct option.
    pub fn correct_text(&self) -> &'static str {
        self.options[usize::from(self.correct) - 1]
    }

    /// Whether `answer` picks the correct option. Any value outside 1-4 is
    /// simply wrong.
    pub fn is_correct(&self, answer: i64) -> bool {
        answer == i64::from(self.correct)
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.prompt)?;
        for (i, option) in self.options.iter().enumerate() {
            write!(f, "\n{}) {option}", i + 1)?;
        }
        Ok(())
    }
}
