//! The interactive text interface a quiz talks through.
//!
//! The quiz only ever needs to show a line of text, read a line, or read a
//! number. Terminal handling lives in the binary; [`ScriptedConsole`]
//! replays canned input for tests.

use std::collections::VecDeque;

use crate::error::QuizResult;

/// How a line of output should be emphasised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Ordinary text.
    Plain,
    /// Banners and report headings.
    Heading,
    /// A correct answer or a winner.
    Good,
    /// A wrong answer.
    Bad,
    /// A coerced choice or an expired timer.
    Warning,
}

/// Line-oriented console used by sessions and games.
pub trait Console {
    /// Display a line of text.
    fn say(&mut self, text: &str) -> QuizResult<()>;

    /// Show `prompt` and read one line. End of input reads as an empty line.
    fn ask_line(&mut self, prompt: &str) -> QuizResult<String>;

    /// Display a line with emphasis. Plain consoles ignore the tone.
    fn announce(&mut self, _tone: Tone, text: &str) -> QuizResult<()> {
        self.say(text)
    }

    /// Show `prompt` and read an integer. Malformed input yields `None`.
    fn ask_number(&mut self, prompt: &str) -> QuizResult<Option<i64>> {
        Ok(self.ask_line(prompt)?.trim().parse().ok())
    }
}

/// A console that replays queued input and records everything shown.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    transcript: String,
}

impl ScriptedConsole {
    /// Create a console that answers prompts with `inputs` in order.
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            transcript: String::new(),
        }
    }

    /// Everything shown so far, prompts and echoed input included.
    pub fn transcript(&self) -> &str {
        &self.transcript
    }

    /// Input lines not yet consumed.
    pub fn remaining(&self) -> usize {
        self.inputs.len()
    }
}

impl Console for ScriptedConsole {
    fn say(&mut self, text: &str) -> QuizResult<()> {
        self.transcript.push_str(text);
        self.transcript.push('\n');
        Ok(())
    }

    fn ask_line(&mut self, prompt: &str) -> QuizResult<String> {
        let line = self.inputs.pop_front().unwrap_or_default();
        self.transcript.push_str(prompt);
        self.transcript.push_str(&line);
        self.transcript.push('\n');
        Ok(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replays_inputs_in_order() {
        let mut c = ScriptedConsole::new(["Ada", "3"]);
        assert_eq!(c.ask_line("Name: ").unwrap(), "Ada");
        assert_eq!(c.ask_number("Pick: ").unwrap(), Some(3));
        assert_eq!(c.remaining(), 0);
        assert_eq!(c.transcript(), "Name: Ada\nPick: 3\n");
    }

    #[test]
    fn exhausted_input_reads_empty() {
        let mut c = ScriptedConsole::new(Vec::<String>::new());
        assert_eq!(c.ask_line("> ").unwrap(), "");
        assert_eq!(c.ask_number("> ").unwrap(), None);
    }

    #[test]
    fn malformed_numbers_are_none() {
        let mut c = ScriptedConsole::new(["four", " 2 ", "", "-1"]);
        assert_eq!(c.ask_number("").unwrap(), None);
        assert_eq!(c.ask_number("").unwrap(), Some(2));
        assert_eq!(c.ask_number("").unwrap(), None);
        assert_eq!(c.ask_number("").unwrap(), Some(-1));
    }

    #[test]
    fn announce_defaults_to_say() {
        let mut c = ScriptedConsole::default();
        c.announce(Tone::Good, "Correct!").unwrap();
        assert_eq!(c.transcript(), "Correct!\n");
    }
}
