use std::io::{self, BufRead, Write};

use colored::Colorize;

use mm_quiz::{Console, Game, QuizConfig, QuizResult, SystemClock, Tone};

/// Console over a line reader and a writer, with colored emphasis.
pub struct TerminalConsole<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> TerminalConsole<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

impl<R: BufRead, W: Write> Console for TerminalConsole<R, W> {
    fn say(&mut self, text: &str) -> QuizResult<()> {
        writeln!(self.writer, "{text}")?;
        Ok(())
    }

    fn announce(&mut self, tone: Tone, text: &str) -> QuizResult<()> {
        let styled = match tone {
            Tone::Plain => text.normal(),
            Tone::Heading => text.bold(),
            Tone::Good => text.green(),
            Tone::Bad => text.red(),
            Tone::Warning => text.yellow(),
        };
        writeln!(self.writer, "{styled}")?;
        Ok(())
    }

    fn ask_line(&mut self, prompt: &str) -> QuizResult<String> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;

        let mut line = String::new();
        // EOF leaves the line empty.
        self.reader.read_line(&mut line)?;
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

pub fn run(config: QuizConfig) -> Result<(), String> {
    let stdin = io::stdin();
    let mut console = TerminalConsole::new(stdin.lock(), io::stdout());
    let mut game = Game::new(config);
    log::debug!("playing with seed {}", game.seed());

    game.play(&mut console, &SystemClock::new())
        .map(|_| ())
        .map_err(|e| e.to_string())
}
