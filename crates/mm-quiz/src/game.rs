//! Match orchestration: menus, roster, one session per player, results.
//!
//! Players go strictly one after another. Each session draws its own
//! presentation order from the shared random source, which is seeded once
//! when the game is created.

use chrono::Utc;
use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;

use mm_core::{Category, Standing, Verdict, load, presentation_order, resolve_winner};

use crate::clock::Clock;
use crate::config::QuizConfig;
use crate::console::{Console, Tone};
use crate::error::{QuizError, QuizResult};
use crate::mode::Mode;
use crate::report::{self, RULE};
use crate::session::Session;

/// Most players a group match accepts.
pub const MAX_PLAYERS: usize = 100;

/// Everything a finished match produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchSummary {
    /// Category played.
    pub category: Category,
    /// Mode played.
    pub mode: Mode,
    /// Questions each session was given.
    pub questions: usize,
    /// One entry per player, in turn order.
    pub standings: Vec<Standing>,
    /// The winner, for head-to-head and group matches.
    pub verdict: Option<Verdict>,
}

/// An interactive quiz match.
pub struct Game {
    config: QuizConfig,
    seed: u64,
    rng: StdRng,
}

impl Game {
    /// Create a game, seeding the random source from the config or the clock.
    pub fn new(config: QuizConfig) -> Self {
        let seed = config
            .seed
            .unwrap_or_else(|| Utc::now().timestamp_micros().unsigned_abs());
        info!("random source seeded with {seed}");
        Self {
            config,
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// The seed in use, for reproducing a match.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// The configuration this game runs with.
    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    /// Run a full match: banner, menus, names, sessions, and results.
    pub fn play(
        &mut self,
        console: &mut impl Console,
        clock: &impl Clock,
    ) -> QuizResult<MatchSummary> {
        greet(console)?;
        let category = match self.config.category {
            Some(c) => c,
            None => choose_category(console)?,
        };
        let mode = match self.config.mode {
            Some(m) => m,
            None => choose_mode(console)?,
        };
        let roster = enroll(console, mode)?;
        self.run_match(category, mode, &roster, console, clock)
    }

    /// Run one session per player in `roster` and report the results.
    pub fn run_match(
        &mut self,
        category: Category,
        mode: Mode,
        roster: &[String],
        console: &mut impl Console,
        clock: &impl Clock,
    ) -> QuizResult<MatchSummary> {
        if roster.is_empty() {
            return Err(QuizError::NoPlayers);
        }
        let pool = load(category);
        if pool.is_empty() {
            return Err(QuizError::EmptyCategory(category));
        }

        let mut questions = self.config.questions;
        if questions > pool.len() {
            warn!(
                "{questions} questions requested but {category} has {}",
                pool.len()
            );
            console.announce(
                Tone::Warning,
                "Warning: Not enough questions available. Using all available questions.",
            )?;
            questions = pool.len();
        }

        info!(
            "match started: category={category} mode={mode} players={}",
            roster.len()
        );
        let multiplayer = mode != Mode::Solo;
        if multiplayer {
            console.announce(Tone::Heading, "\nStarting Multiplayer Quiz!")?;
        }

        let mut standings = Vec::with_capacity(roster.len());
        for name in roster {
            if multiplayer {
                console.announce(Tone::Heading, &format!("\n{name}'s turn!"))?;
            }
            let order = presentation_order(&pool, questions, &mut self.rng);
            let outcome = Session::new(name.as_str(), order, self.config.time_limit_secs)
                .run(console, clock)?;
            console.say(&format!(
                "\n{}",
                report::session_result(&outcome.player, outcome.score, questions, category)
            ))?;
            standings.push(outcome.standing());
        }

        let verdict = if multiplayer {
            let verdict = resolve_winner(&standings);
            console.announce(
                Tone::Heading,
                &format!("\n{}", report::final_scores(&standings, category, questions)),
            )?;
            if let Some(v) = &verdict {
                console.announce(Tone::Good, &report::verdict_line(v, mode))?;
            }
            verdict
        } else {
            None
        };

        Ok(MatchSummary {
            category,
            mode,
            questions,
            standings,
            verdict,
        })
    }
}

fn greet(console: &mut impl Console) -> QuizResult<()> {
    console.announce(
        Tone::Heading,
        &format!("\n{RULE}\n   Welcome to MindMatch !\n{RULE}\n"),
    )
}

fn choose_category(console: &mut impl Console) -> QuizResult<Category> {
    console.say("Select Category:")?;
    for (i, c) in Category::all().iter().enumerate() {
        console.say(&format!("{} - {}", i + 1, c.menu_label()))?;
    }
    let choice = console.ask_number("Enter your choice: ")?;
    Ok(choice.and_then(Category::from_menu).unwrap_or_else(|| {
        warn!("invalid category choice {choice:?}, defaulting to {}", Category::General);
        Category::General
    }))
}

fn choose_mode(console: &mut impl Console) -> QuizResult<Mode> {
    console.say("\nSelect Game Mode:")?;
    for (i, m) in Mode::all().iter().enumerate() {
        console.say(&format!("{} - {}", i + 1, m.menu_label()))?;
    }
    let choice = console.ask_number("Enter your choice: ")?;
    Ok(choice.and_then(Mode::from_menu).unwrap_or_else(|| {
        warn!("invalid mode choice {choice:?}, defaulting to {}", Mode::Solo);
        Mode::Solo
    }))
}

/// Collect player names for `mode`.
fn enroll(console: &mut impl Console, mode: Mode) -> QuizResult<Vec<String>> {
    match mode {
        Mode::Solo => Ok(vec![ask_name(console, "\nEnter your name: ", 1)?]),
        Mode::HeadToHead => Ok(vec![
            ask_name(console, "\nEnter Player 1's name: ", 1)?,
            ask_name(console, "Enter Player 2's name: ", 2)?,
        ]),
        Mode::Group => {
            let count = ask_player_count(console)?;
            (1..=count)
                .map(|i| ask_name(console, &format!("Enter Player {i}'s name: "), i))
                .collect()
        }
    }
}

fn ask_player_count(console: &mut impl Console) -> QuizResult<usize> {
    let requested = console.ask_number("\nHow many players will participate? ")?;
    match requested {
        Some(n) if (2..=MAX_PLAYERS as i64).contains(&n) => Ok(n as usize),
        Some(n) if n > MAX_PLAYERS as i64 => {
            warn!("player count {n} above maximum");
            console.announce(
                Tone::Warning,
                &format!("Too many players. Limiting to {MAX_PLAYERS} players."),
            )?;
            Ok(MAX_PLAYERS)
        }
        _ => {
            warn!("invalid player count {requested:?}, defaulting to 2");
            console.announce(
                Tone::Warning,
                "Invalid number of players. Defaulting to 2 players.",
            )?;
            Ok(2)
        }
    }
}

/// Read a name; a blank line becomes `Player <n>`.
fn ask_name(console: &mut impl Console, prompt: &str, number: usize) -> QuizResult<String> {
    let name = console.ask_line(prompt)?;
    let name = name.trim();
    if name.is_empty() {
        Ok(format!("Player {number}"))
    } else {
        Ok(name.to_string())
    }
}
