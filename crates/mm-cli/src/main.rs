//! CLI frontend for the MindMatch quiz game.

mod commands;

use std::process;

use clap::{Args, Parser, Subcommand};

use mm_core::Category;
use mm_quiz::{Mode, QuizConfig};

#[derive(Parser)]
#[command(
    name = "mindmatch",
    about = "MindMatch — a timed multiple-choice quiz for one or more players",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a quiz (the default when no command is given)
    Play(PlayArgs),

    /// List the questions in a category
    Questions {
        /// Category to list: iq, math, english (default: iq)
        #[arg(short, long, value_parser = parse_category)]
        category: Option<Category>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
struct PlayArgs {
    /// Category: iq, math, english (skips the category menu)
    #[arg(short, long, value_parser = parse_category)]
    category: Option<Category>,

    /// Mode: solo, duel, group (skips the mode menu)
    #[arg(short, long, value_parser = parse_mode)]
    mode: Option<Mode>,

    /// RNG seed for a reproducible question order
    #[arg(short, long)]
    seed: Option<u64>,

    /// Seconds each player gets (default: 360)
    #[arg(short, long)]
    time_limit: Option<u64>,

    /// Questions per player (default: 10)
    #[arg(short, long)]
    questions: Option<usize>,
}

impl PlayArgs {
    fn to_config(&self) -> QuizConfig {
        let mut config = QuizConfig::default();
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(secs) = self.time_limit {
            config = config.with_time_limit(secs);
        }
        if let Some(n) = self.questions {
            config = config.with_questions(n);
        }
        if let Some(category) = self.category {
            config = config.with_category(category);
        }
        if let Some(mode) = self.mode {
            config = config.with_mode(mode);
        }
        config
    }
}

fn parse_category(s: &str) -> Result<Category, String> {
    Category::parse(s).ok_or_else(|| format!("unknown category \"{s}\". Use: iq, math, english"))
}

fn parse_mode(s: &str) -> Result<Mode, String> {
    Mode::parse(s).ok_or_else(|| format!("unknown mode \"{s}\". Use: solo, duel, group"))
}

fn main() {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        None => commands::play::run(QuizConfig::default()),
        Some(Commands::Play(args)) => commands::play::run(args.to_config()),
        Some(Commands::Questions { category, json }) => {
            commands::questions::run(category.unwrap_or_default(), json)
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
