//! Timed quiz sessions and match orchestration for MindMatch.
//!
//! A [`Session`] drives one player through a shuffled run of questions under
//! a wall-clock budget. A [`Game`] picks the category, mode, and roster,
//! runs one session per player in turn, and reports the results. All
//! terminal I/O goes through the [`Console`] trait and all time through the
//! [`Clock`] trait so that whole matches can be replayed in tests.

pub mod clock;
pub mod config;
pub mod console;
pub mod error;
pub mod game;
pub mod mode;
pub mod report;
pub mod session;

pub use clock::{Clock, ScriptedClock, SystemClock};
pub use config::QuizConfig;
pub use console::{Console, ScriptedConsole, Tone};
pub use error::{QuizError, QuizResult};
pub use game::{Game, MatchSummary};
pub use mode::Mode;
pub use session::{Session, SessionOutcome};
