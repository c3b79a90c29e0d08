//! Error types for quiz sessions.

use mm_core::Category;
use thiserror::Error;

/// Result type for quiz operations.
pub type QuizResult<T> = Result<T, QuizError>;

/// Errors that can end a quiz.
///
/// Bad menu choices, player counts, and answers are coerced rather than
/// reported, so in practice only console I/O fails.
#[derive(Debug, Error)]
pub enum QuizError {
    /// Reading from or writing to the console failed.
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The chosen category has no questions.
    #[error("no questions available for category {0}")]
    EmptyCategory(Category),

    /// A match was started without any players.
    #[error("no players enrolled")]
    NoPlayers,
}
