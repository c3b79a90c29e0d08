//! Configuration for a quiz match.

use mm_core::Category;

use crate::mode::Mode;

/// Default wall-clock budget per session, in seconds.
pub const DEFAULT_TIME_LIMIT_SECS: u64 = 360;

/// Default number of questions per session.
pub const DEFAULT_QUESTIONS: usize = 10;

/// Configuration for a match.
#[derive(Debug, Clone)]
pub struct QuizConfig {
    /// RNG seed for reproducible shuffles. `None` seeds from the clock.
    pub seed: Option<u64>,
    /// Per-session time budget in seconds.
    pub time_limit_secs: u64,
    /// Questions per session (at least 1).
    pub questions: usize,
    /// Preselected category; skips the category menu.
    pub category: Option<Category>,
    /// Preselected mode; skips the mode menu.
    pub mode: Option<Mode>,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            seed: None,
            time_limit_secs: DEFAULT_TIME_LIMIT_SECS,
            questions: DEFAULT_QUESTIONS,
            category: None,
            mode: None,
        }
    }
}

impl QuizConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the per-session time budget.
    pub fn with_time_limit(mut self, secs: u64) -> Self {
        self.time_limit_secs = secs;
        self
    }

    /// Set the quiz length (clamped to at least 1).
    pub fn with_questions(mut self, questions: usize) -> Self {
        self.questions = questions.max(1);
        self
    }

    /// Preselect the category.
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Preselect the mode.
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = Some(mode);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = QuizConfig::default();
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.time_limit_secs, 360);
        assert_eq!(cfg.questions, 10);
        assert!(cfg.category.is_none());
        assert!(cfg.mode.is_none());
    }

    #[test]
    fn builder_methods() {
        let cfg = QuizConfig::default()
            .with_seed(123)
            .with_time_limit(60)
            .with_questions(5)
            .with_category(Category::Math)
            .with_mode(Mode::Group);
        assert_eq!(cfg.seed, Some(123));
        assert_eq!(cfg.time_limit_secs, 60);
        assert_eq!(cfg.questions, 5);
        assert_eq!(cfg.category, Some(Category::Math));
        assert_eq!(cfg.mode, Some(Mode::Group));
    }

    #[test]
    fn questions_clamped() {
        let cfg = QuizConfig::default().with_questions(0);
        assert_eq!(cfg.questions, 1);
    }
}
