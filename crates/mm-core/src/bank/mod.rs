//! The static question bank and its per-category views.
//!
//! Bank numbering is 1-based:
//!
//! | Questions | Section |
//! |-----------|---------|
//! | 1-25      | vocabulary and word meaning |
//! | 26-40     | grammar |
//! | 41-55     | number sequences |
//! | 56-70     | ratios |
//! | 71-75     | general knowledge |
//! | 76-100    | mental math |
//!
//! English uses 1-40, Math uses 56-70 followed by 76-100, and the IQ test
//! draws from everything.

mod data;

use std::ops::Range;

use crate::category::Category;
use crate::question::Question;

pub use data::QUESTIONS;

// Index ranges (0-based, half-open) making up each category.
const GENERAL: &[Range<usize>] = &[0..100];
const MATH: &[Range<usize>] = &[55..70, 75..100];
const ENGLISH: &[Range<usize>] = &[0..40];

fn ranges(category: Category) -> &'static [Range<usize>] {
    match category {
        Category::General => GENERAL,
        Category::Math => MATH,
        Category::English => ENGLISH,
    }
}

/// The questions belonging to `category`, in bank order.
///
/// Every call returns an independent view over the static bank.
pub fn load(category: Category) -> Vec<&'static Question> {
    ranges(category)
        .iter()
        .flat_map(|r| QUESTIONS[r.clone()].iter())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_sizes() {
        assert_eq!(load(Category::General).len(), 100);
        assert_eq!(load(Category::Math).len(), 40);
        assert_eq!(load(Category::English).len(), 40);
    }

    #[test]
    fn every_correct_option_in_range() {
        for (i, q) in QUESTIONS.iter().enumerate() {
            assert!(
                (1..=4).contains(&q.correct()),
                "question {} has correct option {}",
                i + 1,
                q.correct()
            );
            assert!(!q.prompt().is_empty(), "question {} has no prompt", i + 1);
            assert!(
                q.options().iter().all(|o| !o.is_empty()),
                "question {} has an empty option",
                i + 1
            );
        }
    }

    #[test]
    fn math_skips_general_knowledge() {
        let math = load(Category::Math);
        assert_eq!(math[0].prompt(), QUESTIONS[55].prompt());
        assert_eq!(math[14].prompt(), QUESTIONS[69].prompt());
        assert_eq!(math[15].prompt(), "What is 8 multiplied by 6?");
        assert_eq!(math[39].prompt(), QUESTIONS[99].prompt());
        assert!(
            !math
                .iter()
                .any(|q| q.prompt() == "What is the capital of France?")
        );
    }

    #[test]
    fn english_is_the_first_forty() {
        let english = load(Category::English);
        for (i, q) in english.iter().enumerate() {
            assert!(std::ptr::eq(*q, &QUESTIONS[i]));
        }
    }

    #[test]
    fn views_are_independent() {
        let a = load(Category::Math);
        let b = load(Category::General);
        assert_eq!(b[0].prompt(), QUESTIONS[0].prompt());
        assert_eq!(a[0].prompt(), QUESTIONS[55].prompt());
    }
}
