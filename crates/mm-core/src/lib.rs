//! Core types for MindMatch.
//!
//! Holds the static multiple-choice question bank, the category partitions
//! over it, the Fisher-Yates selector that decides presentation order, the
//! IQ band table, and the score-then-time winner resolution. Nothing in
//! this crate performs I/O.

pub mod bank;
pub mod category;
pub mod iq;
pub mod question;
pub mod select;
pub mod standings;

pub use bank::load;
pub use category::Category;
pub use iq::{IqBand, iq_band};
pub use question::Question;
pub use select::{presentation_order, shuffle};
pub use standings::{Standing, Verdict, resolve_winner};
