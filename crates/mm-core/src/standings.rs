//! Multi-player results and winner resolution.
//!
//! The winner has the highest score; equal scores are broken by the lower
//! elapsed time. If the best score and best time are both shared, every
//! player on the best score is part of the tie.

use serde::{Deserialize, Serialize};

/// One player's finished session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    /// Display name as entered.
    pub name: String,
    /// Correct answers.
    pub score: u32,
    /// Whole seconds the session took.
    pub elapsed_secs: u64,
}

impl Standing {
    /// Create a standing.
    pub fn new(name: impl Into<String>, score: u32, elapsed_secs: u64) -> Self {
        Self {
            name: name.into(),
            score,
            elapsed_secs,
        }
    }
}

/// The outcome of comparing standings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// A single winner.
    Winner {
        /// The winning player.
        name: String,
        /// True when the score was shared and time decided it.
        by_time: bool,
    },
    /// Everyone on the top score, in roster order.
    Tie(Vec<String>),
}

/// Resolve the winner in one pass over `standings`.
///
/// Returns `None` for an empty slice.
pub fn resolve_winner(standings: &[Standing]) -> Option<Verdict> {
    let (first, rest) = standings.split_first()?;

    let mut best_score = first.score;
    let mut best_time = first.elapsed_secs;
    // Players on the best score, and how many of them share the best time.
    let mut top: Vec<&Standing> = vec![first];
    let mut fastest: Vec<&Standing> = vec![first];

    for s in rest {
        if s.score > best_score {
            best_score = s.score;
            best_time = s.elapsed_secs;
            top = vec![s];
            fastest = vec![s];
        } else if s.score == best_score {
            top.push(s);
            if s.elapsed_secs < best_time {
                best_time = s.elapsed_secs;
                fastest = vec![s];
            } else if s.elapsed_secs == best_time {
                fastest.push(s);
            }
        }
    }

    match fastest.as_slice() {
        [winner] => Some(Verdict::Winner {
            name: winner.name.clone(),
            by_time: top.len() > 1,
        }),
        _ => Some(Verdict::Tie(top.iter().map(|s| s.name.clone()).collect())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn winner(name: &str, by_time: bool) -> Option<Verdict> {
        Some(Verdict::Winner {
            name: name.to_string(),
            by_time,
        })
    }

    #[test]
    fn higher_score_wins() {
        let s = [Standing::new("A", 7, 100), Standing::new("B", 9, 120)];
        assert_eq!(resolve_winner(&s), winner("B", false));
    }

    #[test]
    fn equal_score_broken_by_time() {
        let s = [Standing::new("A", 8, 90), Standing::new("B", 8, 70)];
        assert_eq!(resolve_winner(&s), winner("B", true));
    }

    #[test]
    fn equal_score_and_time_is_a_tie() {
        let s = [Standing::new("A", 5, 60), Standing::new("B", 5, 60)];
        assert_eq!(
            resolve_winner(&s),
            Some(Verdict::Tie(vec!["A".into(), "B".into()]))
        );
    }

    #[test]
    fn single_player_wins_outright() {
        let s = [Standing::new("Solo", 3, 12)];
        assert_eq!(resolve_winner(&s), winner("Solo", false));
    }

    #[test]
    fn empty_has_no_verdict() {
        assert_eq!(resolve_winner(&[]), None);
    }

    #[test]
    fn tie_names_everyone_on_top_score() {
        // C is slower but still shares the top score.
        let s = [
            Standing::new("A", 6, 50),
            Standing::new("B", 6, 50),
            Standing::new("C", 6, 80),
            Standing::new("D", 2, 10),
        ];
        assert_eq!(
            resolve_winner(&s),
            Some(Verdict::Tie(vec!["A".into(), "B".into(), "C".into()]))
        );
    }

    #[test]
    fn later_higher_score_resets_tie() {
        let s = [
            Standing::new("A", 4, 30),
            Standing::new("B", 4, 30),
            Standing::new("C", 5, 200),
        ];
        assert_eq!(resolve_winner(&s), winner("C", false));
    }

    #[test]
    fn faster_player_beats_earlier_tie() {
        let s = [
            Standing::new("A", 7, 90),
            Standing::new("B", 7, 90),
            Standing::new("C", 7, 40),
        ];
        assert_eq!(resolve_winner(&s), winner("C", true));
    }

    #[test]
    fn serde_roundtrip() {
        let v = Verdict::Tie(vec!["A".into(), "B".into()]);
        let json = serde_json::to_string(&v).unwrap();
        let back: Verdict = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);
    }
}
