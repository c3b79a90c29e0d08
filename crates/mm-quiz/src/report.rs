//! Result text: per-session score lines and the final scores block.

use mm_core::{Category, Standing, Verdict, iq_band};

use crate::mode::Mode;

/// Rule framing report blocks.
pub const RULE: &str = "=================================";

/// One player's result line.
///
/// For the IQ/General category the score is mapped onto an IQ band;
/// otherwise only `score/total` is shown.
pub fn session_result(player: &str, score: u32, total: usize, category: Category) -> String {
    if category.maps_to_iq() {
        let band = iq_band(score);
        format!(
            "{player}, your Final Score: {score}/{total} | IQ Range: {}-{} | Category: {}!",
            band.min, band.max, band.label
        )
    } else {
        format!("{player}, your Final Score: {score}/{total}")
    }
}

/// The line announcing a verdict.
///
/// Head-to-head ties get a plain message; group ties name everyone on the
/// top score.
pub fn verdict_line(verdict: &Verdict, mode: Mode) -> String {
    match verdict {
        Verdict::Winner {
            name,
            by_time: false,
        } => format!("{name} wins!"),
        Verdict::Winner {
            name,
            by_time: true,
        } => format!("{name} wins by time taken!"),
        Verdict::Tie(names) if mode == Mode::Group => {
            format!("It's a tie between: {}", names.join(", "))
        }
        Verdict::Tie(_) => "It's a tie!".to_string(),
    }
}

/// The framed final scores table, without the verdict.
pub fn final_scores(standings: &[Standing], category: Category, total: usize) -> String {
    let mut out = format!("{RULE}\n        FINAL SCORES\n{RULE}\n");
    for s in standings {
        if category.maps_to_iq() {
            out.push_str(&format!(
                "{}: {} (Time: {} seconds)\n",
                s.name, s.score, s.elapsed_secs
            ));
        } else {
            out.push_str(&format!("{}: {}/{total}\n", s.name, s.score));
        }
    }
    out.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iq_result_line() {
        assert_eq!(
            session_result("Ada", 6, 10, Category::General),
            "Ada, your Final Score: 6/10 | IQ Range: 100-110 | Category: Average Intelligence!"
        );
    }

    #[test]
    fn plain_result_line() {
        let line = session_result("Ada", 10, 10, Category::Math);
        assert_eq!(line, "Ada, your Final Score: 10/10");
        assert!(!line.contains("IQ"));
    }

    #[test]
    fn iq_fallback_for_long_quiz() {
        let line = session_result("Ada", 15, 20, Category::General);
        assert!(line.ends_with("IQ Range: 0-0 | Category: Invalid Score!"));
    }

    #[test]
    fn verdict_lines() {
        let win = Verdict::Winner {
            name: "B".into(),
            by_time: false,
        };
        let by_time = Verdict::Winner {
            name: "B".into(),
            by_time: true,
        };
        let tie = Verdict::Tie(vec!["A".into(), "B".into()]);
        assert_eq!(verdict_line(&win, Mode::HeadToHead), "B wins!");
        assert_eq!(verdict_line(&by_time, Mode::Group), "B wins by time taken!");
        assert_eq!(verdict_line(&tie, Mode::HeadToHead), "It's a tie!");
        assert_eq!(verdict_line(&tie, Mode::Group), "It's a tie between: A, B");
    }

    #[test]
    fn iq_final_scores_block() {
        let standings = [Standing::new("Ada", 8, 200), Standing::new("Grace", 8, 150)];
        insta::assert_snapshot!(final_scores(&standings, Category::General, 10), @r"
        =================================
                FINAL SCORES
        =================================
        Ada: 8 (Time: 200 seconds)
        Grace: 8 (Time: 150 seconds)
        ");
    }

    #[test]
    fn plain_final_scores_block() {
        let standings = [
            Standing::new("Ada", 3, 20),
            Standing::new("Grace", 9, 50),
            Standing::new("Linus", 9, 45),
        ];
        insta::assert_snapshot!(final_scores(&standings, Category::English, 10), @r"
        =================================
                FINAL SCORES
        =================================
        Ada: 3/10
        Grace: 9/10
        Linus: 9/10
        ");
    }
}
