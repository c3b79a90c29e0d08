//! Integration tests for the mm-cli binary commands.

#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use assert_cmd::Command;
use predicates::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use mm_core::{Category, Question, load, presentation_order};

fn mindmatch() -> Command {
    Command::cargo_bin("mindmatch").unwrap()
}

/// Question orders a match seeded with `seed` presents, player by player.
fn orders(category: Category, seed: u64, players: usize) -> Vec<Vec<&'static Question>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let pool = load(category);
    (0..players)
        .map(|_| presentation_order(&pool, 10, &mut rng))
        .collect()
}

/// Stdin lines answering the first `correct` questions right, the rest wrong.
fn answers(order: &[&Question], correct: usize) -> String {
    order
        .iter()
        .enumerate()
        .map(|(i, q)| {
            let a = if i < correct {
                q.correct()
            } else {
                q.correct() % 4 + 1
            };
            format!("{a}\n")
        })
        .collect()
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

#[test]
fn math_solo_perfect_score() {
    let o = orders(Category::Math, 7, 1);
    let order = &o[0];
    let stdin = format!("Ada\n{}", answers(order, 10));

    mindmatch()
        .args(["play", "--category", "math", "--mode", "solo", "--seed", "7"])
        .write_stdin(stdin)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Welcome to MindMatch !")
                .and(predicate::str::contains("Correct!").count(10))
                .and(predicate::str::contains("Ada, your Final Score: 10/10"))
                .and(predicate::str::contains("IQ Range").not()),
        );
}

#[test]
fn iq_solo_reports_band() {
    let o = orders(Category::General, 99, 1);
    let order = &o[0];
    let stdin = format!("Ada\n{}", answers(order, 6));

    mindmatch()
        .args(["play", "-c", "iq", "-m", "solo", "-s", "99"])
        .write_stdin(stdin)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Ada, your Final Score: 6/10 | IQ Range: 100-110 | Category: Average Intelligence!",
        ));
}

#[test]
fn duel_higher_score_wins() {
    let o = orders(Category::English, 3, 2);
    let stdin = format!("Ada\nGrace\n{}{}", answers(&o[0], 9), answers(&o[1], 3));

    mindmatch()
        .args(["play", "--category", "english", "--mode", "duel", "--seed", "3"])
        .write_stdin(stdin)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Starting Multiplayer Quiz!")
                .and(predicate::str::contains("FINAL SCORES"))
                .and(predicate::str::contains("Ada: 9/10"))
                .and(predicate::str::contains("Grace: 3/10"))
                .and(predicate::str::contains("Ada wins!")),
        );
}

#[test]
fn group_player_count_coerced() {
    let o = orders(Category::Math, 5, 2);
    let stdin = format!("1\nA\nB\n{}{}", answers(&o[0], 2), answers(&o[1], 8));

    mindmatch()
        .args(["play", "--category", "math", "--mode", "group", "--seed", "5"])
        .write_stdin(stdin)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Invalid number of players. Defaulting to 2 players.")
                .and(predicate::str::contains("B wins!")),
        );
}

#[test]
fn menus_default_on_bad_choices() {
    // Unknown category and mode, then EOF for every answer.
    mindmatch()
        .write_stdin("9\nnine\nAda\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Select Category:")
                .and(predicate::str::contains("Select Game Mode:"))
                .and(predicate::str::contains(
                    "Ada, your Final Score: 0/10 | IQ Range: 40-50",
                )),
        );
}

#[test]
fn wrong_answer_reveals_correct_option() {
    let o = orders(Category::Math, 11, 1);
    let order = &o[0];
    let stdin = format!("Ada\n{}", answers(order, 0));

    mindmatch()
        .args(["play", "-c", "math", "-m", "solo", "-s", "11", "-q", "1"])
        .write_stdin(stdin)
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Wrong! The correct answer was: {}",
            order[0].correct_text()
        )))
        .stdout(predicate::str::contains("Time remaining: 0"));
}

#[test]
fn unknown_category_flag_fails() {
    mindmatch()
        .args(["play", "--category", "history"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown category"));
}

// ---------------------------------------------------------------------------
// questions
// ---------------------------------------------------------------------------

#[test]
fn questions_table_lists_bank() {
    mindmatch()
        .args(["questions"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("What is the capital of France?")
                .and(predicate::str::contains("100 questions in IQ/General")),
        );
}

#[test]
fn questions_json_for_math() {
    let output = mindmatch()
        .args(["questions", "--category", "math", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["category"], "math");
    let questions = json["questions"].as_array().unwrap();
    assert_eq!(questions.len(), 40);
    assert_eq!(questions[15]["prompt"], "What is 8 multiplied by 6?");
    assert_eq!(questions[15]["correct"], 4);
}
