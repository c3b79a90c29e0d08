use comfy_table::{ContentArrangement, Table};

use mm_core::{Category, load};

pub fn run(category: Category, json: bool) -> Result<(), String> {
    let questions = load(category);

    if json {
        let export = serde_json::json!({
            "category": category,
            "questions": questions,
        });
        let text = serde_json::to_string_pretty(&export)
            .map_err(|e| format!("JSON serialization error: {e}"))?;
        println!("{text}");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Question", "Answer"]);

    for (i, q) in questions.iter().enumerate() {
        let prompt = if q.prompt().chars().count() > 70 {
            format!("{}...", q.prompt().chars().take(67).collect::<String>())
        } else {
            q.prompt().to_string()
        };
        let answer = format!("{}) {}", q.correct(), q.correct_text());
        table.add_row(vec![(i + 1).to_string(), prompt, answer]);
    }

    println!("{table}");
    println!();
    println!("  {} questions in {category}", questions.len());

    Ok(())
}
