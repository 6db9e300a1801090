// Colored terminal output for suggestion lists.
//
// All terminal-specific formatting lives here; main.rs delegates.

use colored::Colorize;

use crate::store::models::Suggestion;

use super::truncate_chars;

/// Display a suggestion list for one source item.
///
/// `insufficient_input` selects the empty-state message: an empty list
/// can mean "nothing matched" or "there was nothing to analyze", and the
/// pipeline deliberately doesn't distinguish the two.
pub fn display_suggestions(source_title: &str, suggestions: &[Suggestion], insufficient_input: bool) {
    if suggestions.is_empty() {
        if insufficient_input {
            println!("Not enough readable text in \"{source_title}\" to analyze.");
        } else {
            println!("No link suggestions found for \"{source_title}\".");
        }
        return;
    }

    println!(
        "\n{}",
        format!(
            "=== Link suggestions for \"{}\" ({} found) ===",
            truncate_chars(source_title, 48),
            suggestions.len()
        )
        .bold()
    );
    println!();

    println!(
        "  {:>4}  {:<34} {:<30} {:>6}",
        "Rank".dimmed(),
        "Anchor phrase".dimmed(),
        "Target".dimmed(),
        "Score".dimmed(),
    );
    println!("  {}", "-".repeat(78).dimmed());

    for (i, suggestion) in suggestions.iter().enumerate() {
        let phrase = truncate_chars(&suggestion.phrase, 32);
        let title = truncate_chars(&suggestion.title, 28);
        let score = format!("{:>6.2}", suggestion.score);
        let colored_score = colorize_score(suggestion.score, &score);
        let marker = if suggestion.boosted {
            "*".bright_yellow().to_string()
        } else {
            " ".to_string()
        };

        println!("  {:>4}. \"{:<32}\" {:<30} {}{}", i + 1, phrase, title, colored_score, marker);
        println!("        {}", suggestion.url.dimmed());
    }

    let boosted = suggestions.iter().filter(|s| s.boosted).count();
    if boosted > 0 {
        println!("\n  {} {} editorially boosted", "*".bright_yellow(), boosted);
    }
    println!();
}

/// Color a score by magnitude: strong title-level matches green, middling
/// matches yellow, the rest plain.
fn colorize_score(score: f64, rendered: &str) -> colored::ColoredString {
    if score >= 3.0 {
        rendered.bright_green()
    } else if score >= 1.5 {
        rendered.bright_yellow()
    } else {
        rendered.normal()
    }
}
