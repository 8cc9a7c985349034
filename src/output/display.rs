//! Display functions for command results

use super::formatters::{countdown_clock, letters_line};
use crate::commands::{AuditReport, CheckResult, PuzzleView};
use crate::validation::Verdict;
use chrono::Duration;
use colored::Colorize;

/// Print a resolved puzzle
pub fn print_puzzle_view(view: &PuzzleView, reveal_words: bool) {
    let puzzle = &view.puzzle;

    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "DAILY PUZZLE:".bright_cyan().bold(),
        puzzle.puzzle_id.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n  {}", letters_line(&puzzle.letters).bold());
    println!(
        "\n  Words: {}   Pangrams: {}   Max score: {}",
        puzzle.word_count().to_string().bright_green(),
        puzzle.pangram_count.to_string().bright_green(),
        puzzle.max_score.to_string().bright_green()
    );
    println!("  Generated in {} attempt(s)", puzzle.attempts);

    if puzzle.is_fallback {
        println!(
            "  {}",
            "Quality gate not met; best-effort puzzle".yellow().bold()
        );
    }
    if view.already_played {
        println!("  {}", "Already played today".bright_black());
    }

    if reveal_words {
        println!("\n{}", "─".repeat(60).cyan());
        for word in &puzzle.valid_words {
            if crate::core::scoring::is_pangram(word) {
                println!("  {}", word.bright_magenta().bold());
            } else {
                println!("  {word}");
            }
        }
    }

    print_countdown(view.countdown);
}

/// Print the verdict for one candidate word
pub fn print_check_result(result: &CheckResult) {
    match result.verdict {
        Verdict::Valid { score, is_pangram } => {
            let mut line = format!("✅ {} is valid: +{score}", result.word.to_uppercase());
            if is_pangram {
                line.push_str(" (pangram!)");
            }
            println!("{}", line.green().bold());
        }
        Verdict::Invalid(reason) => {
            println!(
                "{}",
                format!("❌ {}: {reason}", result.word.to_uppercase())
                    .red()
                    .bold()
            );
        }
        Verdict::Pending => {
            println!(
                "{}",
                format!(
                    "⏳ {}: dictionary still loading, try again",
                    result.word.to_uppercase()
                )
                .yellow()
            );
        }
    }
}

/// Print the time remaining until the next puzzle
pub fn print_countdown(remaining: Duration) {
    println!(
        "\n  Next puzzle in {}",
        countdown_clock(remaining).bright_cyan().bold()
    );
}

/// Print the generation-quality audit table
pub fn print_audit_report(report: &AuditReport) {
    println!("\n{}", "═".repeat(70).cyan());
    println!(" {} ", "GENERATION AUDIT".bright_cyan().bold());
    println!("{}", "═".repeat(70).cyan());

    println!(
        "\n  {:<12} {:<9} {:>6} {:>9} {:>7} {:>9}",
        "date", "letters", "words", "pangrams", "score", "attempts"
    );
    for row in &report.rows {
        let flag = if row.is_fallback { " fallback" } else { "" };
        println!(
            "  {:<12} {:<9} {:>6} {:>9} {:>7} {:>9}{}",
            row.date,
            row.letters,
            row.word_count,
            row.pangram_count,
            row.max_score,
            row.attempts,
            flag.yellow()
        );
    }

    println!(
        "\n  {} puzzles, {} fallback(s), {:.1} avg attempts, {:.1} avg words",
        report.rows.len(),
        report.fallbacks,
        report.average_attempts,
        report.average_words
    );
}
