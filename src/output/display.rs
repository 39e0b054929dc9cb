//! Display functions for command results

use super::formatters::{entropy_bar, truncate_text};
use crate::analysis::ResultSet;
use crate::commands::{AnalysisResult, CrackResult};
use colored::Colorize;

/// Plaintexts longer than this are shortened in the table view
const PLAINTEXT_WIDTH: usize = 60;

/// Print ranked candidates as a table per message
pub fn print_crack_result(result: &CrackResult) {
    for set in &result.result_sets {
        print_result_set(set, &result.model.to_string());
    }
}

fn print_result_set(set: &ResultSet, model: &str) {
    println!("\n{}", "─".repeat(70).cyan());
    println!(
        "Ciphertext: {}  {}",
        truncate_text(set.ciphertext(), PLAINTEXT_WIDTH)
            .bright_yellow()
            .bold(),
        format!("({model})").bright_black()
    );
    println!("{}", "─".repeat(70).cyan());

    for (i, candidate) in set.candidates().iter().enumerate() {
        let plaintext = truncate_text(candidate.plaintext(), PLAINTEXT_WIDTH);
        let plaintext = if i == 0 {
            plaintext.green().bold()
        } else {
            plaintext.normal()
        };

        println!(
            "  ROT{:<2}  [{}] {:>7.3}  {}",
            candidate.rotation().value(),
            entropy_bar(candidate.entropy(), 16).green(),
            candidate.entropy(),
            plaintext
        );
    }
}

/// Print every record as `Plaintext\tCiphertext\tRotation\tEntropy`, one per line
pub fn print_records(result: &CrackResult) {
    for candidate in result.records() {
        println!("{candidate}");
    }
}

/// Print the result of text analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "ENTROPY ANALYSIS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n📝 {}",
        truncate_text(&result.text, PLAINTEXT_WIDTH).bright_yellow()
    );
    println!("   Letters:   {}", result.letters);
    println!("   Bigrams:   {}", result.bigrams);
    println!(
        "   Unigram:   [{}] {}",
        entropy_bar(result.unigram_entropy, 30).green(),
        format!("{:.3} bits", result.unigram_entropy).bright_yellow()
    );
    println!(
        "   Bigram:    [{}] {}",
        entropy_bar(result.bigram_entropy, 30).green(),
        format!("{:.3} bits", result.bigram_entropy).bright_yellow()
    );

    if result.letters < 20 {
        println!(
            "\n{}",
            "⚠️  Short text: scores carry little evidence and may mislead".yellow()
        );
    }
}
