//! Display functions for command results

use super::formatters::{format_path, highlight_mask};
use crate::commands::{FindResult, SolveReport};
use colored::Colorize;

/// Print the result of a find command
///
/// Renders the grid with every matched cell highlighted, the way the
/// original puzzle UI lit cells up, then summarizes the matches.
pub fn print_find_result(result: &FindResult, verbose: bool) {
    println!("\n{}", "─".repeat(40).cyan());
    println!("Searching for: {}", result.word.bright_yellow().bold());
    println!("{}", "─".repeat(40).cyan());
    println!();

    let mask = highlight_mask(result.grid.size(), &result.paths);
    for (row, cells) in result.grid.rows().iter().enumerate() {
        let line: Vec<String> = cells
            .iter()
            .enumerate()
            .map(|(col, &cell)| {
                let cell = cell.to_uppercase().to_string();
                if mask[row][col] {
                    cell.bright_yellow().bold().to_string()
                } else {
                    cell.bright_black().to_string()
                }
            })
            .collect();
        println!("   {}", line.join(" "));
    }
    println!();

    if verbose {
        for (i, path) in result.paths.iter().enumerate() {
            println!("   {}: {}", i + 1, format_path(path));
        }
        if !result.paths.is_empty() {
            println!();
        }
    }

    if result.is_match() {
        let count = result.paths.len();
        let plural = if count == 1 { "path" } else { "paths" };
        println!("{}", format!("✅ Found {count} {plural}").green().bold());
    } else {
        println!("{}", "❌ No matches".red().bold());
    }
}

/// Print the result of solving a grid
pub fn print_solve_report(report: &SolveReport) {
    println!("\n{}", "═".repeat(40).cyan());
    println!(" {} ", "GRID SOLUTION".bright_cyan().bold());
    println!("{}", "═".repeat(40).cyan());

    println!(
        "\nChecked against {} dictionary words",
        report.dictionary_size
    );

    if report.words.is_empty() {
        println!("\n{}", "No words found".red().bold());
        return;
    }

    println!();
    for entry in &report.words {
        println!(
            "   {:<16} {}",
            entry.word,
            format!("{:>3}", entry.score).bright_yellow()
        );
    }

    println!(
        "\n   Words: {}   Total score: {}",
        report.words.len().to_string().green().bold(),
        report.total_score.to_string().green().bold()
    );
}
