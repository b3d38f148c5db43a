//! Display functions for command results

use super::formatters::{colored_guess, create_progress_bar, word_preview};
use crate::commands::{BenchmarkResult, GuessResult, RefineResult};
use crate::oracle::PuzzleMode;
use crate::solver::{SolveOutcome, SolveState};
use colored::Colorize;

/// Print the rounds and final state of a solve
pub fn print_solve_outcome(outcome: &SolveOutcome, mode: &PuzzleMode, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Solving: {}", mode.to_string().bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    for round in &outcome.history {
        println!(
            "\nRound {}: {}  {}",
            round.number,
            colored_guess(&round.guess, &round.feedback),
            round.feedback.to_emoji()
        );
        if verbose {
            println!(
                "  Candidates: {} → {}",
                round.candidates_before, round.candidates_after
            );
        }
    }

    println!();
    match outcome.state {
        SolveState::Solved => {
            let word = outcome
                .final_guess
                .as_ref()
                .map(|w| w.text().to_uppercase())
                .unwrap_or_default();
            println!(
                "{}",
                format!("✅ Solved: {word} in {} rounds", outcome.rounds)
                    .green()
                    .bold()
            );
        }
        SolveState::Exhausted => {
            println!(
                "{}",
                format!(
                    "❌ No possible words left after {} rounds",
                    outcome.rounds
                )
                .red()
                .bold()
            );
        }
        SolveState::OracleFailed => {
            let reason = outcome
                .error
                .as_ref()
                .map_or_else(|| "unknown error".to_string(), ToString::to_string);
            println!("{}", format!("❌ Oracle failed: {reason}").red().bold());
        }
        SolveState::RoundLimitExceeded => {
            println!(
                "{}",
                format!(
                    "⚠️  Gave up after {} rounds with {} candidates left",
                    outcome.rounds, outcome.remaining
                )
                .yellow()
                .bold()
            );
        }
        SolveState::Searching => println!("Still searching after {} rounds", outcome.rounds),
    }
}

/// Print one scored guess
pub fn print_guess_result(result: &GuessResult) {
    println!(
        "{}: {}  {}",
        result.mode.to_string().bright_yellow(),
        colored_guess(&result.guess, &result.feedback),
        result.feedback.to_emoji()
    );
    if result.is_solved() {
        println!("{}", "✅ That's the word!".green().bold());
    }
}

/// Print the steps and survivors of a manual refine
pub fn print_refine_result(result: &RefineResult) {
    for step in &result.steps {
        println!(
            "{}  {} → {} candidates",
            colored_guess(&step.guess, &step.feedback),
            step.candidates_before,
            step.candidates_after
        );
    }

    let remaining = result.remaining.words();
    println!(
        "\n{} {}",
        "Possible words:".bright_cyan().bold(),
        remaining.len()
    );
    if remaining.is_empty() {
        println!("{}", "No candidates remain. Check your feedback.".red());
        return;
    }
    println!("  {}", word_preview(remaining, 12));

    if let Some(next) = result.suggestion() {
        println!(
            "\n📊 Next guess: {}",
            next.text().to_uppercase().bright_yellow().bold()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Solved:           {}",
        format!("{}", result.solved).green()
    );
    println!(
        "   Average rounds:   {}",
        format!("{:.2}", result.average_rounds)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_rounds).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_rounds).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    if result.solved > 0 {
        println!("\n📈 {}", "Distribution:".bright_cyan().bold());
        for (&rounds, &count) in &result.distribution {
            let pct = (count as f64 / result.solved as f64) * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            println!("   {rounds:2}: {} {count:4} ({pct:5.1}%)", bar.green());
        }
    }

    if !result.failures.is_empty() {
        println!("\n⚠️  {}", "Unsolved:".yellow().bold());
        for (word, state) in result.failures.iter().take(10) {
            println!("   {} ({state:?})", word.to_uppercase());
        }
        if result.failures.len() > 10 {
            println!("   … and {} more", result.failures.len() - 10);
        }
    }
}
