//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterResult, Word};
use colored::Colorize;

/// Render a guess as colored letter tiles
///
/// Falls back to plain letters when colors are disabled.
#[must_use]
pub fn colored_guess(guess: &Word, feedback: &Feedback) -> String {
    guess
        .text()
        .to_uppercase()
        .chars()
        .zip(feedback.results())
        .map(|(ch, result)| {
            let tile = format!(" {ch} ");
            match result {
                LetterResult::Correct => tile.black().on_green().to_string(),
                LetterResult::Present => tile.black().on_yellow().to_string(),
                LetterResult::Absent => tile.white().on_bright_black().to_string(),
            }
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// List words compactly, at most `limit` of them
#[must_use]
pub fn word_preview(words: &[Word], limit: usize) -> String {
    let shown: Vec<String> = words
        .iter()
        .take(limit)
        .map(|w| w.text().to_uppercase())
        .collect();
    let mut preview = shown.join(", ");
    if words.len() > limit {
        preview.push_str(&format!(" … and {} more", words.len() - limit));
    }
    preview
}
