//! Core domain types for the puzzle
//!
//! Words and per-letter feedback. Pure, testable, no I/O.

mod feedback;
mod word;

pub use feedback::{Feedback, FeedbackError, LetterResult, WireLetter};
pub use word::{Word, WordError};
