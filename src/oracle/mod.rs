//! Feedback Oracle interface
//!
//! The solver never scores its own guesses; it asks an oracle. The remote
//! scoring service lives behind this trait, as does [`LocalOracle`], which
//! scores in-process.

mod local;

pub use local::LocalOracle;

use crate::core::{Feedback, FeedbackError, Word};
use std::fmt;
use thiserror::Error;

/// Which puzzle the oracle should score against
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PuzzleMode {
    /// The deterministic puzzle of the day
    Daily,
    /// A puzzle chosen reproducibly from `seed`
    Random { seed: u64 },
    /// An explicit secret supplied by the caller
    Target { word: Word },
}

impl fmt::Display for PuzzleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Daily => write!(f, "daily"),
            Self::Random { seed } => write!(f, "random (seed {seed})"),
            Self::Target { .. } => write!(f, "target"),
        }
    }
}

/// The oracle could not produce feedback
///
/// The solver treats every variant the same way: the session ends as
/// `OracleFailed`.
#[derive(Debug, Error)]
pub enum OracleError {
    #[error("oracle unreachable: {0}")]
    Unreachable(String),
    #[error("oracle returned status {status}: {body}")]
    Status { status: u16, body: String },
    #[error(transparent)]
    Malformed(#[from] FeedbackError),
    #[error("oracle rejected request: {0}")]
    InvalidRequest(String),
}

/// Scores guesses for one puzzle mode
pub trait FeedbackOracle {
    /// Score `guess` for the puzzle selected by `mode` and `size`
    ///
    /// # Errors
    /// Returns `OracleError` when the oracle cannot be reached, refuses the
    /// request, or answers with something that is not valid feedback.
    fn score(&self, guess: &Word, mode: &PuzzleMode, size: usize) -> Result<Feedback, OracleError>;
}

impl<O: FeedbackOracle + ?Sized> FeedbackOracle for &O {
    fn score(&self, guess: &Word, mode: &PuzzleMode, size: usize) -> Result<Feedback, OracleError> {
        (**self).score(guess, mode, size)
    }
}
