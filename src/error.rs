//! Error types shared across the solver
//!
//! Oracle failures live in [`crate::oracle::OracleError`]; word and feedback
//! validation errors live next to their types in [`crate::core`].

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// A candidate source could not produce its word list
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read word list {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Candidate Store contract violations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CandidateError {
    #[error("candidate source returned no words")]
    EmptySource,
    #[error("no candidates remain")]
    NoCandidates,
    #[error("candidate {word} has {actual} letters, expected {expected}")]
    MixedLengths {
        word: String,
        expected: usize,
        actual: usize,
    },
}

/// Failures that stop a solve before the first oracle call
///
/// Once the loop is running every ending is reported through
/// [`crate::solver::SolveOutcome`] instead.
#[derive(Debug, Error)]
pub enum SolveError {
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error("no {size}-letter words in the candidate source")]
    EmptySource { size: usize },
    #[error(transparent)]
    Candidates(#[from] CandidateError),
    #[error("invalid puzzle configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for solver setup
pub type SolveResult<T> = Result<T, SolveError>;
