//! Auto-solve command
//!
//! Resolves the puzzle mode from command-line input and runs one session.

use crate::candidates::CandidateSource;
use crate::core::{Word, WordError};
use crate::error::SolveResult;
use crate::oracle::{FeedbackOracle, PuzzleMode};
use crate::solver::{SolveConfig, SolveOutcome, solve_with};
use log::info;

/// Which puzzle to solve, as requested by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModeRequest {
    Daily,
    /// Seed is optional; one is drawn when missing
    Random { seed: Option<u64> },
    Target { word: String },
}

/// Turn a request into a concrete puzzle mode
///
/// A random request without a seed gets a fresh one, logged so the puzzle can
/// be replayed.
///
/// # Errors
///
/// Returns `WordError` if the target is not a `size`-letter word.
pub fn resolve_mode(request: ModeRequest, size: usize) -> Result<PuzzleMode, WordError> {
    match request {
        ModeRequest::Daily => Ok(PuzzleMode::Daily),
        ModeRequest::Random { seed } => {
            let seed = seed.unwrap_or_else(|| {
                let seed = rand::random();
                info!("no seed given, using {seed}");
                seed
            });
            Ok(PuzzleMode::Random { seed })
        }
        ModeRequest::Target { word } => Ok(PuzzleMode::Target {
            word: Word::with_len(word, size)?,
        }),
    }
}

/// Solve one puzzle with the given source and oracle
///
/// # Errors
///
/// Returns `SolveError` if the session cannot start (source failure, no words
/// of the puzzle size, invalid configuration).
pub fn solve_puzzle<S, O>(config: SolveConfig, source: &S, oracle: &O) -> SolveResult<SolveOutcome>
where
    S: CandidateSource + ?Sized,
    O: FeedbackOracle + ?Sized,
{
    info!("solving {} puzzle, size {}", config.mode, config.size);
    solve_with(config, source, oracle)
}
