//! Single-guess command
//!
//! Sends one player guess to the oracle for the daily, seeded or target
//! puzzle and returns the feedback it gave.

use crate::core::{Feedback, FeedbackError, Word, WordError};
use crate::oracle::{FeedbackOracle, OracleError, PuzzleMode};
use log::debug;
use thiserror::Error;

/// Errors from scoring a player's guess
#[derive(Debug, Error)]
pub enum GuessError {
    #[error("invalid guess {guess:?}: {source}")]
    Word {
        guess: String,
        #[source]
        source: WordError,
    },
    #[error(transparent)]
    Oracle(#[from] OracleError),
}

/// A guess and the oracle's verdict on it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessResult {
    pub mode: PuzzleMode,
    pub guess: Word,
    pub feedback: Feedback,
}

impl GuessResult {
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.feedback.is_solved()
    }
}

/// Score `guess` once against the puzzle selected by `mode`
///
/// # Errors
///
/// Returns `GuessError::Word` if `guess` is not a `size`-letter word and
/// `GuessError::Oracle` if the oracle fails or answers with feedback that
/// does not line up with the guess.
pub fn score_guess<O>(
    guess: &str,
    mode: PuzzleMode,
    size: usize,
    oracle: &O,
) -> Result<GuessResult, GuessError>
where
    O: FeedbackOracle + ?Sized,
{
    let guess = Word::with_len(guess, size).map_err(|source| GuessError::Word {
        guess: guess.to_string(),
        source,
    })?;

    let feedback = oracle.score(&guess, &mode, size)?;
    if feedback.len() != guess.len() {
        return Err(OracleError::Malformed(FeedbackError::LengthMismatch {
            guess: guess.len(),
            feedback: feedback.len(),
        })
        .into());
    }

    debug!("{mode}: {guess} scored {feedback}");
    Ok(GuessResult {
        mode,
        guess,
        feedback,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::LocalOracle;
    use crate::wordlists::loader::words_from_slice;

    fn target(text: &str) -> PuzzleMode {
        PuzzleMode::Target {
            word: Word::new(text).unwrap(),
        }
    }

    struct DownOracle;

    impl FeedbackOracle for DownOracle {
        fn score(&self, _: &Word, _: &PuzzleMode, _: usize) -> Result<Feedback, OracleError> {
            Err(OracleError::Unreachable("timed out".into()))
        }
    }

    struct ShortOracle;

    impl FeedbackOracle for ShortOracle {
        fn score(&self, _: &Word, _: &PuzzleMode, _: usize) -> Result<Feedback, OracleError> {
            Ok(Feedback::parse("GG").unwrap())
        }
    }

    #[test]
    fn scores_guess_against_target() {
        let oracle = LocalOracle::new(Vec::new());
        let result = score_guess("TRACE", target("crane"), 5, &oracle).unwrap();

        assert_eq!(result.guess.text(), "trace");
        assert_eq!(result.feedback.to_string(), "-GGYG");
        assert!(!result.is_solved());
    }

    #[test]
    fn exact_guess_is_solved() {
        let oracle = LocalOracle::new(Vec::new());
        let result = score_guess("crane", target("crane"), 5, &oracle).unwrap();
        assert!(result.is_solved());
    }

    #[test]
    fn seeded_guess_uses_the_same_secret_as_the_oracle() {
        let oracle = LocalOracle::new(words_from_slice(&["crane", "slate", "trace", "grace"]));
        let mode = PuzzleMode::Random { seed: 42 };
        let secret = oracle.secret_for(&mode, 5).unwrap();

        let result = score_guess(secret.text(), mode, 5, &oracle).unwrap();

        assert!(result.is_solved());
        assert_eq!(result.mode, PuzzleMode::Random { seed: 42 });
    }

    #[test]
    fn wrong_length_guess_never_reaches_the_oracle() {
        let result = score_guess("cranes", target("crane"), 5, &DownOracle);
        assert!(matches!(result, Err(GuessError::Word { .. })));
    }

    #[test]
    fn oracle_failure_is_reported() {
        let result = score_guess("crane", PuzzleMode::Daily, 5, &DownOracle);
        assert!(matches!(
            result,
            Err(GuessError::Oracle(OracleError::Unreachable(_)))
        ));
    }

    #[test]
    fn misaligned_feedback_is_malformed() {
        let result = score_guess("crane", PuzzleMode::Daily, 5, &ShortOracle);
        assert!(matches!(
            result,
            Err(GuessError::Oracle(OracleError::Malformed(_)))
        ));
    }
}
