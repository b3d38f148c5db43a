//! Manual refine command
//!
//! Applies guesses and feedback typed by a player to the word list and
//! reports what is left.

use crate::candidates::CandidateSet;
use crate::core::{Feedback, FeedbackError, Word, WordError};
use crate::solver::refine;
use thiserror::Error;

/// Errors from interpreting user-supplied guesses and feedback
#[derive(Debug, Error)]
pub enum RefineError {
    #[error("invalid guess {guess:?}: {source}")]
    Guess {
        guess: String,
        #[source]
        source: WordError,
    },
    #[error("invalid feedback for {guess}: {source}")]
    Feedback {
        guess: String,
        #[source]
        source: FeedbackError,
    },
    #[error("guesses and feedback must come in pairs")]
    Unpaired,
    #[error("no {0}-letter words to refine")]
    NoWords(usize),
}

/// One applied guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefineStep {
    pub guess: Word,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Result of applying every guess in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefineResult {
    pub steps: Vec<RefineStep>,
    pub remaining: CandidateSet,
}

impl RefineResult {
    /// Next guess under the solver's front-of-list policy
    #[must_use]
    pub fn suggestion(&self) -> Option<&Word> {
        self.remaining.pick_guess().ok()
    }
}

/// Parse feedback typed as a pattern ("GY-GY") or pasted as oracle JSON
///
/// # Errors
///
/// Returns `FeedbackError` if neither form parses.
pub fn parse_feedback(input: &str, guess: &Word) -> Result<Feedback, FeedbackError> {
    if input.trim_start().starts_with('[') {
        Feedback::from_wire(input, guess)
    } else {
        Feedback::parse(input)
    }
}

/// Apply `(guess, feedback)` pairs to `words`, keeping only `size`-letter words
///
/// `pairs` alternates guess and feedback: `["crane", "YGG-G", "trace", "GGGGG"]`.
///
/// # Errors
///
/// Returns `RefineError` for odd-length input, invalid guesses or feedback,
/// or a list without `size`-letter words.
pub fn refine_candidates(
    words: Vec<Word>,
    pairs: &[String],
    size: usize,
) -> Result<RefineResult, RefineError> {
    if pairs.len() % 2 != 0 {
        return Err(RefineError::Unpaired);
    }

    let sized: Vec<Word> = words.into_iter().filter(|w| w.len() == size).collect();
    let mut candidates = CandidateSet::initialize(sized).map_err(|_| RefineError::NoWords(size))?;
    let mut steps = Vec::with_capacity(pairs.len() / 2);

    for pair in pairs.chunks_exact(2) {
        let guess = Word::with_len(&pair[0], size).map_err(|source| RefineError::Guess {
            guess: pair[0].clone(),
            source,
        })?;
        let feedback_error = |source| RefineError::Feedback {
            guess: guess.text().to_string(),
            source,
        };
        let feedback = parse_feedback(&pair[1], &guess).map_err(feedback_error)?;
        let next = refine(&candidates, &guess, &feedback).map_err(feedback_error)?;

        steps.push(RefineStep {
            candidates_before: candidates.len(),
            candidates_after: next.len(),
            guess,
            feedback,
        });
        candidates = next;
    }

    Ok(RefineResult {
        steps,
        remaining: candidates,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn words() -> Vec<Word> {
        words_from_slice(&["crane", "slate", "trace", "grace", "brace", "cat"])
    }

    fn pairs(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn applies_pairs_in_order() {
        let result =
            refine_candidates(words(), &pairs(&["crane", "YGG-G", "trace", "-GGGG"]), 5).unwrap();

        let texts: Vec<&str> = result.remaining.iter().map(Word::text).collect();
        assert_eq!(texts, ["grace", "brace"]);
        assert_eq!(result.steps.len(), 2);
        assert_eq!(result.steps[0].candidates_before, 5);
        assert_eq!(result.steps[0].candidates_after, 3);
        assert_eq!(result.steps[1].candidates_after, 2);
        assert_eq!(result.suggestion().map(Word::text), Some("grace"));
    }

    #[test]
    fn accepts_wire_feedback() {
        let json = r#"[{"slot":0,"guess":"c","result":"present"},
                       {"slot":1,"guess":"r","result":"correct"},
                       {"slot":2,"guess":"a","result":"correct"},
                       {"slot":3,"guess":"n","result":"absent"},
                       {"slot":4,"guess":"e","result":"correct"}]"#;
        let result = refine_candidates(words(), &pairs(&["crane", json]), 5).unwrap();
        assert_eq!(result.suggestion().map(Word::text), Some("trace"));
    }

    #[test]
    fn empty_pairs_return_full_list() {
        let result = refine_candidates(words(), &[], 5).unwrap();
        assert_eq!(result.remaining.len(), 5);
        assert!(result.steps.is_empty());
    }

    #[test]
    fn rejects_bad_input() {
        assert!(matches!(
            refine_candidates(words(), &pairs(&["crane"]), 5),
            Err(RefineError::Unpaired)
        ));
        assert!(matches!(
            refine_candidates(words(), &pairs(&["cat", "---"]), 5),
            Err(RefineError::Guess { .. })
        ));
        assert!(matches!(
            refine_candidates(words(), &pairs(&["crane", "GQ---"]), 5),
            Err(RefineError::Feedback { .. })
        ));
        assert!(matches!(
            refine_candidates(words(), &pairs(&["crane", "GG"]), 5),
            Err(RefineError::Feedback { .. })
        ));
        assert!(matches!(
            refine_candidates(words(), &[], 7),
            Err(RefineError::NoWords(7))
        ));
    }
}
