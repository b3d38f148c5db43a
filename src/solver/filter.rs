//! Constraint Filter
//!
//! Turns one `(guess, feedback)` pair into a fully resolved constraint table
//! and prunes a [`CandidateSet`] with it.
//!
//! # Rules
//! 1. `Correct` at `i`: the candidate has `guess[i]` at `i`.
//! 2. `Present` at `i`: the candidate does not have `guess[i]` at `i` and
//!    contains it at least `required_count` times.
//! 3. `Absent` at `i`: the candidate does not have `guess[i]` at `i`, and the
//!    letter is capped at exactly `required_count` occurrences.
//!
//! `required_count(letter)` is the number of `Correct` and `Present` marks
//! the letter received across the whole guess. Rule 3 is only evaluated
//! against that complete table, so a doubled guess letter with a single copy
//! in the secret keeps candidates holding exactly one copy.

use crate::candidates::CandidateSet;
use crate::core::{Feedback, FeedbackError, LetterResult, Word};
use rustc_hash::FxHashMap;

/// Occurrence bounds for one letter of the guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct LetterBound {
    /// Number of `Correct` + `Present` marks
    required: usize,
    /// At least one mark was `Absent`: `required` is also the maximum
    capped: bool,
}

/// Constraints derived from a single scored guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraints {
    pinned: Vec<Option<u8>>,
    banned: Vec<Vec<u8>>,
    bounds: FxHashMap<u8, LetterBound>,
}

impl Constraints {
    /// Resolve the constraint table for `guess` scored as `feedback`
    ///
    /// # Errors
    /// Returns `FeedbackError::LengthMismatch` if the feedback is not aligned
    /// with the guess.
    pub fn derive(guess: &Word, feedback: &Feedback) -> Result<Self, FeedbackError> {
        if guess.len() != feedback.len() {
            return Err(FeedbackError::LengthMismatch {
                guess: guess.len(),
                feedback: feedback.len(),
            });
        }

        let size = guess.len();
        let mut pinned = vec![None; size];
        let mut banned = vec![Vec::new(); size];
        let mut bounds: FxHashMap<u8, LetterBound> = FxHashMap::default();

        for (i, (&letter, &result)) in guess.letters().iter().zip(feedback.results()).enumerate() {
            let bound = bounds.entry(letter).or_default();
            match result {
                LetterResult::Correct => {
                    pinned[i] = Some(letter);
                    bound.required += 1;
                }
                LetterResult::Present => {
                    banned[i].push(letter);
                    bound.required += 1;
                }
                LetterResult::Absent => {
                    banned[i].push(letter);
                    bound.capped = true;
                }
            }
        }

        Ok(Self {
            pinned,
            banned,
            bounds,
        })
    }

    /// Number of positions the constraints cover
    #[must_use]
    pub fn size(&self) -> usize {
        self.pinned.len()
    }

    /// How many copies of `letter` a consistent candidate must hold
    #[must_use]
    pub fn required_count(&self, letter: u8) -> usize {
        self.bounds.get(&letter).map_or(0, |b| b.required)
    }

    /// Whether `candidate` could be the secret given this feedback
    ///
    /// Candidates of a different length are never permitted.
    #[must_use]
    pub fn permits(&self, candidate: &Word) -> bool {
        if candidate.len() != self.size() {
            return false;
        }

        let letters = candidate.letters();

        let positions_ok = letters
            .iter()
            .zip(self.pinned.iter().zip(&self.banned))
            .all(|(&ch, (pin, banned))| match pin {
                Some(required) => ch == *required,
                None => !banned.contains(&ch),
            });
        if !positions_ok {
            return false;
        }

        self.bounds.iter().all(|(&letter, bound)| {
            let count = candidate.letter_count(letter);
            if bound.capped {
                count == bound.required
            } else {
                count >= bound.required
            }
        })
    }
}

/// Prune `candidates` with one scored guess
///
/// Pure: never consults an oracle, never grows the set, and re-applying the
/// same pair is a no-op.
///
/// # Errors
/// Returns `FeedbackError::LengthMismatch` if `feedback` is not aligned with
/// `guess`.
///
/// # Examples
/// ```
/// use wordle_autosolve::candidates::CandidateSet;
/// use wordle_autosolve::core::{Feedback, Word};
/// use wordle_autosolve::solver::refine;
/// use wordle_autosolve::wordlists::loader::words_from_slice;
///
/// let set = CandidateSet::initialize(words_from_slice(&["crane", "slate", "trace"])).unwrap();
/// let guess = Word::new("crane").unwrap();
/// let feedback = Feedback::parse("YGG-G").unwrap();
///
/// let refined = refine(&set, &guess, &feedback).unwrap();
/// assert_eq!(refined.words()[0].text(), "trace");
/// assert_eq!(refined.len(), 1);
/// ```
pub fn refine(
    candidates: &CandidateSet,
    guess: &Word,
    feedback: &Feedback,
) -> Result<CandidateSet, FeedbackError> {
    let constraints = Constraints::derive(guess, feedback)?;
    Ok(candidates.apply(|word| constraints.permits(word)))
}
