//! Candidate Store
//!
//! Holds the ordered words still consistent with every feedback received so
//! far. A set is never mutated in place: each round produces a new set from
//! the previous one, so every round stays inspectable.

mod source;

pub use source::{CandidateSource, EmbeddedSource, FileSource, StaticSource};

use crate::core::Word;
use crate::error::CandidateError;

/// Ordered sequence of still-possible secrets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSet {
    words: Vec<Word>,
}

impl CandidateSet {
    /// Build the initial set from a source's words
    ///
    /// Order is preserved; it drives the guess policy.
    ///
    /// # Errors
    /// Returns `CandidateError::EmptySource` if `words` is empty and
    /// `CandidateError::MixedLengths` if the words do not share one length.
    pub fn initialize(words: Vec<Word>) -> Result<Self, CandidateError> {
        let Some(first) = words.first() else {
            return Err(CandidateError::EmptySource);
        };

        let expected = first.len();
        if let Some(odd) = words.iter().find(|w| w.len() != expected) {
            return Err(CandidateError::MixedLengths {
                word: odd.text().to_string(),
                expected,
                actual: odd.len(),
            });
        }

        Ok(Self { words })
    }

    /// Next guess under the front-of-list policy
    ///
    /// Always the first remaining word, which keeps solves reproducible.
    ///
    /// # Errors
    /// Returns `CandidateError::NoCandidates` if the set is empty.
    pub fn pick_guess(&self) -> Result<&Word, CandidateError> {
        self.words.first().ok_or(CandidateError::NoCandidates)
    }

    /// Subsequence of words satisfying `predicate`, relative order preserved
    #[must_use]
    pub fn apply<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&Word) -> bool,
    {
        Self {
            words: self.words.iter().filter(|w| predicate(w)).cloned().collect(),
        }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }
}

impl<'a> IntoIterator for &'a CandidateSet {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn set(words: &[&str]) -> CandidateSet {
        CandidateSet::initialize(words_from_slice(words)).unwrap()
    }

    #[test]
    fn initialize_rejects_empty() {
        assert_eq!(
            CandidateSet::initialize(Vec::new()),
            Err(CandidateError::EmptySource)
        );
    }

    #[test]
    fn initialize_rejects_mixed_lengths() {
        let words = words_from_slice(&["crane", "cranes"]);
        assert_eq!(
            CandidateSet::initialize(words),
            Err(CandidateError::MixedLengths {
                word: "cranes".to_string(),
                expected: 5,
                actual: 6,
            })
        );
    }

    #[test]
    fn pick_guess_takes_front_of_list() {
        let candidates = set(&["slate", "crane", "trace"]);
        assert_eq!(candidates.pick_guess().unwrap().text(), "slate");
    }

    #[test]
    fn pick_guess_on_empty_set_fails() {
        let empty = set(&["crane"]).apply(|_| false);
        assert!(empty.is_empty());
        assert_eq!(empty.pick_guess(), Err(CandidateError::NoCandidates));
    }

    #[test]
    fn apply_preserves_order_and_source() {
        let candidates = set(&["crane", "slate", "trace", "grace"]);
        let filtered = candidates.apply(|w| w.letter_count(b'c') > 0);

        let texts: Vec<&str> = filtered.iter().map(Word::text).collect();
        assert_eq!(texts, ["crane", "trace", "grace"]);
        // The original round is untouched
        assert_eq!(candidates.len(), 4);
    }

    #[test]
    fn contains_checks_membership() {
        let candidates = set(&["crane", "slate"]);
        assert!(candidates.contains(&Word::new("slate").unwrap()));
        assert!(!candidates.contains(&Word::new("trace").unwrap()));
    }
}
