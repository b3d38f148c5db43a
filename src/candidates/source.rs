//! Candidate sources
//!
//! Where the initial word list comes from. The solver only sees
//! [`CandidateSource::load`].

use crate::core::Word;
use crate::error::SourceError;
use crate::wordlists::WORDS;
use crate::wordlists::loader::{load_from_file, words_from_slice};
use std::path::PathBuf;
use std::sync::Arc;

/// Supplies the initial word list for a solve session
pub trait CandidateSource {
    /// Load the words, in the order the guess policy should see them
    ///
    /// # Errors
    /// Returns `SourceError` if the list cannot be produced.
    fn load(&self) -> Result<Vec<Word>, SourceError>;
}

impl<S: CandidateSource + ?Sized> CandidateSource for &S {
    fn load(&self) -> Result<Vec<Word>, SourceError> {
        (**self).load()
    }
}

/// In-memory list, shared read-only between sessions
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    words: Arc<[Word]>,
}

impl StaticSource {
    #[must_use]
    pub fn new(words: Vec<Word>) -> Self {
        Self {
            words: words.into(),
        }
    }

    /// Build from string slices, skipping invalid entries
    #[must_use]
    pub fn from_strs(words: &[&str]) -> Self {
        Self::new(words_from_slice(words))
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }
}

impl CandidateSource for StaticSource {
    fn load(&self) -> Result<Vec<Word>, SourceError> {
        Ok(self.words.to_vec())
    }
}

/// The word list compiled into the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedSource;

impl CandidateSource for EmbeddedSource {
    fn load(&self) -> Result<Vec<Word>, SourceError> {
        Ok(words_from_slice(WORDS))
    }
}

/// A word list file, one word per line, read on every load
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CandidateSource for FileSource {
    fn load(&self) -> Result<Vec<Word>, SourceError> {
        load_from_file(&self.path)
    }
}
