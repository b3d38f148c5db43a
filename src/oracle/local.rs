//! In-process reference oracle
//!
//! Scores guesses with [`Feedback::score`] instead of calling the remote
//! service. Secrets for `Daily` and `Random` come from an answer pool.

use super::{FeedbackOracle, OracleError, PuzzleMode};
use crate::core::{Feedback, Word};
use chrono::{Datelike, Local, NaiveDate};
use log::trace;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;

/// Oracle that knows its secrets
#[derive(Debug, Clone)]
pub struct LocalOracle {
    pool: Arc<[Word]>,
    date: Option<NaiveDate>,
}

impl LocalOracle {
    /// Create an oracle drawing `Daily`/`Random` secrets from `pool`
    #[must_use]
    pub fn new(pool: Vec<Word>) -> Self {
        Self {
            pool: pool.into(),
            date: None,
        }
    }

    /// Fix the date used for `Daily` instead of today's local date
    #[must_use]
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// The secret this oracle scores against for `mode` and `size`
    ///
    /// # Errors
    /// Returns `OracleError::InvalidRequest` if a target has the wrong length
    /// or the pool holds no word of `size` letters.
    pub fn secret_for(&self, mode: &PuzzleMode, size: usize) -> Result<Word, OracleError> {
        match mode {
            PuzzleMode::Target { word } => {
                if word.len() == size {
                    Ok(word.clone())
                } else {
                    Err(OracleError::InvalidRequest(format!(
                        "target has {} letters, puzzle size is {size}",
                        word.len()
                    )))
                }
            }
            PuzzleMode::Random { seed } => self.pick(*seed, size),
            PuzzleMode::Daily => {
                let date = self.date.unwrap_or_else(|| Local::now().date_naive());
                let day = u64::try_from(date.num_days_from_ce()).unwrap_or_default();
                self.pick(day, size)
            }
        }
    }

    fn pick(&self, seed: u64, size: usize) -> Result<Word, OracleError> {
        let sized: Vec<&Word> = self.pool.iter().filter(|w| w.len() == size).collect();
        if sized.is_empty() {
            return Err(OracleError::InvalidRequest(format!(
                "no {size}-letter puzzles available"
            )));
        }

        let mut rng = StdRng::seed_from_u64(seed);
        let index = rng.random_range(0..sized.len());
        trace!("seed {seed} selects puzzle {index} of {}", sized.len());
        Ok(sized[index].clone())
    }
}

impl FeedbackOracle for LocalOracle {
    fn score(&self, guess: &Word, mode: &PuzzleMode, size: usize) -> Result<Feedback, OracleError> {
        if guess.len() != size {
            return Err(OracleError::InvalidRequest(format!(
                "guess has {} letters, puzzle size is {size}",
                guess.len()
            )));
        }
        let secret = self.secret_for(mode, size)?;
        Ok(Feedback::score(guess, &secret)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn oracle() -> LocalOracle {
        LocalOracle::new(words_from_slice(&["crane", "slate", "trace", "cat", "dog"]))
    }

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn target_mode_scores_against_target() {
        let mode = PuzzleMode::Target {
            word: word("trace"),
        };
        let feedback = oracle().score(&word("crane"), &mode, 5).unwrap();
        assert_eq!(feedback.to_string(), "YGG-G");

        let solved = oracle().score(&word("trace"), &mode, 5).unwrap();
        assert!(solved.is_solved());
    }

    #[test]
    fn target_of_wrong_size_is_rejected() {
        let mode = PuzzleMode::Target { word: word("cat") };
        assert!(matches!(
            oracle().score(&word("crane"), &mode, 5),
            Err(OracleError::InvalidRequest(_))
        ));
    }

    #[test]
    fn guess_of_wrong_size_is_rejected() {
        assert!(matches!(
            oracle().score(&word("cat"), &PuzzleMode::Daily, 5),
            Err(OracleError::InvalidRequest(_))
        ));
    }

    #[test]
    fn random_mode_is_reproducible() {
        let oracle = oracle();
        let mode = PuzzleMode::Random { seed: 42 };
        let first = oracle.secret_for(&mode, 5).unwrap();
        for _ in 0..5 {
            assert_eq!(oracle.secret_for(&mode, 5).unwrap(), first);
        }
        assert_eq!(first.len(), 5);
    }

    #[test]
    fn random_mode_respects_size() {
        let secret = oracle()
            .secret_for(&PuzzleMode::Random { seed: 3 }, 3)
            .unwrap();
        assert!(secret.text() == "cat" || secret.text() == "dog");
    }

    #[test]
    fn daily_mode_is_stable_for_a_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let a = oracle().with_date(date);
        let b = oracle().with_date(date);
        assert_eq!(
            a.secret_for(&PuzzleMode::Daily, 5).unwrap(),
            b.secret_for(&PuzzleMode::Daily, 5).unwrap()
        );
    }

    #[test]
    fn missing_size_in_pool_is_rejected() {
        assert!(matches!(
            oracle().secret_for(&PuzzleMode::Daily, 7),
            Err(OracleError::InvalidRequest(_))
        ));
    }
}
