//! Per-letter feedback for a guess
//!
//! A [`Feedback`] is one [`LetterResult`] per position of a guess:
//! - `Correct` = letter is at this exact position in the secret (green)
//! - `Present` = letter is in the secret but elsewhere (yellow)
//! - `Absent` = no unmatched copy of the letter is left in the secret (gray)
//!
//! Feedback arrives either from an oracle's JSON response (see
//! [`Feedback::from_wire`]) or from [`Feedback::score`], the reference scoring
//! used by local oracles and tests.

use super::Word;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Verdict for one position of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LetterResult {
    Correct,
    Present,
    Absent,
}

impl LetterResult {
    /// Parse a single pattern character
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for correct
    /// - 'Y'/'y'/🟨 for present
    /// - '-'/'_'/'X'/'x'/'B'/'b'/⬜/⬛ for absent
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | 'X' | 'x' | 'B' | 'b' | '⬜' | '⬛' => Some(Self::Absent),
            _ => None,
        }
    }

    /// Pattern character used by `Display`
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }

    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Errors raised while building or validating feedback
#[derive(Debug, Error)]
pub enum FeedbackError {
    #[error("feedback has {feedback} positions but the guess has {guess} letters")]
    LengthMismatch { guess: usize, feedback: usize },
    #[error("cannot score a {guess}-letter guess against a {secret}-letter secret")]
    SizeMismatch { guess: usize, secret: usize },
    #[error("invalid pattern character {0:?}")]
    InvalidPatternChar(char),
    #[error("malformed oracle response: {0}")]
    Wire(#[from] serde_json::Error),
    #[error("slot {slot} is outside a {size}-letter guess")]
    SlotOutOfRange { slot: usize, size: usize },
    #[error("slot {0} reported more than once")]
    DuplicateSlot(usize),
    #[error("slot {slot} echoes letter {reported:?}, guess has {expected:?}")]
    LetterMismatch {
        slot: usize,
        expected: char,
        reported: String,
    },
}

/// One slot of the oracle wire format
///
/// The scoring service answers with a JSON array of these, e.g.
/// `[{"slot":0,"guess":"c","result":"absent"}, ...]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireLetter {
    pub slot: usize,
    pub guess: String,
    pub result: LetterResult,
}

/// Feedback for a whole guess, positionally aligned with it
///
/// Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Feedback(Vec<LetterResult>);

impl Feedback {
    #[must_use]
    pub const fn new(results: Vec<LetterResult>) -> Self {
        Self(results)
    }

    /// All-correct feedback of the given length
    #[must_use]
    pub fn solved(size: usize) -> Self {
        Self(vec![LetterResult::Correct; size])
    }

    #[inline]
    #[must_use]
    pub fn results(&self) -> &[LetterResult] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when every position is `Correct`
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&r| r == LetterResult::Correct)
    }

    /// Score `guess` against `secret` with official Wordle rules
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and remove them from the letter pool
    /// 2. Second pass: left to right, mark `Present` while the pool still holds
    ///    an unmatched copy of the letter; everything else is `Absent`
    ///
    /// # Errors
    /// Returns `FeedbackError::SizeMismatch` if the words differ in length.
    ///
    /// # Examples
    /// ```
    /// use wordle_autosolve::core::{Feedback, Word};
    ///
    /// let guess = Word::new("speed").unwrap();
    /// let secret = Word::new("abode").unwrap();
    /// let feedback = Feedback::score(&guess, &secret).unwrap();
    ///
    /// // Only one E is credited; the other is absent
    /// assert_eq!(feedback.to_string(), "--Y-Y");
    /// ```
    pub fn score(guess: &Word, secret: &Word) -> Result<Self, FeedbackError> {
        if guess.len() != secret.len() {
            return Err(FeedbackError::SizeMismatch {
                guess: guess.len(),
                secret: secret.len(),
            });
        }

        let mut results = vec![LetterResult::Absent; guess.len()];
        let mut pool = secret.letter_counts();

        for (i, (&g, &s)) in guess.letters().iter().zip(secret.letters()).enumerate() {
            if g == s {
                results[i] = LetterResult::Correct;
                if let Some(count) = pool.get_mut(&g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        for (i, &g) in guess.letters().iter().enumerate() {
            if results[i] == LetterResult::Correct {
                continue;
            }
            if let Some(count) = pool.get_mut(&g)
                && *count > 0
            {
                results[i] = LetterResult::Present;
                *count -= 1;
            }
        }

        Ok(Self(results))
    }

    /// Parse a pattern string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// # Errors
    /// Returns `FeedbackError::InvalidPatternChar` on the first unknown character.
    ///
    /// # Examples
    /// ```
    /// use wordle_autosolve::core::Feedback;
    ///
    /// let p1 = Feedback::parse("GYX-G").unwrap();
    /// let p2 = Feedback::parse("🟩🟨⬜⬜🟩").unwrap();
    /// assert_eq!(p1, p2);
    /// ```
    pub fn parse(pattern: &str) -> Result<Self, FeedbackError> {
        pattern
            .trim()
            .chars()
            .map(|ch| LetterResult::from_char(ch).ok_or(FeedbackError::InvalidPatternChar(ch)))
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    /// Parse the oracle's JSON response for `guess`
    ///
    /// Slots may arrive in any order; they are placed by `slot`. Every slot of
    /// the guess must be reported exactly once and echo the guessed letter.
    ///
    /// # Errors
    /// Returns `FeedbackError` for invalid JSON, unknown results, missing,
    /// repeated or out-of-range slots, and letters that disagree with `guess`.
    pub fn from_wire(json: &str, guess: &Word) -> Result<Self, FeedbackError> {
        let letters: Vec<WireLetter> = serde_json::from_str(json)?;
        Self::from_wire_letters(&letters, guess)
    }

    /// Same as [`Feedback::from_wire`] for an already decoded response
    ///
    /// # Errors
    /// See [`Feedback::from_wire`].
    pub fn from_wire_letters(letters: &[WireLetter], guess: &Word) -> Result<Self, FeedbackError> {
        let size = guess.len();
        if letters.len() != size {
            return Err(FeedbackError::LengthMismatch {
                guess: size,
                feedback: letters.len(),
            });
        }

        let mut slots: Vec<Option<LetterResult>> = vec![None; size];
        for letter in letters {
            let slot = letter.slot;
            if slot >= size {
                return Err(FeedbackError::SlotOutOfRange { slot, size });
            }
            let expected = char::from(guess.letter_at(slot));
            if !letter.guess.eq_ignore_ascii_case(&expected.to_string()) {
                return Err(FeedbackError::LetterMismatch {
                    slot,
                    expected,
                    reported: letter.guess.clone(),
                });
            }
            if slots[slot].replace(letter.result).is_some() {
                return Err(FeedbackError::DuplicateSlot(slot));
            }
        }

        // Lengths match and no slot repeats, so every slot is filled
        Ok(Self(slots.into_iter().flatten().collect()))
    }

    /// Encode in the oracle wire shape, pairing each slot with `guess`'s letter
    #[must_use]
    pub fn to_wire(&self, guess: &Word) -> Vec<WireLetter> {
        self.0
            .iter()
            .zip(guess.letters())
            .enumerate()
            .map(|(slot, (&result, &letter))| WireLetter {
                slot,
                guess: char::from(letter).to_string(),
                result,
            })
            .collect()
    }

    /// Convert to emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|r| r.to_emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for result in &self.0 {
            write!(f, "{}", result.to_char())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Feedback {
    type Err = FeedbackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(guess: &str, secret: &str) -> String {
        let guess = Word::new(guess).unwrap();
        let secret = Word::new(secret).unwrap();
        Feedback::score(&guess, &secret).unwrap().to_string()
    }

    #[test]
    fn score_all_absent() {
        assert_eq!(score("abcde", "fghij"), "-----");
    }

    #[test]
    fn score_all_correct() {
        for word in ["crane", "slate", "zzzzz", "aaaaa", "cat"] {
            let w = Word::new(word).unwrap();
            assert!(Feedback::score(&w, &w).unwrap().is_solved());
        }
    }

    #[test]
    fn score_real_example() {
        // R is absent: SLATE has no R
        assert_eq!(score("crane", "slate"), "--G-G");
    }

    #[test]
    fn score_duplicate_guess_letter_single_in_secret() {
        // First E takes the only E in ABODE, the second is absent
        assert_eq!(score("speed", "abode"), "--Y-Y");
    }

    #[test]
    fn score_green_takes_priority_over_earlier_yellow() {
        // ROBOT vs FLOOR: second O is green, first O yellow
        assert_eq!(score("robot", "floor"), "YY-G-");
        // The exact match at the end consumes the only E; earlier Es are absent
        assert_eq!(score("eerie", "crane"), "--Y-G");
    }

    #[test]
    fn score_both_duplicates_present() {
        assert_eq!(score("speed", "erase"), "Y-YY-");
    }

    #[test]
    fn score_length_mismatch() {
        let guess = Word::new("crane").unwrap();
        let secret = Word::new("cranes").unwrap();
        assert!(matches!(
            Feedback::score(&guess, &secret),
            Err(FeedbackError::SizeMismatch {
                guess: 5,
                secret: 6
            })
        ));
    }

    #[test]
    fn parse_pattern_variants() {
        let p1 = Feedback::parse("GY-x_").unwrap();
        let p2 = Feedback::parse("🟩🟨⬜⬛⬜").unwrap();
        assert_eq!(p1, p2);
        assert_eq!(p1.to_string(), "GY---");
        assert_eq!(p1.to_emoji(), "🟩🟨⬜⬜⬜");
    }

    #[test]
    fn parse_pattern_invalid() {
        assert!(matches!(
            Feedback::parse("GYQ--"),
            Err(FeedbackError::InvalidPatternChar('Q'))
        ));
    }

    #[test]
    fn solved_requires_non_empty() {
        assert!(!Feedback::new(Vec::new()).is_solved());
        assert!(Feedback::solved(5).is_solved());
        assert!(!Feedback::parse("GGGGY").unwrap().is_solved());
    }

    #[test]
    fn wire_parses_out_of_order_slots() {
        let guess = Word::new("crane").unwrap();
        let json = r#"[
            {"slot": 4, "guess": "e", "result": "correct"},
            {"slot": 0, "guess": "c", "result": "absent"},
            {"slot": 1, "guess": "r", "result": "present"},
            {"slot": 2, "guess": "a", "result": "correct"},
            {"slot": 3, "guess": "n", "result": "absent"}
        ]"#;
        let feedback = Feedback::from_wire(json, &guess).unwrap();
        assert_eq!(feedback.to_string(), "-YG-G");
    }

    #[test]
    fn wire_accepts_uppercase_letters() {
        let guess = Word::new("cat").unwrap();
        let json = r#"[{"slot":0,"guess":"C","result":"correct"},
                       {"slot":1,"guess":"A","result":"correct"},
                       {"slot":2,"guess":"T","result":"correct"}]"#;
        assert!(Feedback::from_wire(json, &guess).unwrap().is_solved());
    }

    #[test]
    fn wire_rejects_malformed_responses() {
        let guess = Word::new("cat").unwrap();

        let unknown_result = r#"[{"slot":0,"guess":"c","result":"green"},
                                 {"slot":1,"guess":"a","result":"absent"},
                                 {"slot":2,"guess":"t","result":"absent"}]"#;
        assert!(matches!(
            Feedback::from_wire(unknown_result, &guess),
            Err(FeedbackError::Wire(_))
        ));

        let short = r#"[{"slot":0,"guess":"c","result":"absent"}]"#;
        assert!(matches!(
            Feedback::from_wire(short, &guess),
            Err(FeedbackError::LengthMismatch { .. })
        ));

        let duplicate = r#"[{"slot":0,"guess":"c","result":"absent"},
                            {"slot":0,"guess":"c","result":"absent"},
                            {"slot":2,"guess":"t","result":"absent"}]"#;
        assert!(matches!(
            Feedback::from_wire(duplicate, &guess),
            Err(FeedbackError::DuplicateSlot(0))
        ));

        let out_of_range = r#"[{"slot":0,"guess":"c","result":"absent"},
                               {"slot":1,"guess":"a","result":"absent"},
                               {"slot":7,"guess":"t","result":"absent"}]"#;
        assert!(matches!(
            Feedback::from_wire(out_of_range, &guess),
            Err(FeedbackError::SlotOutOfRange { slot: 7, size: 3 })
        ));

        let wrong_letter = r#"[{"slot":0,"guess":"c","result":"absent"},
                               {"slot":1,"guess":"o","result":"absent"},
                               {"slot":2,"guess":"t","result":"absent"}]"#;
        assert!(matches!(
            Feedback::from_wire(wrong_letter, &guess),
            Err(FeedbackError::LetterMismatch { slot: 1, .. })
        ));

        assert!(Feedback::from_wire("{}", &guess).is_err());
    }

    #[test]
    fn wire_encoding_matches_response_shape() {
        let guess = Word::new("cat").unwrap();
        let feedback = Feedback::parse("G-Y").unwrap();
        let json = serde_json::to_string(&feedback.to_wire(&guess)).unwrap();
        assert_eq!(
            json,
            r#"[{"slot":0,"guess":"c","result":"correct"},{"slot":1,"guess":"a","result":"absent"},{"slot":2,"guess":"t","result":"present"}]"#
        );
        assert_eq!(Feedback::from_wire(&json, &guess).unwrap(), feedback);
    }
}
