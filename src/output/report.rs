//! Machine-readable solve report
//!
//! Shaped like the original service answer: the winning `guess` with its
//! per-slot `feedback` and a `solved` flag, or an `error` message.

use crate::commands::{BenchmarkResult, GuessResult, RefineResult};
use crate::core::WireLetter;
use crate::oracle::PuzzleMode;
use crate::solver::{SolveOutcome, SolveState};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SolveReport {
    pub mode: String,
    pub state: SolveState,
    pub solved: bool,
    pub guess: Option<String>,
    pub feedback: Option<Vec<WireLetter>>,
    pub rounds: usize,
    pub remaining: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SolveReport {
    #[must_use]
    pub fn from_outcome(outcome: &SolveOutcome, mode: &PuzzleMode) -> Self {
        let feedback = match (&outcome.final_guess, &outcome.final_feedback) {
            (Some(guess), Some(feedback)) => Some(feedback.to_wire(guess)),
            _ => None,
        };

        let error = match outcome.state {
            SolveState::Searching | SolveState::Solved => None,
            SolveState::Exhausted => Some("No possible words left.".to_string()),
            SolveState::RoundLimitExceeded => {
                Some(format!("Round limit reached after {} rounds.", outcome.rounds))
            }
            SolveState::OracleFailed => Some(
                outcome
                    .error
                    .as_ref()
                    .map_or_else(|| "Oracle failed.".to_string(), ToString::to_string),
            ),
        };

        Self {
            mode: mode.to_string(),
            state: outcome.state,
            solved: outcome.is_solved(),
            guess: outcome.final_guess.as_ref().map(|w| w.text().to_string()),
            feedback,
            rounds: outcome.rounds,
            remaining: outcome.remaining,
            error,
        }
    }

    /// Pretty JSON
    ///
    /// # Errors
    /// Returns the serializer error, which cannot happen for this type in practice.
    pub fn to_json(&self) -> serde_json::Result<String> {
        to_json(self)
    }
}

/// One manually scored guess, in the service's answer shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuessReport {
    pub mode: String,
    pub guess: String,
    pub feedback: Vec<WireLetter>,
    pub solved: bool,
}

impl From<&GuessResult> for GuessReport {
    fn from(result: &GuessResult) -> Self {
        Self {
            mode: result.mode.to_string(),
            guess: result.guess.text().to_string(),
            feedback: result.feedback.to_wire(&result.guess),
            solved: result.is_solved(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RefineStepReport {
    pub guess: String,
    /// Pattern form, e.g. "YGG-G"
    pub feedback: String,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Manual refine result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RefineReport {
    pub steps: Vec<RefineStepReport>,
    pub remaining: Vec<String>,
    pub suggestion: Option<String>,
}

impl From<&RefineResult> for RefineReport {
    fn from(result: &RefineResult) -> Self {
        Self {
            steps: result
                .steps
                .iter()
                .map(|step| RefineStepReport {
                    guess: step.guess.text().to_string(),
                    feedback: step.feedback.to_string(),
                    candidates_before: step.candidates_before,
                    candidates_after: step.candidates_after,
                })
                .collect(),
            remaining: result
                .remaining
                .iter()
                .map(|w| w.text().to_string())
                .collect(),
            suggestion: result.suggestion().map(|w| w.text().to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BenchmarkFailure {
    pub word: String,
    pub state: SolveState,
}

/// Benchmark summary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchmarkReport {
    pub total_words: usize,
    pub solved: usize,
    pub average_rounds: f64,
    pub min_rounds: usize,
    pub max_rounds: usize,
    /// Rounds taken -> number of solved targets
    pub distribution: BTreeMap<usize, usize>,
    pub failures: Vec<BenchmarkFailure>,
    pub seconds: f64,
}

impl From<&BenchmarkResult> for BenchmarkReport {
    fn from(result: &BenchmarkResult) -> Self {
        Self {
            total_words: result.total_words,
            solved: result.solved,
            average_rounds: result.average_rounds,
            min_rounds: result.min_rounds,
            max_rounds: result.max_rounds,
            distribution: result.distribution.clone(),
            failures: result
                .failures
                .iter()
                .map(|(word, state)| BenchmarkFailure {
                    word: word.clone(),
                    state: *state,
                })
                .collect(),
            seconds: result.duration.as_secs_f64(),
        }
    }
}

/// Pretty JSON for any report
///
/// # Errors
/// Returns the serializer error.
pub fn to_json<T: Serialize>(report: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}
