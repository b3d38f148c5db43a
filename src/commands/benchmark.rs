//! Benchmark command
//!
//! Solves every word of a list as an explicit target. Sessions share no state,
//! so they run in parallel.

use crate::core::Word;
use crate::error::SolveResult;
use crate::oracle::{FeedbackOracle, PuzzleMode};
use crate::solver::{SolveConfig, SolveSession, SolveState};
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Settings for a benchmark run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchmarkConfig {
    pub size: usize,
    pub max_rounds: Option<usize>,
    /// Only solve the first `limit` targets
    pub limit: Option<usize>,
    pub show_progress: bool,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            size: crate::solver::DEFAULT_SIZE,
            max_rounds: None,
            limit: None,
            show_progress: true,
        }
    }
}

/// Result of a benchmark run
#[derive(Debug)]
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub total_rounds: usize,
    pub average_rounds: f64,
    pub min_rounds: usize,
    pub max_rounds: usize,
    /// Rounds taken -> number of solved targets
    pub distribution: BTreeMap<usize, usize>,
    /// Targets that did not end `Solved`
    pub failures: Vec<(String, SolveState)>,
    pub duration: Duration,
    pub words_per_second: f64,
}

fn progress_bar(len: usize, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb
}

/// Solve each `size`-letter word of `words` as a target
///
/// Every session starts from the full list in its original order.
///
/// # Errors
///
/// Returns `SolveError::InvalidConfig` before any target is attempted if the
/// size or round limit is unusable.
pub fn run_benchmark<O>(
    words: &[Word],
    oracle: &O,
    config: &BenchmarkConfig,
) -> SolveResult<BenchmarkResult>
where
    O: FeedbackOracle + Sync + ?Sized,
{
    SolveConfig::new(PuzzleMode::Daily)
        .with_size(config.size)
        .with_max_rounds(config.max_rounds)
        .validate()?;

    let pool: Vec<Word> = words
        .iter()
        .filter(|w| w.len() == config.size)
        .cloned()
        .collect();
    let targets: Vec<&Word> = pool
        .iter()
        .take(config.limit.unwrap_or(pool.len()))
        .collect();

    let pb = progress_bar(targets.len(), config.show_progress);
    let start = Instant::now();

    let results: SolveResult<Vec<_>> = targets
        .par_iter()
        .map(|&target| -> SolveResult<(String, SolveState, usize)> {
            let mode = PuzzleMode::Target {
                word: target.clone(),
            };
            let session_config = SolveConfig::new(mode)
                .with_size(config.size)
                .with_max_rounds(config.max_rounds);

            let outcome = SolveSession::new(session_config, pool.clone())?.run(oracle);
            debug!("{target}: {:?} in {} rounds", outcome.state, outcome.rounds);

            pb.set_message(target.text().to_uppercase());
            pb.inc(1);
            Ok((target.text().to_string(), outcome.state, outcome.rounds))
        })
        .collect();

    pb.finish_and_clear();
    let results = results?;
    let duration = start.elapsed();

    let mut distribution = BTreeMap::new();
    let mut failures = Vec::new();
    let mut total_rounds = 0;
    let mut min_rounds = usize::MAX;
    let mut max_rounds = 0;

    for (word, state, rounds) in results {
        if state == SolveState::Solved {
            total_rounds += rounds;
            min_rounds = min_rounds.min(rounds);
            max_rounds = max_rounds.max(rounds);
            *distribution.entry(rounds).or_insert(0) += 1;
        } else {
            failures.push((word, state));
        }
    }

    let total_words = targets.len();
    let solved = total_words - failures.len();
    let secs = duration.as_secs_f64();

    Ok(BenchmarkResult {
        total_words,
        solved,
        total_rounds,
        average_rounds: if solved == 0 {
            0.0
        } else {
            total_rounds as f64 / solved as f64
        },
        min_rounds: if solved == 0 { 0 } else { min_rounds },
        max_rounds,
        distribution,
        failures,
        duration,
        words_per_second: if secs > 0.0 {
            total_words as f64 / secs
        } else {
            0.0
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SolveError;
    use crate::oracle::LocalOracle;
    use crate::wordlists::WORDS;
    use crate::wordlists::loader::words_from_slice;

    fn quiet(limit: Option<usize>) -> BenchmarkConfig {
        BenchmarkConfig {
            limit,
            show_progress: false,
            ..BenchmarkConfig::default()
        }
    }

    #[test]
    fn benchmark_solves_every_target() {
        let words = words_from_slice(&WORDS[..60]);
        let oracle = LocalOracle::new(Vec::new());

        let result = run_benchmark(&words, &oracle, &quiet(None)).unwrap();

        assert_eq!(result.total_words, 60);
        assert_eq!(result.solved, 60);
        assert!(result.failures.is_empty());
        assert_eq!(result.min_rounds, 1);
        assert!(result.average_rounds >= 1.0);
        assert!(result.average_rounds <= result.max_rounds as f64);
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let words = words_from_slice(&WORDS[..40]);
        let oracle = LocalOracle::new(Vec::new());

        let result = run_benchmark(&words, &oracle, &quiet(Some(15))).unwrap();

        assert_eq!(result.total_words, 15);
        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.solved);
        let weighted: usize = result.distribution.iter().map(|(r, n)| r * n).sum();
        assert_eq!(weighted, result.total_rounds);
    }

    #[test]
    fn benchmark_reports_round_limit_failures() {
        let words = words_from_slice(&["crane", "slate", "trace"]);
        let oracle = LocalOracle::new(Vec::new());
        let config = BenchmarkConfig {
            max_rounds: Some(1),
            ..quiet(None)
        };

        let result = run_benchmark(&words, &oracle, &config).unwrap();

        // Only the first word is found in a single round
        assert_eq!(result.solved, 1);
        assert_eq!(result.failures.len(), 2);
        assert!(
            result
                .failures
                .iter()
                .all(|(_, state)| *state == SolveState::RoundLimitExceeded)
        );
    }

    #[test]
    fn benchmark_empty_word_list() {
        let oracle = LocalOracle::new(Vec::new());
        let result = run_benchmark(&[], &oracle, &quiet(None)).unwrap();

        assert_eq!(result.total_words, 0);
        assert_eq!(result.solved, 0);
        assert_eq!(result.min_rounds, 0);
        assert!(result.distribution.is_empty());
    }

    #[test]
    fn benchmark_rejects_zero_round_limit_up_front() {
        let words = words_from_slice(&["crane", "slate", "trace"]);
        let oracle = LocalOracle::new(Vec::new());
        let config = BenchmarkConfig {
            max_rounds: Some(0),
            ..quiet(None)
        };

        let result = run_benchmark(&words, &oracle, &config);

        assert!(matches!(result, Err(SolveError::InvalidConfig(_))));
    }

    #[test]
    fn benchmark_rejects_zero_size() {
        let oracle = LocalOracle::new(Vec::new());
        let config = BenchmarkConfig {
            size: 0,
            ..quiet(None)
        };

        assert!(matches!(
            run_benchmark(&[], &oracle, &config),
            Err(SolveError::InvalidConfig(_))
        ));
    }
}
