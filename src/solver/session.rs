//! Solver Loop
//!
//! Guess, score, refine, repeat. A [`SolveSession`] owns its candidate set
//! and history exclusively, so independent sessions can run side by side.
//!
//! States: `Searching` until one of the terminal states is reached:
//! - `Solved`: the oracle answered all-correct
//! - `Exhausted`: filtering left no candidate
//! - `OracleFailed`: the oracle call failed or returned unusable feedback
//! - `RoundLimitExceeded`: the round guard tripped

use super::filter::refine;
use crate::candidates::{CandidateSet, CandidateSource};
use crate::core::{Feedback, Word};
use crate::error::{CandidateError, SolveError, SolveResult};
use crate::oracle::{FeedbackOracle, OracleError, PuzzleMode};
use log::{debug, info, warn};
use serde::Serialize;

/// Word length of the classic puzzle
pub const DEFAULT_SIZE: usize = 5;

/// Configuration for one solve
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveConfig {
    pub size: usize,
    pub mode: PuzzleMode,
    /// Maximum oracle rounds; `None` uses the initial candidate count
    pub max_rounds: Option<usize>,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(mode: PuzzleMode) -> Self {
        Self {
            size: DEFAULT_SIZE,
            mode,
            max_rounds: None,
        }
    }

    #[must_use]
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    #[must_use]
    pub fn with_max_rounds(mut self, max_rounds: Option<usize>) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    /// Check size and round limit, and that a target matches the size
    ///
    /// # Errors
    /// Returns `SolveError::InvalidConfig` describing the first problem found.
    pub fn validate(&self) -> SolveResult<()> {
        if self.size == 0 {
            return Err(SolveError::InvalidConfig("size must be at least 1".into()));
        }
        if self.max_rounds == Some(0) {
            return Err(SolveError::InvalidConfig(
                "max rounds must be at least 1".into(),
            ));
        }
        if let PuzzleMode::Target { word } = &self.mode
            && word.len() != self.size
        {
            return Err(SolveError::InvalidConfig(format!(
                "target {word} has {} letters, size is {}",
                word.len(),
                self.size
            )));
        }
        Ok(())
    }
}

impl Default for SolveConfig {
    fn default() -> Self {
        Self::new(PuzzleMode::Daily)
    }
}

/// Where a session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SolveState {
    Searching,
    Solved,
    Exhausted,
    OracleFailed,
    RoundLimitExceeded,
}

impl SolveState {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Searching)
    }
}

/// One completed guess/feedback exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    /// 1-based round number
    pub number: usize,
    pub guess: Word,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Final result of a solve
#[derive(Debug)]
pub struct SolveOutcome {
    pub state: SolveState,
    /// Last guess submitted to the oracle, answered or not
    pub final_guess: Option<Word>,
    /// Feedback for `final_guess`, if the oracle produced any
    pub final_feedback: Option<Feedback>,
    /// Rounds that received feedback
    pub rounds: usize,
    pub history: Vec<Round>,
    /// Candidates left when the session ended
    pub remaining: usize,
    /// Set when `state` is `OracleFailed`
    pub error: Option<OracleError>,
}

impl SolveOutcome {
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        matches!(self.state, SolveState::Solved)
    }
}

/// State of one solve in progress
#[derive(Debug)]
pub struct SolveSession {
    config: SolveConfig,
    candidates: CandidateSet,
    history: Vec<Round>,
    state: SolveState,
    round_limit: usize,
    pending_guess: Option<Word>,
    error: Option<OracleError>,
}

impl SolveSession {
    /// Start a session from an initial word list
    ///
    /// Words whose length differs from `config.size` are dropped first.
    ///
    /// # Errors
    /// Returns `SolveError::InvalidConfig` for a zero size or round limit or
    /// a target of the wrong length, and `SolveError::EmptySource` if no word
    /// of the puzzle size remains.
    pub fn new(config: SolveConfig, words: Vec<Word>) -> SolveResult<Self> {
        config.validate()?;

        let total = words.len();
        let sized: Vec<Word> = words.into_iter().filter(|w| w.len() == config.size).collect();
        if sized.len() < total {
            debug!(
                "dropped {} words that are not {} letters",
                total - sized.len(),
                config.size
            );
        }

        let candidates = CandidateSet::initialize(sized).map_err(|e| match e {
            CandidateError::EmptySource => SolveError::EmptySource { size: config.size },
            other => other.into(),
        })?;
        let round_limit = config.max_rounds.unwrap_or(candidates.len());

        debug!(
            "session started: mode {}, size {}, {} candidates, round limit {round_limit}",
            config.mode,
            config.size,
            candidates.len()
        );

        Ok(Self {
            config,
            candidates,
            history: Vec::new(),
            state: SolveState::Searching,
            round_limit,
            pending_guess: None,
            error: None,
        })
    }

    /// Start a session from a candidate source
    ///
    /// # Errors
    /// Returns `SolveError::Source` if the source fails to load, otherwise
    /// see [`SolveSession::new`].
    pub fn from_source<S>(config: SolveConfig, source: &S) -> SolveResult<Self>
    where
        S: CandidateSource + ?Sized,
    {
        let words = source.load()?;
        Self::new(config, words)
    }

    #[must_use]
    pub const fn state(&self) -> SolveState {
        self.state
    }

    #[must_use]
    pub const fn config(&self) -> &SolveConfig {
        &self.config
    }

    #[must_use]
    pub const fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    #[must_use]
    pub fn history(&self) -> &[Round] {
        &self.history
    }

    /// Play one round and return the resulting state
    ///
    /// Does nothing once the session is terminal.
    pub fn step<O>(&mut self, oracle: &O) -> SolveState
    where
        O: FeedbackOracle + ?Sized,
    {
        if self.state.is_terminal() {
            return self.state;
        }

        if self.history.len() >= self.round_limit {
            warn!(
                "round limit {} reached with {} candidates left",
                self.round_limit,
                self.candidates.len()
            );
            self.state = SolveState::RoundLimitExceeded;
            return self.state;
        }

        let guess = match self.candidates.pick_guess() {
            Ok(guess) => guess.clone(),
            Err(_) => {
                self.state = SolveState::Exhausted;
                return self.state;
            }
        };
        let number = self.history.len() + 1;
        let candidates_before = self.candidates.len();
        self.pending_guess = Some(guess.clone());

        let feedback = match oracle.score(&guess, &self.config.mode, self.config.size) {
            Ok(feedback) => feedback,
            Err(e) => return self.fail(number, e),
        };

        let next = match refine(&self.candidates, &guess, &feedback) {
            Ok(next) => next,
            Err(e) => return self.fail(number, e.into()),
        };

        debug!(
            "round {number}: {guess} -> {feedback}, candidates {candidates_before} -> {}",
            next.len()
        );

        let solved = feedback.is_solved();
        self.history.push(Round {
            number,
            guess,
            feedback,
            candidates_before,
            candidates_after: next.len(),
        });
        self.pending_guess = None;
        self.candidates = next;

        if solved {
            info!("solved in {number} rounds");
            self.state = SolveState::Solved;
        } else if self.candidates.is_empty() {
            info!("no candidates left after {number} rounds");
            self.state = SolveState::Exhausted;
        }
        self.state
    }

    fn fail(&mut self, number: usize, error: OracleError) -> SolveState {
        warn!("oracle failed in round {number}: {error}");
        self.error = Some(error);
        self.state = SolveState::OracleFailed;
        self.state
    }

    /// Play rounds until a terminal state
    pub fn run<O>(mut self, oracle: &O) -> SolveOutcome
    where
        O: FeedbackOracle + ?Sized,
    {
        while !self.state.is_terminal() {
            self.step(oracle);
        }
        self.finish()
    }

    /// Close the session and report
    ///
    /// A session still `Searching` reports as such; [`SolveSession::run`]
    /// never does.
    #[must_use]
    pub fn finish(self) -> SolveOutcome {
        let last = self.history.last();
        let (final_guess, final_feedback) = match (self.pending_guess, last) {
            (Some(pending), _) => (Some(pending), None),
            (None, Some(round)) => (Some(round.guess.clone()), Some(round.feedback.clone())),
            (None, None) => (None, None),
        };

        SolveOutcome {
            state: self.state,
            final_guess,
            final_feedback,
            rounds: self.history.len(),
            remaining: self.candidates.len(),
            history: self.history,
            error: self.error,
        }
    }
}

/// Solve one puzzle: the entry point for presentation layers
///
/// # Errors
/// Returns `SolveError` only for failures before the first oracle call; every
/// later ending is reported in the [`SolveOutcome`].
///
/// # Examples
/// ```
/// use wordle_autosolve::candidates::StaticSource;
/// use wordle_autosolve::core::Word;
/// use wordle_autosolve::oracle::{LocalOracle, PuzzleMode};
/// use wordle_autosolve::solver::{SolveState, solve};
///
/// let source = StaticSource::from_strs(&["crane", "slate", "trace"]);
/// let oracle = LocalOracle::new(Vec::new());
/// let mode = PuzzleMode::Target { word: Word::new("trace").unwrap() };
///
/// let outcome = solve(&source, &oracle, mode, 5).unwrap();
/// assert_eq!(outcome.state, SolveState::Solved);
/// assert_eq!(outcome.rounds, 2);
/// ```
pub fn solve<S, O>(source: &S, oracle: &O, mode: PuzzleMode, size: usize) -> SolveResult<SolveOutcome>
where
    S: CandidateSource + ?Sized,
    O: FeedbackOracle + ?Sized,
{
    solve_with(SolveConfig::new(mode).with_size(size), source, oracle)
}

/// [`solve`] with a full configuration
///
/// # Errors
/// See [`solve`].
pub fn solve_with<S, O>(config: SolveConfig, source: &S, oracle: &O) -> SolveResult<SolveOutcome>
where
    S: CandidateSource + ?Sized,
    O: FeedbackOracle + ?Sized,
{
    Ok(SolveSession::from_source(config, source)?.run(oracle))
}
