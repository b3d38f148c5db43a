//! Wordle Autosolve
//!
//! Drives a feedback oracle to a secret word: guess the first remaining
//! candidate, score it, prune the candidate list with the feedback, repeat.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_autosolve::candidates::StaticSource;
//! use wordle_autosolve::core::Word;
//! use wordle_autosolve::oracle::{LocalOracle, PuzzleMode};
//! use wordle_autosolve::solver::solve;
//!
//! let source = StaticSource::from_strs(&["crane", "slate", "trace"]);
//! let oracle = LocalOracle::new(Vec::new());
//! let mode = PuzzleMode::Target { word: Word::new("slate").unwrap() };
//!
//! let outcome = solve(&source, &oracle, mode, 5).unwrap();
//! assert!(outcome.is_solved());
//! ```

// Core domain types
pub mod core;

// Candidate store and sources
pub mod candidates;

// Oracle interface
pub mod oracle;

// Constraint filter and solver loop
pub mod solver;

// Shared error types
pub mod error;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
