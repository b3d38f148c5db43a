//! Command implementations

pub mod benchmark;
pub mod guess;
pub mod refine;
pub mod solve;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark};
pub use guess::{GuessError, GuessResult, score_guess};
pub use refine::{RefineError, RefineResult, RefineStep, parse_feedback, refine_candidates};
pub use solve::{ModeRequest, resolve_mode, solve_puzzle};
