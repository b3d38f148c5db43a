//! Terminal output formatting
//!
//! Display utilities for CLI results, plus the JSON report.

pub mod display;
pub mod formatters;
pub mod report;

pub use display::{
    print_benchmark_result, print_guess_result, print_refine_result, print_solve_outcome,
};
pub use report::{BenchmarkReport, GuessReport, RefineReport, SolveReport, to_json};
