//! Solving: constraint filtering and the guess/refine loop
//!
//! The guess policy is front-of-list: each round guesses the first remaining
//! candidate. Combined with an order-preserving filter this makes every solve
//! reproducible for a given word list and secret.

pub mod filter;
pub mod session;

pub use filter::{Constraints, refine};
pub use session::{
    DEFAULT_SIZE, Round, SolveConfig, SolveOutcome, SolveSession, SolveState, solve, solve_with,
};
