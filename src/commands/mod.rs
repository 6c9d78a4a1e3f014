//! Command implementations

pub mod find;
pub mod solve;

pub use find::{FindResult, run_find};
pub use solve::{ScoredWord, SolveReport, run_solve};
