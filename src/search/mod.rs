//! Search algorithms over letter grids
//!
//! The path finder answers "where can this word be traced?"; the solver
//! answers "which dictionary words are hidden here?".

mod finder;
mod solver;

pub use finder::find;
pub use solver::solve;
