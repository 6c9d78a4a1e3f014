//! Core domain types for letter-grid puzzles
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

mod grid;
mod path;
mod score;

pub use grid::{Grid, GridError};
pub use path::{Coord, Path};
pub use score::score;
