//! lettergrid
//!
//! Path finder and dictionary solver for Boggle-style letter grids: trace a
//! query word through adjacent cells (diagonals included), or sweep a grid
//! for every word in a dictionary.
//!
//! # Quick Start
//!
//! ```rust
//! use lettergrid::core::{Coord, Grid};
//! use lettergrid::search::find;
//!
//! let grid = Grid::from_rows(&["cat", "xxx", "xxx"]).unwrap();
//!
//! let paths = find(&grid, "cat");
//! assert_eq!(paths, vec![vec![
//!     Coord::new(0, 0),
//!     Coord::new(0, 1),
//!     Coord::new(0, 2),
//! ]]);
//! ```

// Core domain types
pub mod core;

// Search algorithms
pub mod search;

// Dictionary word lists
pub mod dictionary;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
