//! Grid coordinates and search paths
//!
//! A `Coord` addresses one cell as (row, col). A `Path` is the ordered list
//! of cells along which a query word was traced.

use std::fmt;

/// A (row, col) position in a letter grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

/// An ordered sequence of distinct cells spelling a query word
pub type Path = Vec<Coord>;

impl Coord {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Check 8-directional adjacency (Chebyshev distance at most 1)
    ///
    /// A coordinate counts as adjacent to itself; the search's visited set
    /// is what rules out standing still.
    ///
    /// # Examples
    /// ```
    /// use lettergrid::core::Coord;
    ///
    /// assert!(Coord::new(1, 1).is_adjacent(Coord::new(0, 2)));
    /// assert!(Coord::new(1, 1).is_adjacent(Coord::new(1, 1)));
    /// assert!(!Coord::new(0, 0).is_adjacent(Coord::new(0, 2)));
    /// ```
    #[must_use]
    pub fn is_adjacent(self, other: Self) -> bool {
        self.row.abs_diff(other.row) <= 1 && self.col.abs_diff(other.col) <= 1
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}
