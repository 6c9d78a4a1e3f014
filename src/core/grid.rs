//! Letter grid representation
//!
//! A `Grid` is a square board of single lowercase letters, addressed by
//! (row, col). It is immutable once built; searches only ever read it.

use super::path::Coord;
use std::fmt;

/// A square grid of single-character cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Vec<char>>,
    size: usize,
}

/// Error type for malformed grid input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    Empty,
    NotSquare { row: usize, expected: usize, got: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Grid must have at least one row"),
            Self::NotSquare { row, expected, got } => {
                write!(f, "Grid must be square: row {row} has {got} cells, expected {expected}")
            }
        }
    }
}

impl std::error::Error for GridError {}

impl Grid {
    /// Build a grid from row strings, one character per cell
    ///
    /// Rows are lowercase-normalized so searches are case-insensitive.
    ///
    /// # Errors
    /// Returns `GridError` if:
    /// - No rows are given
    /// - Any row's length differs from the number of rows
    ///
    /// # Examples
    /// ```
    /// use lettergrid::core::Grid;
    ///
    /// let grid = Grid::from_rows(&["cat", "xxx", "xxx"]).unwrap();
    /// assert_eq!(grid.size(), 3);
    ///
    /// assert!(Grid::from_rows(&["ab", "abc"]).is_err());
    /// ```
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, GridError> {
        let size = rows.len();
        if size == 0 {
            return Err(GridError::Empty);
        }

        let mut cells = Vec::with_capacity(size);
        for (row, line) in rows.iter().enumerate() {
            let chars: Vec<char> = line
                .as_ref()
                .chars()
                .flat_map(char::to_lowercase)
                .collect();
            if chars.len() != size {
                return Err(GridError::NotSquare {
                    row,
                    expected: size,
                    got: chars.len(),
                });
            }
            cells.push(chars);
        }

        Ok(Self { cells, size })
    }

    /// Grid side length
    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Character at a coordinate, or None when out of bounds
    #[inline]
    #[must_use]
    pub fn at(&self, coord: Coord) -> Option<char> {
        self.cells.get(coord.row)?.get(coord.col).copied()
    }

    /// Check whether a coordinate lies inside the grid
    #[inline]
    #[must_use]
    pub const fn contains(&self, coord: Coord) -> bool {
        coord.row < self.size && coord.col < self.size
    }

    /// Iterate all coordinates in row-major order (top-to-bottom, left-to-right)
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.size).flat_map(move |row| (0..self.size).map(move |col| Coord::new(row, col)))
    }

    /// Borrow the rows of cells
    #[inline]
    #[must_use]
    pub fn rows(&self) -> &[Vec<char>] {
        &self.cells
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for &cell in row {
                write!(f, "{cell}")?;
            }
        }
        Ok(())
    }
}
