//! Path finder for word-search queries
//!
//! Exhaustive backtracking search: every cell is tried as a starting point,
//! and each step may move to any of the 8 neighbouring cells. A cell is
//! never used twice within one path.

use crate::core::{Coord, Grid, Path};

/// Find every path along which `word` can be traced through the grid
///
/// Paths are returned in discovery order: starting cells are tried
/// top-to-bottom then left-to-right, and continuations are tried with the
/// row delta as the outer loop. Matching is case-insensitive. An empty
/// query yields no paths.
///
/// # Examples
/// ```
/// use lettergrid::core::Coord;
/// use lettergrid::core::Grid;
/// use lettergrid::search::find;
///
/// let grid = Grid::from_rows(&["cat", "xxx", "xxx"]).unwrap();
/// let paths = find(&grid, "cat");
/// assert_eq!(paths.len(), 1);
/// assert_eq!(paths[0], vec![Coord::new(0, 0), Coord::new(0, 1), Coord::new(0, 2)]);
/// ```
#[must_use]
pub fn find(grid: &Grid, word: &str) -> Vec<Path> {
    let letters: Vec<char> = word.chars().flat_map(char::to_lowercase).collect();
    let mut result = Vec::new();
    if letters.is_empty() {
        return result;
    }

    let size = grid.size();
    let mut seen = vec![vec![false; size]; size];
    let mut path = Vec::with_capacity(letters.len());

    for row in 0..size {
        for col in 0..size {
            walk(
                grid,
                &letters,
                &mut seen,
                &mut result,
                &mut path,
                0,
                row as isize,
                col as isize,
            );
        }
    }

    result
}

/// One step of the backtracking search
///
/// Coordinates are signed because delta application may step off the board;
/// the bounds guard at entry rejects those before any conversion.
#[allow(clippy::too_many_arguments)]
fn walk(
    grid: &Grid,
    letters: &[char],
    seen: &mut [Vec<bool>],
    result: &mut Vec<Path>,
    path: &mut Path,
    index: usize,
    row: isize,
    col: isize,
) {
    let size = grid.size() as isize;
    if row < 0 || col < 0 || row >= size || col >= size {
        return;
    }

    let coord = Coord::new(row as usize, col as usize);
    if seen[coord.row][coord.col] {
        return;
    }
    if grid.at(coord) != Some(letters[index]) {
        return;
    }

    seen[coord.row][coord.col] = true;
    path.push(coord);

    if index == letters.len() - 1 {
        result.push(path.clone());
    } else {
        // The (0, 0) delta stays in: the visited check rejects it, and
        // keeping it preserves the original discovery order.
        for drow in -1..=1 {
            for dcol in -1..=1 {
                walk(
                    grid,
                    letters,
                    seen,
                    result,
                    path,
                    index + 1,
                    row + drow,
                    col + dcol,
                );
            }
        }
    }

    path.pop();
    seen[coord.row][coord.col] = false;
}
