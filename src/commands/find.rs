//! Word finding command
//!
//! Runs the path finder for a query word and packages the result for display.

use crate::core::{Grid, Path};
use crate::search::find;

/// Result of a find command
pub struct FindResult {
    pub word: String,
    pub grid: Grid,
    pub paths: Vec<Path>,
}

impl FindResult {
    /// Whether the word was traced anywhere in the grid
    #[must_use]
    pub fn is_match(&self) -> bool {
        !self.paths.is_empty()
    }
}

/// Find every placement of `word` in the grid
#[must_use]
pub fn run_find(grid: &Grid, word: &str) -> FindResult {
    let paths = find(grid, word);
    FindResult {
        word: word.to_lowercase(),
        grid: grid.clone(),
        paths,
    }
}
