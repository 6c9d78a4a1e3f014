//! Grid solving command
//!
//! Sweeps the grid for every dictionary word and attaches Boggle scores.

use crate::core::{Grid, score};
use crate::dictionary::Dictionary;
use crate::search::solve;

/// A found word together with its score
pub struct ScoredWord {
    pub word: String,
    pub score: u32,
}

/// Result of solving a grid against a dictionary
pub struct SolveReport {
    pub words: Vec<ScoredWord>,
    pub total_score: u32,
    pub dictionary_size: usize,
}

/// Find and score every dictionary word hidden in the grid
#[must_use]
pub fn run_solve(grid: &Grid, dictionary: &Dictionary, min_length: usize) -> SolveReport {
    let words: Vec<ScoredWord> = solve(grid, dictionary, min_length)
        .into_iter()
        .map(|word| {
            let score = score(&word);
            ScoredWord { word, score }
        })
        .collect();

    let total_score = words.iter().map(|w| w.score).sum();

    SolveReport {
        words,
        total_score,
        dictionary_size: dictionary.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_scores_and_totals() {
        let grid = Grid::from_rows(&["cat", "xes", "xxx"]).unwrap();
        let dict = Dictionary::from_words(["cat", "cats", "dog"]);

        let report = run_solve(&grid, &dict, 3);

        assert_eq!(report.dictionary_size, 3);
        assert_eq!(report.words.len(), 2);
        // Length-descending order: "cats" before "cat"
        assert_eq!(report.words[0].word, "cats");
        assert_eq!(report.words[0].score, 1);
        assert_eq!(report.words[1].word, "cat");
        assert_eq!(report.words[1].score, 1);
        assert_eq!(report.total_score, 2);
    }

    #[test]
    fn empty_report_when_nothing_found() {
        let grid = Grid::from_rows(&["zz", "zz"]).unwrap();
        let dict = Dictionary::from_words(["cat"]);

        let report = run_solve(&grid, &dict, 3);
        assert!(report.words.is_empty());
        assert_eq!(report.total_score, 0);
    }
}
