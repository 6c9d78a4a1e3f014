//! Dictionary solver for letter grids
//!
//! Depth-first sweep over the same 8-direction adjacency as the path
//! finder, pruned by dictionary prefixes so dead branches stop early.

use crate::core::Grid;
use crate::dictionary::Dictionary;
use rustc_hash::FxHashSet;
use std::cmp::Reverse;

/// Find every dictionary word hidden in the grid
///
/// Words shorter than `min_length` are dropped. A word reachable along
/// several paths is reported once. A `q` cell contributes the letters
/// "qu", following the standard Boggle tile.
///
/// Results come back sorted by length descending, ties alphabetical.
///
/// # Examples
/// ```
/// use lettergrid::core::Grid;
/// use lettergrid::dictionary::Dictionary;
/// use lettergrid::search::solve;
///
/// let grid = Grid::from_rows(&["cat", "xes", "xxx"]).unwrap();
/// let dict = Dictionary::from_words(["cat", "cats", "teas", "dog"]);
/// assert_eq!(solve(&grid, &dict, 3), vec!["cats", "teas", "cat"]);
/// ```
#[must_use]
pub fn solve(grid: &Grid, dictionary: &Dictionary, min_length: usize) -> Vec<String> {
    let size = grid.size();
    let mut found = FxHashSet::default();
    let mut seen = vec![vec![false; size]; size];
    let mut letters = String::new();

    for row in 0..size {
        for col in 0..size {
            explore(
                grid,
                dictionary,
                &mut seen,
                &mut found,
                &mut letters,
                row as isize,
                col as isize,
            );
        }
    }

    let mut words: Vec<String> = found
        .into_iter()
        .filter(|word| word.len() >= min_length)
        .collect();
    words.sort_unstable();
    words.sort_by_key(|word| Reverse(word.len()));
    words
}

fn explore(
    grid: &Grid,
    dictionary: &Dictionary,
    seen: &mut [Vec<bool>],
    found: &mut FxHashSet<String>,
    letters: &mut String,
    row: isize,
    col: isize,
) {
    let size = grid.size() as isize;
    if row < 0 || col < 0 || row >= size || col >= size {
        return;
    }

    let (r, c) = (row as usize, col as usize);
    if seen[r][c] {
        return;
    }

    let Some(letter) = grid.at((r, c).into()) else {
        return;
    };

    let base_len = letters.len();
    letters.push(letter);
    if letter == 'q' {
        letters.push('u');
    }
    if !dictionary.is_prefix(letters) {
        letters.truncate(base_len);
        return;
    }

    seen[r][c] = true;
    if dictionary.contains(letters) {
        found.insert(letters.clone());
    }

    for drow in -1..=1 {
        for dcol in -1..=1 {
            explore(
                grid,
                dictionary,
                seen,
                found,
                letters,
                row + drow,
                col + dcol,
            );
        }
    }

    seen[r][c] = false;
    letters.truncate(base_len);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_planted_words() {
        let grid = Grid::from_rows(&["cat", "xes", "xxx"]).unwrap();
        let dict = Dictionary::from_words(["cat", "ate", "dog"]);
        let words = solve(&grid, &dict, 3);
        assert!(words.contains(&"cat".to_string()));
        assert!(words.contains(&"ate".to_string()));
        assert!(!words.contains(&"dog".to_string()));
    }

    #[test]
    fn letters_must_be_adjacent() {
        let grid = Grid::from_rows(&["abc", "def", "ghi"]).unwrap();
        let dict = Dictionary::from_words(["adg", "aei", "big"]);
        let words = solve(&grid, &dict, 3);
        assert!(words.contains(&"adg".to_string())); // Down the first column
        assert!(words.contains(&"aei".to_string())); // Main diagonal
        assert!(!words.contains(&"big".to_string())); // 'b' and 'i' are two cells apart
    }

    #[test]
    fn respects_min_length() {
        let grid = Grid::from_rows(&["at", "xx"]).unwrap();
        let dict = Dictionary::from_words(["at"]);
        assert!(solve(&grid, &dict, 3).is_empty());
        assert_eq!(solve(&grid, &dict, 2), vec!["at"]);
    }

    #[test]
    fn word_found_on_two_paths_reported_once() {
        let grid = Grid::from_rows(&["cat", "xax", "xxx"]).unwrap();
        let dict = Dictionary::from_words(["cat"]);
        assert_eq!(solve(&grid, &dict, 3), vec!["cat"]);
    }

    #[test]
    fn ordering_length_desc_then_alpha() {
        let grid = Grid::from_rows(&["rat", "aes", "txx"]).unwrap();
        let dict = Dictionary::from_words(["rat", "rate", "rates", "tar", "eat"]);
        let words = solve(&grid, &dict, 3);
        // Longest first; equal lengths alphabetical
        for pair in words.windows(2) {
            assert!(
                pair[0].len() > pair[1].len()
                    || (pair[0].len() == pair[1].len() && pair[0] < pair[1])
            );
        }
        assert_eq!(words[0], "rates");
    }

    #[test]
    fn q_cell_spells_qu() {
        let grid = Grid::from_rows(&["qi", "zx"]).unwrap();
        let dict = Dictionary::from_words(["quiz"]);
        assert_eq!(solve(&grid, &dict, 3), vec!["quiz"]);
    }

    #[test]
    fn q_cell_without_qu_words_finds_nothing() {
        let grid = Grid::from_rows(&["qa", "xx"]).unwrap();
        let dict = Dictionary::from_words(["qat"]); // No 'u' after the q tile
        assert!(solve(&grid, &dict, 3).is_empty());
    }

    #[test]
    fn no_cell_reused_within_a_word() {
        // Spelling "tot" needs two 't' cells; only one exists
        let grid = Grid::from_rows(&["to", "xx"]).unwrap();
        let dict = Dictionary::from_words(["tot"]);
        assert!(solve(&grid, &dict, 3).is_empty());
    }

    #[test]
    fn empty_dictionary_finds_nothing() {
        let grid = Grid::from_rows(&["cat", "xes", "xxx"]).unwrap();
        let dict = Dictionary::new();
        assert!(solve(&grid, &dict, 0).is_empty());
    }
}
