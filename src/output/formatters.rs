//! Formatting utilities for terminal output

use crate::core::{Coord, Path};

/// Format a path as an arrow-separated coordinate sequence
#[must_use]
pub fn format_path(path: &[Coord]) -> String {
    path.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" → ")
}

/// Build a per-cell mask of every coordinate covered by any path
#[must_use]
pub fn highlight_mask(size: usize, paths: &[Path]) -> Vec<Vec<bool>> {
    let mut mask = vec![vec![false; size]; size];
    for path in paths {
        for coord in path {
            if coord.row < size && coord.col < size {
                mask[coord.row][coord.col] = true;
            }
        }
    }
    mask
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_path_single_coord() {
        let path = vec![Coord::new(1, 2)];
        assert_eq!(format_path(&path), "(1, 2)");
    }

    #[test]
    fn format_path_sequence() {
        let path = vec![Coord::new(0, 0), Coord::new(0, 1), Coord::new(0, 2)];
        assert_eq!(format_path(&path), "(0, 0) → (0, 1) → (0, 2)");
    }

    #[test]
    fn format_path_empty() {
        assert_eq!(format_path(&[]), "");
    }

    #[test]
    fn mask_covers_union_of_paths() {
        let paths = vec![
            vec![Coord::new(0, 0), Coord::new(0, 1)],
            vec![Coord::new(0, 0), Coord::new(1, 1)],
        ];
        let mask = highlight_mask(2, &paths);
        assert!(mask[0][0]);
        assert!(mask[0][1]);
        assert!(mask[1][1]);
        assert!(!mask[1][0]);
    }

    #[test]
    fn mask_empty_paths() {
        let mask = highlight_mask(3, &[]);
        assert!(mask.iter().flatten().all(|&lit| !lit));
    }
}
