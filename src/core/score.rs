//! Boggle word scoring
//!
//! Standard tournament values: short words are worth nothing, and anything
//! of eight letters or more flattens out at 11 points.

/// Score a word by its length
///
/// # Examples
/// ```
/// use lettergrid::core::score;
///
/// assert_eq!(score("cat"), 1);
/// assert_eq!(score("quiz"), 1);
/// assert_eq!(score("quartz"), 3);
/// assert_eq!(score("at"), 0);
/// ```
#[must_use]
pub fn score(word: &str) -> u32 {
    match word.chars().count() {
        0..=2 => 0,
        3 | 4 => 1,
        5 => 2,
        6 => 3,
        7 => 5,
        _ => 11,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn too_short_scores_zero() {
        assert_eq!(score(""), 0);
        assert_eq!(score("a"), 0);
        assert_eq!(score("at"), 0);
    }

    #[test]
    fn three_and_four_letters_score_one() {
        assert_eq!(score("cat"), 1);
        assert_eq!(score("word"), 1);
    }

    #[test]
    fn mid_lengths() {
        assert_eq!(score("bread"), 2);
        assert_eq!(score("breads"), 3);
        assert_eq!(score("lengthy"), 5);
    }

    #[test]
    fn eight_plus_scores_eleven() {
        assert_eq!(score("absolute"), 11);
        assert_eq!(score("absolutely"), 11);
    }
}
