//! Word list loading utilities
//!
//! Reads plain-text word lists, one word per line, into a `Dictionary`.

use super::Dictionary;
use std::fs;
use std::io;
use std::path::Path;

/// Load a dictionary from a file
///
/// Blank lines and invalid entries (non-alphabetic characters) are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use lettergrid::dictionary::loader::load_from_file;
///
/// let dict = load_from_file("data/twl.txt").unwrap();
/// println!("Loaded {} words", dict.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Dictionary> {
    let content = fs::read_to_string(path)?;

    let words = content.lines().filter_map(|line| {
        let trimmed = line.trim();
        if trimmed.is_empty() { None } else { Some(trimmed) }
    });

    Ok(Dictionary::from_words(words))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn load_skips_blanks_and_invalid() {
        let dir = std::env::temp_dir();
        let path = dir.join("lettergrid_loader_test.txt");
        {
            let mut file = fs::File::create(&path).unwrap();
            writeln!(file, "cat").unwrap();
            writeln!(file).unwrap();
            writeln!(file, "  dog  ").unwrap();
            writeln!(file, "n0pe").unwrap();
        }

        let dict = load_from_file(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(dict.len(), 2);
        assert!(dict.contains("cat"));
        assert!(dict.contains("dog"));
    }

    #[test]
    fn load_missing_file_is_error() {
        assert!(load_from_file("definitely/not/a/file.txt").is_err());
    }
}
