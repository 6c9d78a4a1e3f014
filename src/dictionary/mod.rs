//! Dictionary word lists
//!
//! A prefix tree over lowercase ASCII words. The solver leans on
//! `is_prefix` to abandon grid branches that cannot extend to any word.

pub mod loader;

use rustc_hash::FxHashMap;

/// A set of words supporting whole-word and prefix membership tests
#[derive(Debug, Default, Clone)]
pub struct Dictionary {
    root: Node,
    len: usize,
}

#[derive(Debug, Default, Clone)]
struct Node {
    children: FxHashMap<char, Node>,
    terminal: bool,
}

impl Dictionary {
    /// Create an empty dictionary
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dictionary from any word source, skipping invalid entries
    ///
    /// Words are lowercase-normalized; entries that are empty or contain
    /// non-alphabetic characters are dropped.
    ///
    /// # Examples
    /// ```
    /// use lettergrid::dictionary::Dictionary;
    ///
    /// let dict = Dictionary::from_words(["cat", "CATS", "not a word"]);
    /// assert_eq!(dict.len(), 2);
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dict = Self::new();
        for word in words {
            dict.insert(word.as_ref());
        }
        dict
    }

    /// Insert a word, returning whether it was newly added
    ///
    /// Empty words and words containing non-alphabetic characters are
    /// rejected (returns `false`).
    pub fn insert(&mut self, word: &str) -> bool {
        let word = word.trim().to_lowercase();
        if word.is_empty() || !word.chars().all(|c| c.is_ascii_lowercase()) {
            return false;
        }

        let mut node = &mut self.root;
        for ch in word.chars() {
            node = node.children.entry(ch).or_default();
        }
        if node.terminal {
            return false;
        }
        node.terminal = true;
        self.len += 1;
        true
    }

    /// Check whether the exact word is in the dictionary
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.descend(word).is_some_and(|node| node.terminal)
    }

    /// Check whether any dictionary word starts with `prefix`
    ///
    /// A complete word counts as a prefix of itself; the empty prefix is
    /// always valid in a non-empty dictionary.
    #[must_use]
    pub fn is_prefix(&self, prefix: &str) -> bool {
        self.descend(prefix).is_some()
    }

    /// Number of words in the dictionary
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn descend(&self, letters: &str) -> Option<&Node> {
        let mut node = &self.root;
        for ch in letters.chars() {
            node = node.children.get(&ch)?;
        }
        Some(node)
    }
}
