//! Case-insensitive stopword set.
//!
//! Loaded once from a word list (one word per line) and immutable afterwards.
//! Entries are stored lowercased so membership is a single hash lookup.

use crate::text::normalize::canonical_key;
use std::collections::HashSet;

/// Fixed set of words excluded from dictionary construction and review scoring.
#[derive(Debug, Default, Clone)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// Creates an empty stopword set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from raw lines. Lines are trimmed; blank lines are ignored.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new();
        for line in lines {
            set.insert(line.as_ref());
        }
        set
    }

    /// Adds one word (trimmed, lowercased). Only used while loading.
    pub(crate) fn insert(&mut self, word: &str) {
        let word = word.trim();
        if !word.is_empty() {
            self.words.insert(canonical_key(word).into_owned());
        }
    }

    /// Returns `true` if `word` is a stopword, ignoring casing and surrounding whitespace.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&*canonical_key(word.trim()))
    }

    /// Number of distinct stopwords.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the set holds no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_case_insensitive() {
        let stop = StopWords::from_lines(["the", "Is", "YOUR"]);
        assert!(stop.contains("the"));
        assert!(stop.contains("THE"));
        assert!(stop.contains("is"));
        assert!(stop.contains("Your"));
        assert!(!stop.contains("movie"));
    }

    #[test]
    fn test_lines_trimmed_and_blank_skipped() {
        let stop = StopWords::from_lines(["  a  ", "", "   ", "and\t"]);
        assert_eq!(stop.len(), 2);
        assert!(stop.contains("a"));
        assert!(stop.contains(" and "));
        assert!(!stop.contains(""));
    }

    #[test]
    fn test_duplicates_collapse() {
        let stop = StopWords::from_lines(["the", "The", "THE"]);
        assert_eq!(stop.len(), 1);
    }

    #[test]
    fn test_titlecase_lookup_matches() {
        let stop = StopWords::from_lines(["\u{01C6}e"]);
        assert!(stop.contains("\u{01C5}e"));
        assert!(stop.contains("\u{01C4}E"));
    }

    #[test]
    fn test_punctuation_is_not_a_stopword() {
        let stop = StopWords::from_lines(["is", "your"]);
        assert!(!stop.contains("'"));
    }
}
