//! Case-insensitive sentiment dictionary.
//!
//! Maps the canonical (lowercase) form of a word to a single [`WordEntry`]
//! holding the casing it was first seen with, how often it was seen, and the
//! running mean of the ratings of the sentences it appeared in.

use crate::text::canonical_key;
use serde::Serialize;
use std::collections::HashMap;

/// Aggregated ratings for one canonical word.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordEntry {
    /// Casing of the first occurrence. Never changes once the entry exists.
    #[serde(rename = "word")]
    pub display_form: String,
    /// Number of ratings folded into `mean`.
    pub count: u32,
    /// Arithmetic mean of every rating observed for this word.
    pub mean: f64,
}

impl WordEntry {
    fn new(display_form: &str, rating: f64) -> Self {
        Self {
            display_form: display_form.to_string(),
            count: 1,
            mean: rating,
        }
    }

    /// Fold one more rating into the running mean.
    fn observe(&mut self, rating: f64) {
        let count = f64::from(self.count);
        self.mean = (count * self.mean + rating) / (count + 1.0);
        self.count += 1;
    }
}

/// Canonical word → [`WordEntry`] map built during corpus ingestion.
#[derive(Debug, Default, Clone)]
pub struct SentimentDictionary {
    entries: HashMap<String, WordEntry>,
}

impl SentimentDictionary {
    /// Creates an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if a word with the same canonical form has been rated.
    pub fn contains_key(&self, word: &str) -> bool {
        !word.is_empty() && self.entries.contains_key(&*canonical_key(word))
    }

    /// Looks up a word regardless of casing.
    pub fn get(&self, word: &str) -> Option<&WordEntry> {
        self.entries.get(&*canonical_key(word))
    }

    /// Record one rating for `word`.
    ///
    /// The first call for a canonical key fixes its display form; later calls
    /// only move `count` and `mean`. Empty words are ignored.
    pub fn update(&mut self, word: &str, rating: f64) {
        if word.is_empty() {
            return;
        }
        match self.entries.get_mut(&*canonical_key(word)) {
            Some(entry) => entry.observe(rating),
            None => {
                let key = canonical_key(word).into_owned();
                self.entries.insert(key, WordEntry::new(word, rating));
            }
        }
    }

    /// Number of distinct canonical words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no word has been rated.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, in no particular order.
    pub fn entries(&self) -> impl Iterator<Item = &WordEntry> + '_ {
        self.entries.values()
    }

    /// All `(canonical key, entry)` pairs, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &WordEntry)> + '_ {
        self.entries.iter().map(|(key, entry)| (key.as_str(), entry))
    }
}
