//! Deterministic top-N word selection.
//!
//! Entries are ranked by a primary key (count or mean rating) with ties broken
//! by canonical key ascending, so equal inputs always select the same words.

use crate::lexicon::{SentimentDictionary, WordEntry};
use ordered_float::OrderedFloat;
use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashSet};

/// Ordering used to pick the top words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankOrder {
    /// Highest occurrence count first.
    MostFrequent,
    /// Highest mean rating first.
    MostPositive,
    /// Lowest mean rating first.
    MostNegative,
}

/// Heap item: greater means ranked higher.
struct Ranked<'a, K> {
    rank: K,
    key: &'a str,
    entry: &'a WordEntry,
}

impl<K: Ord> Ord for Ranked<'_, K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // lower canonical key wins ties
        self.rank
            .cmp(&other.rank)
            .then_with(|| other.key.cmp(self.key))
    }
}

impl<K: Ord> PartialOrd for Ranked<'_, K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> PartialEq for Ranked<'_, K> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<K: Ord> Eq for Ranked<'_, K> {}

/// Partial sort: O(len log n) via a min-heap of size n.
fn select<'a, K, F>(dictionary: &'a SentimentDictionary, n: usize, rank_of: F) -> Vec<&'a WordEntry>
where
    K: Ord,
    F: Fn(&WordEntry) -> K,
{
    if n == 0 {
        return Vec::new();
    }

    let mut heap: BinaryHeap<Reverse<Ranked<'a, K>>> =
        BinaryHeap::with_capacity(n.min(dictionary.len()) + 1);
    for (key, entry) in dictionary.iter() {
        heap.push(Reverse(Ranked {
            rank: rank_of(entry),
            key,
            entry,
        }));
        if heap.len() > n {
            heap.pop();
        }
    }

    heap.into_sorted_vec()
        .into_iter()
        .map(|Reverse(ranked)| ranked.entry)
        .collect()
}

/// The `n` best entries under `order`, best first.
pub fn rank(dictionary: &SentimentDictionary, order: RankOrder, n: usize) -> Vec<&WordEntry> {
    match order {
        RankOrder::MostFrequent => select(dictionary, n, |e| e.count),
        RankOrder::MostPositive => select(dictionary, n, |e| OrderedFloat(e.mean)),
        RankOrder::MostNegative => select(dictionary, n, |e| Reverse(OrderedFloat(e.mean))),
    }
}

/// Display forms of the `n` best entries under `order`.
pub fn top_words(dictionary: &SentimentDictionary, order: RankOrder, n: usize) -> HashSet<String> {
    rank(dictionary, order, n)
        .into_iter()
        .map(|entry| entry.display_form.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build() -> SentimentDictionary {
        let mut dict = SentimentDictionary::new();
        for (word, rating) in [
            ("movie", 1.0),
            ("Movie", 2.0),
            ("movie", 2.0),
            ("film", 3.0),
            ("film", 3.0),
            ("Breillat", 4.0),
            ("rounded", 4.0),
            ("turd", 0.0),
            ("claptrap", 0.0),
            ("plot", 2.0),
        ] {
            dict.update(word, rating);
        }
        dict
    }

    fn forms(entries: Vec<&WordEntry>) -> Vec<&str> {
        entries.iter().map(|e| e.display_form.as_str()).collect()
    }

    #[test]
    fn test_most_frequent_order() {
        let dict = build();
        assert_eq!(forms(rank(&dict, RankOrder::MostFrequent, 2)), vec!["movie", "film"]);
    }

    #[test]
    fn test_most_positive_ties_by_canonical_key() {
        let dict = build();
        // "breillat" < "rounded"
        assert_eq!(forms(rank(&dict, RankOrder::MostPositive, 1)), vec!["Breillat"]);
        assert_eq!(
            forms(rank(&dict, RankOrder::MostPositive, 3)),
            vec!["Breillat", "rounded", "film"]
        );
    }

    #[test]
    fn test_most_negative_order() {
        let dict = build();
        assert_eq!(
            forms(rank(&dict, RankOrder::MostNegative, 3)),
            vec!["claptrap", "turd", "movie"]
        );
    }

    #[test]
    fn test_frequency_ties_by_canonical_key() {
        let dict = build();
        // every count-1 word ties; keys ascending: breillat, claptrap, plot, rounded, turd
        let ranked = forms(rank(&dict, RankOrder::MostFrequent, 4));
        assert_eq!(ranked, vec!["movie", "film", "Breillat", "claptrap"]);
    }

    #[test]
    fn test_n_bounds() {
        let dict = build();
        assert!(top_words(&dict, RankOrder::MostFrequent, 0).is_empty());
        for n in 1..=dict.len() + 3 {
            let words = top_words(&dict, RankOrder::MostFrequent, n);
            assert_eq!(words.len(), n.min(dict.len()));
        }
    }

    #[test]
    fn test_empty_dictionary() {
        let dict = SentimentDictionary::new();
        assert!(rank(&dict, RankOrder::MostPositive, 5).is_empty());
    }

    #[test]
    fn test_top_words_uses_display_form() {
        let dict = build();
        let words = top_words(&dict, RankOrder::MostPositive, 2);
        assert!(words.contains("Breillat"));
        assert!(words.contains("rounded"));
    }
}
