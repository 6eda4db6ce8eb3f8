//! Word and review scoring against a built dictionary.
//!
//! Scoring never mutates the dictionary: the same text always yields the
//! same score for the lifetime of an analyzer.

use crate::config::UNKNOWN_SENTIMENT;
use crate::lexicon::SentimentDictionary;
use crate::text::{tokenize, StopWords};

/// Mean rating of `word`, or [`UNKNOWN_SENTIMENT`] if it was never rated.
pub fn word_sentiment(dictionary: &SentimentDictionary, word: &str) -> f64 {
    dictionary
        .get(word)
        .map_or(UNKNOWN_SENTIMENT, |entry| entry.mean)
}

/// Average of the mean ratings of the known, non-stopword tokens in `text`.
/// Returns [`UNKNOWN_SENTIMENT`] when no token qualifies.
pub fn review_sentiment(
    dictionary: &SentimentDictionary,
    stopwords: &StopWords,
    text: &str,
) -> f64 {
    let (sum, count) = tokenize(text)
        .filter(|token| !stopwords.contains(token))
        .filter_map(|token| dictionary.get(token))
        .fold((0.0, 0u32), |(sum, count), entry| (sum + entry.mean, count + 1));

    if count == 0 {
        return UNKNOWN_SENTIMENT;
    }
    sum / f64::from(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build() -> (SentimentDictionary, StopWords) {
        let mut dict = SentimentDictionary::new();
        dict.update("film", 3.0);
        dict.update("film", 2.0);
        dict.update("perfection", 4.0);
        dict.update("dull", 0.0);
        // a stopword that slipped into the dictionary must still be ignored
        dict.update("the", 4.0);
        (dict, StopWords::from_lines(["the", "is"]))
    }

    #[test]
    fn test_word_sentiment() {
        let (dict, _) = build();
        assert_eq!(word_sentiment(&dict, "film"), 2.5);
        assert_eq!(word_sentiment(&dict, "FILM"), 2.5);
        assert_eq!(word_sentiment(&dict, "notfound404"), UNKNOWN_SENTIMENT);
    }

    #[test]
    fn test_review_sentiment_averages_known_tokens() {
        let (dict, stop) = build();
        let score = review_sentiment(&dict, &stop, "The film is perfection, zaki!");
        assert!((score - 3.25).abs() < 1e-9);
    }

    #[test]
    fn test_review_sentiment_unknown() {
        let (dict, stop) = build();
        assert_eq!(review_sentiment(&dict, &stop, ""), UNKNOWN_SENTIMENT);
        assert_eq!(review_sentiment(&dict, &stop, "zaki zdrkp"), UNKNOWN_SENTIMENT);
        assert_eq!(review_sentiment(&dict, &stop, "The is ., '"), UNKNOWN_SENTIMENT);
    }

    #[test]
    fn test_repeated_tokens_count_each_time() {
        let (dict, stop) = build();
        let score = review_sentiment(&dict, &stop, "dull dull dull perfection");
        assert!((score - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_review_sentiment_is_read_only() {
        let (dict, stop) = build();
        let before = dict.clone();
        let first = review_sentiment(&dict, &stop, "film perfection novelword");
        let second = review_sentiment(&dict, &stop, "film perfection novelword");
        assert_eq!(first, second);
        assert_eq!(dict.len(), before.len());
        assert_eq!(dict.get("film"), before.get("film"));
    }
}
