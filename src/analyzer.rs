//! The sentiment analyzer: one stopword set and one dictionary, built once
//! from a rated corpus and queried read-only afterwards.

use crate::error::{AnalyzerError, Result};
use crate::lexicon::{IngestStats, Ingestor, MalformedLinePolicy, SentimentDictionary, WordEntry};
use crate::scoring::{self, RankOrder, Sentiment};
use crate::text::StopWords;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Construction options.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyzerConfig {
    /// Handling of corpus lines without a leading rating digit.
    pub malformed_lines: MalformedLinePolicy,
}

impl AnalyzerConfig {
    /// Skip malformed corpus lines instead of failing.
    pub fn lenient() -> Self {
        Self {
            malformed_lines: MalformedLinePolicy::Skip,
        }
    }

    /// Build from in-memory lines.
    pub fn load_lines<C, S, T, U>(self, corpus: C, stopwords: S) -> Result<SentimentAnalyzer>
    where
        C: IntoIterator<Item = T>,
        T: AsRef<str>,
        S: IntoIterator<Item = U>,
        U: AsRef<str>,
    {
        self.build(
            corpus.into_iter().map(Ok::<T, AnalyzerError>),
            stopwords.into_iter().map(Ok::<U, AnalyzerError>),
        )
    }

    /// Build from buffered readers, one line per corpus sentence or stopword.
    pub fn load_readers<C, S>(self, corpus: C, stopwords: S) -> Result<SentimentAnalyzer>
    where
        C: BufRead,
        S: BufRead,
    {
        self.build(
            corpus.lines().map(|line| line.map_err(AnalyzerError::from)),
            stopwords.lines().map(|line| line.map_err(AnalyzerError::from)),
        )
    }

    /// Build from a corpus file and a stopword file.
    pub fn load_files(
        self,
        corpus_path: impl AsRef<Path>,
        stopwords_path: impl AsRef<Path>,
    ) -> Result<SentimentAnalyzer> {
        let corpus_path = corpus_path.as_ref();
        let stopwords_path = stopwords_path.as_ref();
        let corpus = open(corpus_path)?;
        let stopwords = open(stopwords_path)?;

        let analyzer = self.build(
            corpus
                .lines()
                .map(|line| line.map_err(|e| AnalyzerError::io(corpus_path, e))),
            stopwords
                .lines()
                .map(|line| line.map_err(|e| AnalyzerError::io(stopwords_path, e))),
        )?;

        tracing::info!(
            "Loaded corpus {:?} and stopwords {:?}",
            corpus_path,
            stopwords_path
        );
        Ok(analyzer)
    }

    /// Stopwords first, then one pass over the corpus. Fails fast.
    fn build<C, T, S, U>(self, corpus: C, stopword_lines: S) -> Result<SentimentAnalyzer>
    where
        C: Iterator<Item = Result<T>>,
        T: AsRef<str>,
        S: Iterator<Item = Result<U>>,
        U: AsRef<str>,
    {
        let mut stopwords = StopWords::new();
        for line in stopword_lines {
            stopwords.insert(line?.as_ref());
        }
        tracing::debug!("Loaded {} stopwords", stopwords.len());

        let mut dictionary = SentimentDictionary::new();
        let mut ingestor = Ingestor::new(&mut dictionary, &stopwords, self.malformed_lines);
        for line in corpus {
            ingestor.feed(line?.as_ref())?;
        }
        let stats = ingestor.finish();

        tracing::info!(
            "Built sentiment dictionary: {} words from {} lines ({} skipped)",
            dictionary.len(),
            stats.lines,
            stats.skipped
        );

        Ok(SentimentAnalyzer {
            stopwords,
            dictionary,
            stats,
        })
    }
}

fn open(path: &Path) -> Result<BufReader<File>> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|e| AnalyzerError::io(path, e))
}

/// Word- and review-level sentiment queries over a rated corpus.
///
/// All queries take `&self`; nothing is learned from the text being scored.
#[derive(Debug, Clone)]
pub struct SentimentAnalyzer {
    stopwords: StopWords,
    dictionary: SentimentDictionary,
    stats: IngestStats,
}

impl SentimentAnalyzer {
    /// Build from in-memory corpus lines and stopword lines with default options.
    pub fn from_lines<C, S, T, U>(corpus: C, stopwords: S) -> Result<Self>
    where
        C: IntoIterator<Item = T>,
        T: AsRef<str>,
        S: IntoIterator<Item = U>,
        U: AsRef<str>,
    {
        AnalyzerConfig::default().load_lines(corpus, stopwords)
    }

    /// Build from buffered readers with default options.
    pub fn from_readers<C: BufRead, S: BufRead>(corpus: C, stopwords: S) -> Result<Self> {
        AnalyzerConfig::default().load_readers(corpus, stopwords)
    }

    /// Build from files on disk with default options.
    pub fn from_files(
        corpus_path: impl AsRef<Path>,
        stopwords_path: impl AsRef<Path>,
    ) -> Result<Self> {
        AnalyzerConfig::default().load_files(corpus_path, stopwords_path)
    }

    /// Mean rating of the known, non-stopword words in `review`, in `[0.0, 4.0]`,
    /// or `-1.0` if none are known.
    pub fn review_sentiment(&self, review: &str) -> f64 {
        scoring::review_sentiment(&self.dictionary, &self.stopwords, review)
    }

    /// Band of [`Self::review_sentiment`].
    pub fn review_sentiment_label(&self, review: &str) -> Sentiment {
        Sentiment::from_score(self.review_sentiment(review))
    }

    /// Name of the review's band: `"negative"`, `"somewhat negative"`, `"neutral"`,
    /// `"somewhat positive"`, `"positive"` or `"unknown"`.
    pub fn review_sentiment_name(&self, review: &str) -> &'static str {
        self.review_sentiment_label(review).as_str()
    }

    /// Mean rating of `word` in `[0.0, 4.0]`, or `-1.0` if unknown. Case-insensitive.
    pub fn word_sentiment(&self, word: &str) -> f64 {
        scoring::word_sentiment(&self.dictionary, word)
    }

    /// Dictionary entry for `word`, if it was rated.
    pub fn word_entry(&self, word: &str) -> Option<&WordEntry> {
        self.dictionary.get(word)
    }

    /// The `n` words seen most often in the corpus.
    pub fn most_frequent_words(&self, n: usize) -> HashSet<String> {
        scoring::top_words(&self.dictionary, RankOrder::MostFrequent, n)
    }

    /// The `n` words with the highest mean rating.
    pub fn most_positive_words(&self, n: usize) -> HashSet<String> {
        scoring::top_words(&self.dictionary, RankOrder::MostPositive, n)
    }

    /// The `n` words with the lowest mean rating.
    pub fn most_negative_words(&self, n: usize) -> HashSet<String> {
        scoring::top_words(&self.dictionary, RankOrder::MostNegative, n)
    }

    /// The `n` best entries under `order`, best first.
    pub fn ranked(&self, order: RankOrder, n: usize) -> Vec<&WordEntry> {
        scoring::rank(&self.dictionary, order, n)
    }

    /// Number of distinct words with a known score.
    pub fn dictionary_size(&self) -> usize {
        self.dictionary.len()
    }

    /// Returns `true` if `word` is a stopword, regardless of casing.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    /// Counters from corpus ingestion.
    pub fn ingest_stats(&self) -> IngestStats {
        self.stats
    }

    /// The underlying dictionary.
    pub fn dictionary(&self) -> &SentimentDictionary {
        &self.dictionary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_from_lines() {
        let analyzer =
            SentimentAnalyzer::from_lines(["4Great acting", "0awful acting"], ["the"]).unwrap();
        assert_eq!(analyzer.dictionary_size(), 3);
        assert_eq!(analyzer.word_sentiment("acting"), 2.0);
        assert_eq!(analyzer.review_sentiment_name("acting"), "neutral");
    }

    #[test]
    fn test_from_readers() {
        let corpus = Cursor::new("3good\n1bad\n");
        let stop = Cursor::new("a\nthe\n");
        let analyzer = SentimentAnalyzer::from_readers(corpus, stop).unwrap();
        assert!(analyzer.is_stop_word("The"));
        assert_eq!(analyzer.word_sentiment("good"), 3.0);
        assert_eq!(analyzer.ingest_stats().lines, 2);
    }

    #[test]
    fn test_malformed_rejected_by_default() {
        let err = SentimentAnalyzer::from_lines(["2fine", "no rating"], Vec::<&str>::new())
            .unwrap_err();
        assert!(matches!(err, AnalyzerError::Parse { line: 2, .. }));
    }

    #[test]
    fn test_lenient_skips_malformed() {
        let analyzer = AnalyzerConfig::lenient()
            .load_lines(["2fine", "no rating", "3"], Vec::<&str>::new())
            .unwrap();
        assert_eq!(analyzer.dictionary_size(), 1);
        assert_eq!(analyzer.ingest_stats().skipped, 1);
    }

    #[test]
    fn test_invalid_utf8_reader_is_read_error() {
        let corpus = Cursor::new(b"3good\n\xff\xfe bad\n".to_vec());
        let err = SentimentAnalyzer::from_readers(corpus, Cursor::new("the\n")).unwrap_err();
        match err {
            AnalyzerError::Read(source) => {
                assert_eq!(source.kind(), std::io::ErrorKind::InvalidData)
            }
            other => panic!("expected read error, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_utf8_stopwords_is_read_error() {
        let stop = Cursor::new(b"the\n\xc3\n".to_vec());
        let err = SentimentAnalyzer::from_readers(Cursor::new("3good\n"), stop).unwrap_err();
        assert!(matches!(err, AnalyzerError::Read(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = SentimentAnalyzer::from_files("/nonexistent/reviews.txt", "/nonexistent/stop.txt")
            .unwrap_err();
        assert!(matches!(err, AnalyzerError::Io { .. }));
    }
}
