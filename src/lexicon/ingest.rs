//! One-pass corpus ingestion.
//!
//! Each corpus line is `<digit><sentence>`: the leading digit is the rating of
//! the whole sentence and every non-stopword token in it is credited with that
//! rating. Lines must be fed in corpus order, since the first casing seen for a
//! word becomes its display form.

use crate::error::{AnalyzerError, Result};
use crate::lexicon::dictionary::SentimentDictionary;
use crate::text::{tokenize, StopWords};
use serde::Serialize;

/// What to do with a corpus line that has no leading rating digit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MalformedLinePolicy {
    /// Abort construction with [`AnalyzerError::Parse`].
    #[default]
    Reject,
    /// Log a warning and continue with the next line.
    Skip,
}

/// Counters collected while ingesting a corpus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IngestStats {
    /// Corpus lines consumed, including skipped ones.
    pub lines: usize,
    /// Malformed lines dropped under [`MalformedLinePolicy::Skip`].
    pub skipped: usize,
    /// Tokens credited to the dictionary.
    pub tokens: usize,
    /// Tokens dropped because they are stopwords.
    pub stopwords_dropped: usize,
}

/// Split a trimmed corpus line into its rating and sentence text.
pub fn parse_line(line: &str) -> std::result::Result<(u8, &str), String> {
    let mut chars = line.chars();
    let first = chars.next().ok_or_else(|| "line is empty".to_string())?;
    let rating = first
        .to_digit(10)
        .ok_or_else(|| format!("expected a rating digit, found {first:?}"))?;
    Ok((rating as u8, chars.as_str()))
}

/// Feeds corpus lines into a dictionary, filtering stopwords.
pub struct Ingestor<'a> {
    dictionary: &'a mut SentimentDictionary,
    stopwords: &'a StopWords,
    policy: MalformedLinePolicy,
    stats: IngestStats,
}

impl<'a> Ingestor<'a> {
    /// Ingestor writing into `dictionary`, dropping tokens found in `stopwords`.
    pub fn new(
        dictionary: &'a mut SentimentDictionary,
        stopwords: &'a StopWords,
        policy: MalformedLinePolicy,
    ) -> Self {
        Self {
            dictionary,
            stopwords,
            policy,
            stats: IngestStats::default(),
        }
    }

    /// Ingest the next corpus line. The line is trimmed before parsing.
    pub fn feed(&mut self, line: &str) -> Result<()> {
        self.stats.lines += 1;
        let line_no = self.stats.lines;

        let (rating, text) = match parse_line(line.trim()) {
            Ok(parsed) => parsed,
            Err(reason) => match self.policy {
                MalformedLinePolicy::Reject => {
                    return Err(AnalyzerError::Parse {
                        line: line_no,
                        reason,
                    })
                }
                MalformedLinePolicy::Skip => {
                    tracing::warn!("Skipping malformed corpus line {}: {}", line_no, reason);
                    self.stats.skipped += 1;
                    return Ok(());
                }
            },
        };

        let rating = f64::from(rating);
        for token in tokenize(text) {
            if self.stopwords.contains(token) {
                self.stats.stopwords_dropped += 1;
                continue;
            }
            self.dictionary.update(token, rating);
            self.stats.tokens += 1;
        }
        Ok(())
    }

    /// Counters for everything fed so far.
    pub fn finish(self) -> IngestStats {
        self.stats
    }
}
