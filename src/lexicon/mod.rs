//! Sentiment lexicon: the word dictionary and the corpus loader that fills it.

/// Canonical word → rating aggregate map.
pub mod dictionary;
/// Corpus line parsing and one-pass ingestion.
pub mod ingest;

pub use dictionary::{SentimentDictionary, WordEntry};
pub use ingest::{IngestStats, Ingestor, MalformedLinePolicy};
