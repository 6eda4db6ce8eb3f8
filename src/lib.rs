//! # review-sentiment
//!
//! A word-level sentiment dictionary built from a corpus of rated review
//! sentences, with word and review scoring and ranked word lists.
//!
//! ## Features
//!
//! - **Alphanumeric-run tokenizer** with case-insensitive stopword filtering
//! - **Canonical dictionary**: one entry per lowercase word, keeping the casing
//!   it was first seen with, an occurrence count and a running mean rating
//! - **Review scoring**: mean of the known words' ratings, plus a named band
//! - **Top-N queries** by frequency or mean rating with deterministic tie-breaks
//!
//! ## Architecture
//!
//! ```text
//! corpus lines ─→ Tokenizer ─→ StopWords filter ─→ SentimentDictionary
//!                                                      │ (read-only)
//! queries ─→ SentimentAnalyzer ─→ { scorer, label, rank }
//! ```
//!
//! ```
//! use review_sentiment::SentimentAnalyzer;
//!
//! let analyzer = SentimentAnalyzer::from_lines(
//!     ["4A triumph of a film", "0The film is a mess"],
//!     ["a", "of", "the", "is"],
//! )
//! .unwrap();
//! assert_eq!(analyzer.word_sentiment("FILM"), 2.0);
//! assert_eq!(analyzer.review_sentiment_name("a triumph"), "positive");
//! assert_eq!(analyzer.review_sentiment("never seen"), -1.0);
//! ```

/// The analyzer facade: construction and the public query surface.
pub mod analyzer;
/// Global configuration constants: rating domain, label bands, and CLI defaults.
pub mod config;
/// Construction errors.
pub mod error;
/// Sentiment dictionary and corpus ingestion.
pub mod lexicon;
/// Word/review scoring, sentiment labels, and ranked queries.
pub mod scoring;
/// Tokenizer, canonical keys, and stopwords.
pub mod text;

pub use analyzer::{AnalyzerConfig, SentimentAnalyzer};
pub use error::{AnalyzerError, Result};
pub use lexicon::{IngestStats, MalformedLinePolicy, WordEntry};
pub use scoring::{RankOrder, Sentiment};
