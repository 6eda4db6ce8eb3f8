//! Global configuration constants for review-sentiment.
//!
//! Rating domain, label band edges, and CLI defaults are defined here.
//! These are compile-time constants; runtime configuration is handled via
//! [`crate::analyzer::AnalyzerConfig`] and the CLI arguments in `main.rs`.

/// Sentinel returned for words and reviews with no observed rating.
pub const UNKNOWN_SENTIMENT: f64 = -1.0;

/// Lowest rating a corpus line is expected to carry.
pub const MIN_RATING: f64 = 0.0;

/// Highest rating a corpus line is expected to carry.
///
/// Corpus lines may use any single decimal digit; ratings above this bound
/// are ingested as-is but score outside every named label band.
pub const MAX_RATING: f64 = 4.0;

/// Upper edge (exclusive) of the "negative" band, and lower edge of "somewhat negative".
pub const SOMEWHAT_NEGATIVE_FLOOR: f64 = 1.0;

/// The single score labelled "neutral". Also the exclusive upper edge of "somewhat negative".
pub const NEUTRAL_SCORE: f64 = 2.0;

/// Upper edge (inclusive) of the "somewhat positive" band.
pub const SOMEWHAT_POSITIVE_CEILING: f64 = 3.0;

/// Number of words listed by the CLI `top` command when `-n` is not given.
pub const DEFAULT_TOP_N: usize = 10;

/// Default corpus of rated review sentences.
pub const DEFAULT_REVIEWS_PATH: &str = "./data/movieReviews.txt";

/// Default stopword list.
pub const DEFAULT_STOPWORDS_PATH: &str = "./data/stopwords.txt";

/// Environment variable consulted for the corpus path when `--reviews` is absent.
pub const REVIEWS_PATH_ENV: &str = "SENTIMENT_REVIEWS";

/// Environment variable consulted for the stopword path when `--stopwords` is absent.
pub const STOPWORDS_PATH_ENV: &str = "SENTIMENT_STOPWORDS";
