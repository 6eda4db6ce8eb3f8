//! Read-only queries over a built dictionary: word and review scores,
//! named sentiment bands, and ranked word lists.

/// Score bands and their names.
pub mod label;
/// Top-N selection by frequency or mean rating.
pub mod rank;
/// Word and review scoring.
pub mod scorer;

pub use label::Sentiment;
pub use rank::{rank, top_words, RankOrder};
pub use scorer::{review_sentiment, word_sentiment};
