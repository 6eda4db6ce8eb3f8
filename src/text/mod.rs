//! Text preprocessing: tokenization, canonical keys, and stopword filtering.
//!
//! Tokens are maximal alphanumeric runs with their original casing. Casing is
//! only folded when a token is looked up, via [`canonical_key`].

/// Lowercase canonical keys.
pub mod normalize;
/// Case-insensitive stopword set.
pub mod stopwords;
/// Alphanumeric-run tokenizer.
pub mod tokenizer;

pub use normalize::canonical_key;
pub use stopwords::StopWords;
pub use tokenizer::{tokenize, Tokens};
