//! Named sentiment bands.

use crate::config::{
    MAX_RATING, MIN_RATING, NEUTRAL_SCORE, SOMEWHAT_NEGATIVE_FLOOR, SOMEWHAT_POSITIVE_CEILING,
};
use serde::Serialize;
use std::fmt;

/// Categorical label for a review score.
///
/// Bands:
/// - `[0, 1)` → `Negative`
/// - `[1, 2)` → `SomewhatNegative`
/// - exactly `2` → `Neutral`
/// - `(2, 3]` → `SomewhatPositive`
/// - `(3, 4]` → `Positive`
/// - anything else, including the `-1.0` sentinel → `Unknown`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Sentiment {
    /// Score in `[0, 1)`.
    #[serde(rename = "negative")]
    Negative,
    /// Score in `[1, 2)`.
    #[serde(rename = "somewhat negative")]
    SomewhatNegative,
    /// Score of exactly `2`.
    #[serde(rename = "neutral")]
    Neutral,
    /// Score in `(2, 3]`.
    #[serde(rename = "somewhat positive")]
    SomewhatPositive,
    /// Score in `(3, 4]`.
    #[serde(rename = "positive")]
    Positive,
    /// No known words, or a score outside every band.
    #[serde(rename = "unknown")]
    Unknown,
}

impl Sentiment {
    /// Classify a score into its band.
    pub fn from_score(score: f64) -> Self {
        if (MIN_RATING..SOMEWHAT_NEGATIVE_FLOOR).contains(&score) {
            Sentiment::Negative
        } else if (SOMEWHAT_NEGATIVE_FLOOR..NEUTRAL_SCORE).contains(&score) {
            Sentiment::SomewhatNegative
        } else if score == NEUTRAL_SCORE {
            Sentiment::Neutral
        } else if score > NEUTRAL_SCORE && score <= SOMEWHAT_POSITIVE_CEILING {
            Sentiment::SomewhatPositive
        } else if score > SOMEWHAT_POSITIVE_CEILING && score <= MAX_RATING {
            Sentiment::Positive
        } else {
            Sentiment::Unknown
        }
    }

    /// Human-readable name, e.g. `"somewhat positive"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Sentiment::Negative => "negative",
            Sentiment::SomewhatNegative => "somewhat negative",
            Sentiment::Neutral => "neutral",
            Sentiment::SomewhatPositive => "somewhat positive",
            Sentiment::Positive => "positive",
            Sentiment::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
