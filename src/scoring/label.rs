use serde::{Deserialize, Serialize};
use std::fmt;

/// Lowest score (inclusive) labelled Positive.
pub const POSITIVE_THRESHOLD: f64 = 7.0;

/// Lowest score (inclusive) labelled Neutral.
pub const NEUTRAL_THRESHOLD: f64 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl SentimentLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Neutral => "Neutral",
            SentimentLabel::Negative => "Negative",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Label a 1-10 score. Both thresholds are inclusive lower bounds.
pub fn classify(score: f64) -> SentimentLabel {
    if score >= POSITIVE_THRESHOLD {
        SentimentLabel::Positive
    } else if score >= NEUTRAL_THRESHOLD {
        SentimentLabel::Neutral
    } else {
        SentimentLabel::Negative
    }
}
