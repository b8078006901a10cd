pub mod lexicon;
pub mod pattern;

pub use lexicon::{Lexicon, WordEntry};
pub use pattern::PatternAnalyzer;

use thiserror::Error;

/// Raw output of a polarity analyzer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sentiment {
    /// Negative-to-positive strength, in [-1, 1]
    pub polarity: f64,
    /// Opinionated-vs-factual measure, in [0, 1]
    pub subjectivity: f64,
}

impl Sentiment {
    pub fn neutral() -> Self {
        Self {
            polarity: 0.0,
            subjectivity: 0.0,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalyzerError {
    #[error("analyzer returned {field} {value} outside [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{0}")]
    Failed(String),
}

/// Anything that can map a piece of text to a polarity/subjectivity pair.
///
/// Implementations must be safe to call concurrently from many requests;
/// the HTTP service shares a single instance behind an `Arc`.
pub trait PolarityAnalyzer: Send + Sync {
    fn analyze(&self, text: &str) -> Result<Sentiment, AnalyzerError>;
}
