pub mod engine;
pub mod label;
pub mod validation;

pub use engine::{scale_polarity, score, SentimentResult};
pub use label::{classify, SentimentLabel, NEUTRAL_THRESHOLD, POSITIVE_THRESHOLD};
pub use validation::{validate_text, ValidationError};
