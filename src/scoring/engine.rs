use serde::{Deserialize, Serialize};

use super::label::{classify, SentimentLabel};
use crate::analyzer::{AnalyzerError, PolarityAnalyzer, Sentiment};

const SCORE_DECIMALS: i32 = 2;
const RATIO_DECIMALS: i32 = 3;

/// Sentiment of one piece of text, rounded for presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    pub text: String,
    pub sentiment_score: f64, // 1..10, 2 decimal places
    pub sentiment_label: SentimentLabel,
    pub polarity: f64,     // -1..1, 3 decimal places
    pub subjectivity: f64, // 0..1, 3 decimal places
}

/// Map a polarity in [-1, 1] onto the 1-10 score range.
pub fn scale_polarity(polarity: f64) -> f64 {
    ((polarity + 1.0) / 2.0) * 9.0 + 1.0
}

/// Score already-validated text with the given analyzer.
///
/// The label is taken from the unrounded score; only the returned numbers
/// are rounded.
pub fn score(text: &str, analyzer: &dyn PolarityAnalyzer) -> Result<SentimentResult, AnalyzerError> {
    let sentiment = analyzer.analyze(text)?;
    check_range(&sentiment)?;

    let raw_score = scale_polarity(sentiment.polarity);

    Ok(SentimentResult {
        text: text.to_string(),
        sentiment_score: round_to(raw_score, SCORE_DECIMALS),
        sentiment_label: classify(raw_score),
        polarity: round_to(sentiment.polarity, RATIO_DECIMALS),
        subjectivity: round_to(sentiment.subjectivity, RATIO_DECIMALS),
    })
}

fn check_range(sentiment: &Sentiment) -> Result<(), AnalyzerError> {
    // NaN fails `contains`, so non-finite values are rejected here as well
    if !(-1.0..=1.0).contains(&sentiment.polarity) {
        return Err(AnalyzerError::OutOfRange {
            field: "polarity",
            value: sentiment.polarity,
            min: -1.0,
            max: 1.0,
        });
    }
    if !(0.0..=1.0).contains(&sentiment.subjectivity) {
        return Err(AnalyzerError::OutOfRange {
            field: "subjectivity",
            value: sentiment.subjectivity,
            min: 0.0,
            max: 1.0,
        });
    }
    Ok(())
}

/// Round half away from zero to `decimals` places.
fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::testing::{FailingAnalyzer, FixedAnalyzer};
    use crate::analyzer::{Lexicon, PatternAnalyzer};

    #[test]
    fn test_scale_endpoints() {
        assert_eq!(scale_polarity(-1.0), 1.0);
        assert_eq!(scale_polarity(0.0), 5.5);
        assert_eq!(scale_polarity(1.0), 10.0);
    }

    #[test]
    fn test_scale_is_monotonic_and_bounded() {
        let mut previous = scale_polarity(-1.0);
        for i in 1..=200 {
            let p = -1.0 + i as f64 * 0.01;
            let s = scale_polarity(p.min(1.0));
            assert!(s >= previous);
            assert!((1.0..=10.0).contains(&s));
            previous = s;
        }
    }

    #[test]
    fn test_zero_polarity_is_neutral() {
        let result = score("The sky is blue.", &FixedAnalyzer(0.0, 0.0)).unwrap();
        assert_eq!(result.sentiment_score, 5.5);
        assert_eq!(result.sentiment_label, SentimentLabel::Neutral);
    }

    #[test]
    fn test_max_and_min_polarity() {
        let best = score("best", &FixedAnalyzer(1.0, 1.0)).unwrap();
        assert_eq!(best.sentiment_score, 10.0);
        assert_eq!(best.sentiment_label, SentimentLabel::Positive);

        let worst = score("worst", &FixedAnalyzer(-1.0, 1.0)).unwrap();
        assert_eq!(worst.sentiment_score, 1.0);
        assert_eq!(worst.sentiment_label, SentimentLabel::Negative);
    }

    /// Find a polarity within a few ulps of `approx` whose score is exactly `target`.
    fn polarity_scaling_to(target: f64, approx: f64) -> f64 {
        (-16i64..=16)
            .map(|d| f64::from_bits((approx.to_bits() as i64 + d) as u64))
            .find(|p| scale_polarity(*p) == target)
            .expect("no polarity scales exactly to target")
    }

    #[test]
    fn test_boundary_polarities() {
        // 2/3 * 9 + 1 == 7, 1/3 * 9 + 1 == 4
        let p7 = polarity_scaling_to(7.0, 1.0 / 3.0);
        assert_eq!(scale_polarity(p7), 7.0);
        let upper = score("x", &FixedAnalyzer(p7, 0.5)).unwrap();
        assert_eq!(upper.sentiment_score, 7.0);
        assert_eq!(upper.sentiment_label, SentimentLabel::Positive);

        let p4 = polarity_scaling_to(4.0, -1.0 / 3.0);
        assert_eq!(scale_polarity(p4), 4.0);
        let lower = score("x", &FixedAnalyzer(p4, 0.5)).unwrap();
        assert_eq!(lower.sentiment_score, 4.0);
        assert_eq!(lower.sentiment_label, SentimentLabel::Neutral);
    }

    #[test]
    fn test_just_below_boundaries() {
        let below_positive = score("x", &FixedAnalyzer(1.0 / 3.0 - 1e-6, 0.5)).unwrap();
        assert_eq!(below_positive.sentiment_label, SentimentLabel::Neutral);

        let below_neutral = score("x", &FixedAnalyzer(-1.0 / 3.0 - 1e-6, 0.5)).unwrap();
        assert_eq!(below_neutral.sentiment_label, SentimentLabel::Negative);
    }

    #[test]
    fn test_rounding_precision() {
        let result = score("x", &FixedAnalyzer(0.123456, 0.987654)).unwrap();
        assert_eq!(result.polarity, 0.123);
        assert_eq!(result.subjectivity, 0.988);
        // ((0.123456 + 1) / 2) * 9 + 1 = 6.055552
        assert_eq!(result.sentiment_score, 6.06);
    }

    #[test]
    fn test_rounding_down() {
        // ((0.101 + 1) / 2) * 9 + 1 = 5.9545
        let result = score("x", &FixedAnalyzer(0.101, 0.3334)).unwrap();
        assert_eq!(result.sentiment_score, 5.95);
        assert_eq!(result.polarity, 0.101);
        assert_eq!(result.subjectivity, 0.333);
    }

    #[test]
    fn test_label_uses_unrounded_score() {
        // raw score 6.9955 rounds to 7.0 for display but stays Neutral
        let p = (6.9955 - 1.0) / 9.0 * 2.0 - 1.0;
        let result = score("x", &FixedAnalyzer(p, 0.5)).unwrap();
        assert_eq!(result.sentiment_score, 7.0);
        assert_eq!(result.sentiment_label, SentimentLabel::Neutral);
    }

    #[test]
    fn test_text_is_echoed() {
        let result = score("hello", &FixedAnalyzer(0.0, 0.0)).unwrap();
        assert_eq!(result.text, "hello");
    }

    #[test]
    fn test_analyzer_failure_propagates() {
        let err = score("x", &FailingAnalyzer).unwrap_err();
        assert_eq!(err, AnalyzerError::Failed("model unavailable".to_string()));
    }

    #[test]
    fn test_out_of_range_analyzer_output_rejected() {
        let err = score("x", &FixedAnalyzer(1.5, 0.5)).unwrap_err();
        assert!(matches!(err, AnalyzerError::OutOfRange { field: "polarity", .. }));

        let err = score("x", &FixedAnalyzer(0.5, -0.1)).unwrap_err();
        assert!(matches!(err, AnalyzerError::OutOfRange { field: "subjectivity", .. }));

        let err = score("x", &FixedAnalyzer(f64::NAN, 0.5)).unwrap_err();
        assert!(matches!(err, AnalyzerError::OutOfRange { field: "polarity", .. }));
    }

    #[test]
    fn test_idempotent() {
        let analyzer = PatternAnalyzer::new(Lexicon::builtin().unwrap());
        let text = "I love this product! It's amazing and wonderful!";
        assert_eq!(score(text, &analyzer).unwrap(), score(text, &analyzer).unwrap());
    }

    #[test]
    fn test_reference_sentences() {
        let analyzer = PatternAnalyzer::new(Lexicon::builtin().unwrap());

        let positive = score("I love this product! It's amazing and wonderful!", &analyzer).unwrap();
        assert!(positive.sentiment_score >= 7.0);
        assert_eq!(positive.sentiment_label, SentimentLabel::Positive);

        let negative = score("This is terrible and awful. I hate it!", &analyzer).unwrap();
        assert!(negative.sentiment_score < 4.0);
        assert_eq!(negative.sentiment_label, SentimentLabel::Negative);

        let neutral = score("The sky is blue.", &analyzer).unwrap();
        assert!(neutral.sentiment_score >= 4.0 && neutral.sentiment_score < 7.0);
        assert_eq!(neutral.sentiment_label, SentimentLabel::Neutral);
    }
}
