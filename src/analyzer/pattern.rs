use std::collections::{HashMap, HashSet};

use super::lexicon::{Lexicon, WordEntry};
use super::{AnalyzerError, PolarityAnalyzer, Sentiment};

/// Polarity multiplier applied to a negated word ("not good" is mildly negative).
const NEGATION_FACTOR: f64 = -0.5;

/// Negation token produced when splitting contractions like "isn't".
const CONTRACTED_NEGATION: &str = "n't";

/// Lexicon-driven analyzer: averages the assessments of every scored word,
/// honoring negations and intensifiers that precede them within a clause.
#[derive(Debug, Clone)]
pub struct PatternAnalyzer {
    words: HashMap<String, WordEntry>,
    intensifiers: HashMap<String, f64>,
    negations: HashSet<String>,
}

impl PatternAnalyzer {
    pub fn new(lexicon: Lexicon) -> Self {
        Self {
            words: lexicon
                .words
                .into_iter()
                .map(|(w, e)| (w.to_lowercase(), e))
                .collect(),
            intensifiers: lexicon
                .intensifiers
                .into_iter()
                .map(|(w, m)| (w.to_lowercase(), m))
                .collect(),
            negations: lexicon
                .negations
                .into_iter()
                .map(|w| w.to_lowercase())
                .collect(),
        }
    }

    fn assess(&self, text: &str) -> Vec<Sentiment> {
        let mut assessments = Vec::new();

        for clause in clauses(text) {
            let mut negated = false;
            let mut modifier: Option<f64> = None;

            for token in tokenize(clause) {
                if self.negations.contains(&token) {
                    negated = true;
                } else if let Some(multiplier) = self.intensifiers.get(&token) {
                    modifier = Some(modifier.unwrap_or(1.0) * multiplier);
                } else if let Some(entry) = self.words.get(&token) {
                    let m = modifier.take().unwrap_or(1.0);
                    let mut polarity = entry.polarity * m;
                    if negated {
                        polarity *= NEGATION_FACTOR;
                        negated = false;
                    }
                    assessments.push(Sentiment {
                        polarity: polarity.clamp(-1.0, 1.0),
                        subjectivity: (entry.subjectivity * m).clamp(0.0, 1.0),
                    });
                }
            }
        }

        assessments
    }
}

impl PolarityAnalyzer for PatternAnalyzer {
    fn analyze(&self, text: &str) -> Result<Sentiment, AnalyzerError> {
        let assessments = self.assess(text);
        if assessments.is_empty() {
            return Ok(Sentiment::neutral());
        }

        let n = assessments.len() as f64;
        let polarity = assessments.iter().map(|a| a.polarity).sum::<f64>() / n;
        let subjectivity = assessments.iter().map(|a| a.subjectivity).sum::<f64>() / n;

        Ok(Sentiment {
            polarity: polarity.clamp(-1.0, 1.0),
            subjectivity: subjectivity.clamp(0.0, 1.0),
        })
    }
}

/// Split text at clause punctuation; negation and intensity never cross these.
fn clauses(text: &str) -> impl Iterator<Item = &str> {
    text.split(['.', '!', '?', ';', ':', '\n'])
        .filter(|c| !c.trim().is_empty())
}

/// Lowercase word tokens. "isn't" becomes ["is", "n't"]; "it's" becomes ["it"].
fn tokenize(clause: &str) -> Vec<String> {
    let mut tokens = Vec::new();

    let raw = clause
        .split(|c: char| !(c.is_alphanumeric() || c == '\'' || c == '\u{2019}'))
        .filter(|t| !t.is_empty());

    for word in raw {
        let word = word.replace('\u{2019}', "'").to_lowercase();
        let word = word.trim_matches('\'');
        if word.is_empty() {
            continue;
        }

        if let Some(stem) = word.strip_suffix(CONTRACTED_NEGATION) {
            if !stem.is_empty() {
                tokens.push(stem.to_string());
            }
            tokens.push(CONTRACTED_NEGATION.to_string());
        } else if let Some((stem, _suffix)) = word.split_once('\'') {
            tokens.push(stem.to_string());
        } else {
            tokens.push(word.to_string());
        }
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builtin() -> PatternAnalyzer {
        PatternAnalyzer::new(Lexicon::builtin().unwrap())
    }

    fn small_lexicon() -> Lexicon {
        let yaml = r#"
negations: [not, "n't"]
intensifiers:
  very: 1.5
words:
  good: { polarity: 0.6, subjectivity: 0.6 }
  bad: { polarity: -0.6, subjectivity: 0.4 }
"#;
        serde_saphyr::from_str(yaml).unwrap()
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_tokenize_contractions() {
        assert_eq!(tokenize("It isn't bad"), vec!["it", "is", "n't", "bad"]);
        assert_eq!(tokenize("It's AMAZING"), vec!["it", "amazing"]);
        assert_eq!(tokenize("don\u{2019}t"), vec!["do", "n't"]);
        assert_eq!(tokenize("'quoted'"), vec!["quoted"]);
    }

    #[test]
    fn test_clauses_split_on_punctuation() {
        let parts: Vec<_> = clauses("One. Two! Three? ").collect();
        assert_eq!(parts.len(), 3);
    }

    #[test]
    fn test_no_scored_words_is_neutral() {
        let result = builtin().analyze("The sky is blue.").unwrap();
        assert_eq!(result, Sentiment::neutral());
    }

    #[test]
    fn test_average_of_assessments() {
        let analyzer = PatternAnalyzer::new(small_lexicon());
        let result = analyzer.analyze("good and bad").unwrap();
        assert!(approx(result.polarity, 0.0));
        assert!(approx(result.subjectivity, 0.5));
    }

    #[test]
    fn test_negation_flips_and_dampens() {
        let analyzer = PatternAnalyzer::new(small_lexicon());
        let result = analyzer.analyze("not good").unwrap();
        assert!(approx(result.polarity, -0.3));
        assert!(approx(result.subjectivity, 0.6));

        let contracted = analyzer.analyze("it isn't good").unwrap();
        assert!(approx(contracted.polarity, -0.3));
    }

    #[test]
    fn test_negation_does_not_cross_clauses() {
        let analyzer = PatternAnalyzer::new(small_lexicon());
        let result = analyzer.analyze("Not really. Good").unwrap();
        assert!(approx(result.polarity, 0.6));
    }

    #[test]
    fn test_negation_applies_to_one_word_only() {
        let analyzer = PatternAnalyzer::new(small_lexicon());
        let result = analyzer.analyze("not good, good").unwrap();
        assert!(approx(result.polarity, (-0.3 + 0.6) / 2.0));
    }

    #[test]
    fn test_intensifier_scales_and_clamps() {
        let analyzer = PatternAnalyzer::new(small_lexicon());
        let result = analyzer.analyze("very good").unwrap();
        assert!(approx(result.polarity, 0.9));
        assert!(approx(result.subjectivity, 0.9));

        let stacked = analyzer.analyze("very very good").unwrap();
        assert!(approx(stacked.polarity, 1.0));
        assert!(approx(stacked.subjectivity, 1.0));
    }

    #[test]
    fn test_case_insensitive_lookup() {
        let analyzer = PatternAnalyzer::new(small_lexicon());
        let lower = analyzer.analyze("good").unwrap();
        let upper = analyzer.analyze("GOOD").unwrap();
        assert_eq!(lower, upper);
    }

    #[test]
    fn test_positive_sentence() {
        let result = builtin()
            .analyze("I love this product! It's amazing and wonderful!")
            .unwrap();
        assert!(approx(result.polarity, 0.7));
        assert!(result.subjectivity > 0.8);
    }

    #[test]
    fn test_negative_sentence() {
        let result = builtin()
            .analyze("This is terrible and awful. I hate it!")
            .unwrap();
        assert!(result.polarity < -0.9);
    }

    #[test]
    fn test_output_within_ranges() {
        let analyzer = builtin();
        for text in [
            "Absolutely fantastic!",
            "This is okay.",
            "Completely horrible!",
            "extremely extremely extremely awesome",
            "not not not bad",
            "",
        ] {
            let result = analyzer.analyze(text).unwrap();
            assert!((-1.0..=1.0).contains(&result.polarity), "{}", text);
            assert!((0.0..=1.0).contains(&result.subjectivity), "{}", text);
        }
    }

    #[test]
    fn test_deterministic() {
        let analyzer = builtin();
        let text = "Pretty good, but the ending was disappointing.";
        assert_eq!(analyzer.analyze(text).unwrap(), analyzer.analyze(text).unwrap());
    }
}
