use std::io::IsTerminal;
use owo_colors::OwoColorize;

use crate::scoring::{SentimentLabel, SentimentResult};

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format a score as "8.65/10"
pub fn format_score(score: f64) -> String {
    format!("{:.2}/10", score)
}

/// Multi-line summary of a scored text
/// Format: "{label} {score}/10" then polarity, subjectivity and the text itself
pub fn format_result(result: &SentimentResult, use_colors: bool) -> String {
    let score = format_score(result.sentiment_score);

    if use_colors {
        let label = match result.sentiment_label {
            SentimentLabel::Positive => result.sentiment_label.as_str().green().bold().to_string(),
            SentimentLabel::Neutral => result.sentiment_label.as_str().yellow().bold().to_string(),
            SentimentLabel::Negative => result.sentiment_label.as_str().red().bold().to_string(),
        };
        format!(
            "{} {}\n  Polarity: {}\n  Subjectivity: {}\n  Text: {}",
            label,
            score.bold(),
            result.polarity,
            result.subjectivity,
            result.text.dimmed()
        )
    } else {
        format!(
            "{} {}\n  Polarity: {}\n  Subjectivity: {}\n  Text: {}",
            result.sentiment_label, score, result.polarity, result.subjectivity, result.text
        )
    }
}

/// The same JSON document `POST /analyze` returns
pub fn format_json(result: &SentimentResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(result)
}
