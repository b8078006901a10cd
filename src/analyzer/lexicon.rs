use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

const BUILTIN_LEXICON: &str = include_str!("lexicon.yaml");

/// Word-level sentiment lexicon.
///
/// Example YAML:
/// ```yaml
/// negations: [not, "n't", never]
/// intensifiers:
///   very: 1.3
/// words:
///   good: { polarity: 0.7, subjectivity: 0.6 }
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Lexicon {
    /// Words that flip (and dampen) the polarity of the next scored word
    #[serde(default)]
    pub negations: Vec<String>,

    /// Words that scale the next scored word by a multiplier
    #[serde(default)]
    pub intensifiers: HashMap<String, f64>,

    pub words: HashMap<String, WordEntry>,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct WordEntry {
    pub polarity: f64,
    pub subjectivity: f64,
}

impl Lexicon {
    /// The lexicon compiled into the binary.
    pub fn builtin() -> Result<Self> {
        serde_saphyr::from_str(BUILTIN_LEXICON).context("Failed to parse built-in lexicon")
    }

    /// Load a lexicon from a YAML file on disk
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read lexicon file at {}", path.display()))?;

        serde_saphyr::from_str(&content)
            .with_context(|| format!("Failed to parse lexicon: invalid YAML in {}", path.display()))
    }

    /// Load the configured lexicon, or the built-in one when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::from_path(p),
            None => Self::builtin(),
        }
    }

    /// Validate lexicon values before the analyzer is built.
    /// Returns all validation errors at once (not just the first).
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.words.is_empty() {
            errors.push("lexicon.words: must contain at least one entry".to_string());
        }

        let mut seen = HashMap::new();
        let mut words: Vec<_> = self.words.iter().collect();
        words.sort_by(|a, b| a.0.cmp(b.0));
        for (word, entry) in words {
            if let Some(problem) = key_problem(word, &mut seen) {
                errors.push(format!("lexicon.words: {}", problem));
                continue;
            }
            if !(-1.0..=1.0).contains(&entry.polarity) {
                errors.push(format!(
                    "lexicon.words.{}.polarity: {} is outside [-1, 1]",
                    word, entry.polarity
                ));
            }
            if !(0.0..=1.0).contains(&entry.subjectivity) {
                errors.push(format!(
                    "lexicon.words.{}.subjectivity: {} is outside [0, 1]",
                    word, entry.subjectivity
                ));
            }
        }

        let mut seen = HashMap::new();
        let mut intensifiers: Vec<_> = self.intensifiers.iter().collect();
        intensifiers.sort_by(|a, b| a.0.cmp(b.0));
        for (word, multiplier) in intensifiers {
            if let Some(problem) = key_problem(word, &mut seen) {
                errors.push(format!("lexicon.intensifiers: {}", problem));
                continue;
            }
            if !multiplier.is_finite() || *multiplier <= 0.0 {
                errors.push(format!(
                    "lexicon.intensifiers.{}: must be a positive number, got {}",
                    word, multiplier
                ));
            }
        }

        let mut seen = HashMap::new();
        for (i, negation) in self.negations.iter().enumerate() {
            if let Some(problem) = key_problem(negation, &mut seen) {
                errors.push(format!("lexicon.negations[{}]: {}", i, problem));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Tokens are single lowercased words, so a key must be one word and unique
/// once case is ignored.
fn key_problem<'a>(key: &'a str, seen: &mut HashMap<String, &'a str>) -> Option<String> {
    if key.trim().is_empty() {
        return Some("empty word".to_string());
    }
    if key.chars().any(char::is_whitespace) {
        return Some(format!("'{}' contains whitespace", key));
    }
    match seen.entry(key.to_lowercase()) {
        Entry::Occupied(first) => Some(format!(
            "'{}' duplicates '{}' ignoring case",
            key,
            first.get()
        )),
        Entry::Vacant(slot) => {
            slot.insert(key);
            None
        }
    }
}
