//! Text processing utilities for tag tokenization

mod stop_words;

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};
use serde::{Deserialize, Serialize};

use crate::error::TagmatchError;

/// Terms are runs of two or more word characters
static TOKEN_PATTERN: OnceLock<Regex> = OnceLock::new();

static ENGLISH_STOP_WORDS: OnceLock<HashSet<&'static str>> = OnceLock::new();

/// Snowball stemmer for English text
static STEMMER: OnceLock<Stemmer> = OnceLock::new();

fn token_pattern() -> &'static Regex {
    TOKEN_PATTERN.get_or_init(|| Regex::new(r"\b\w\w+\b").expect("valid token pattern"))
}

fn english_stop_words() -> &'static HashSet<&'static str> {
    ENGLISH_STOP_WORDS.get_or_init(|| stop_words::ENGLISH.iter().copied().collect())
}

fn get_stemmer() -> &'static Stemmer {
    STEMMER.get_or_init(|| Stemmer::create(Algorithm::English))
}

/// Stop-word list applied before term weighting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StopWords {
    /// Common English function words
    #[default]
    English,
    /// Keep every term
    None,
}

impl StopWords {
    pub fn contains(&self, term: &str) -> bool {
        match self {
            StopWords::English => english_stop_words().contains(term),
            StopWords::None => false,
        }
    }
}

impl std::str::FromStr for StopWords {
    type Err = TagmatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "english" => Ok(StopWords::English),
            "none" => Ok(StopWords::None),
            other => Err(TagmatchError::invalid_value("stop_words", other)),
        }
    }
}

impl std::fmt::Display for StopWords {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StopWords::English => write!(f, "english"),
            StopWords::None => write!(f, "none"),
        }
    }
}

/// Options controlling how tag strings become terms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TokenizerOptions {
    #[serde(default)]
    pub stop_words: StopWords,
    /// Reduce terms to their English stem ("shoes" -> "shoe")
    #[serde(default)]
    pub stemming: bool,
}

/// Lowercase, split into terms of two or more word characters, drop stop words
pub fn tokenize(text: &str, stop_words: StopWords) -> Vec<String> {
    let lowered = text.to_lowercase();
    token_pattern()
        .find_iter(&lowered)
        .map(|m| m.as_str())
        .filter(|term| !stop_words.contains(term))
        .map(|term| term.to_string())
        .collect()
}

/// Tokenize with the full option set, applying stemming after stop-word removal
pub fn tokenize_with(text: &str, options: &TokenizerOptions) -> Vec<String> {
    let tokens = tokenize(text, options.stop_words);
    if !options.stemming {
        return tokens;
    }

    let stemmer = get_stemmer();
    tokens.iter().map(|t| stemmer.stem(t).to_string()).collect()
}
