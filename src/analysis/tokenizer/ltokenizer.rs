//! L-tokenizer implementation.
//!
//! Korean words ("eojeol") are usually a content stem on the left followed by
//! a particle or ending on the right: `머리가` is `머리` + `가`. The L-tokenizer
//! splits every whitespace-separated word at the prefix with the highest
//! score, emitting the prefix as a [`TokenPart::Left`] token and the rest as a
//! [`TokenPart::Right`] token.
//!
//! Without any scores every prefix scores zero and the longest one (the whole
//! word) wins, so an unscored L-tokenizer behaves like a whitespace tokenizer.
//!
//! # Examples
//!
//! ```
//! use carematch::analysis::tokenizer::{LTokenizer, Tokenizer};
//!
//! let tokenizer = LTokenizer::from_vocabulary(["머리"]);
//! let texts: Vec<String> = tokenizer
//!     .tokenize("머리가 아파요")
//!     .unwrap()
//!     .map(|t| t.text)
//!     .collect();
//! assert_eq!(texts, vec!["머리", "가", "아파요"]);
//! ```

use std::path::Path;

use ahash::AHashMap;
use unicode_segmentation::UnicodeSegmentation;

use super::Tokenizer;
use super::whitespace::split_words;

use crate::analysis::token::{Token, TokenPart, TokenStream};
use crate::error::{CarematchError, Result};

/// A tokenizer that splits every word into a scored left part and a remainder.
#[derive(Clone, Debug, Default)]
pub struct LTokenizer {
    scores: AHashMap<String, f64>,
}

impl LTokenizer {
    /// Create an L-tokenizer without scores.
    pub fn new() -> Self {
        LTokenizer {
            scores: AHashMap::new(),
        }
    }

    /// Create an L-tokenizer from explicit left-part scores.
    pub fn with_scores<I, S>(scores: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        LTokenizer {
            scores: scores.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// Create an L-tokenizer that scores every vocabulary term 1.0.
    pub fn from_vocabulary<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_scores(terms.into_iter().map(|t| (t, 1.0)))
    }

    /// Load left-part scores from a JSON object of `{"term": score}`.
    pub fn load_scores<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            CarematchError::analysis(format!(
                "Failed to read tokenizer scores '{}': {}",
                path.display(),
                e
            ))
        })?;

        let scores: AHashMap<String, f64> = serde_json::from_str(&content).map_err(|e| {
            CarematchError::analysis(format!(
                "Failed to parse tokenizer scores '{}': {}",
                path.display(),
                e
            ))
        })?;

        Ok(LTokenizer { scores })
    }

    /// Number of scored left parts.
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Whether no left part carries a score.
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Split one word into its left and right parts.
    ///
    /// Ties on score go to the longer prefix; the right part may be empty.
    pub fn split<'a>(&self, word: &'a str) -> (&'a str, &'a str) {
        let mut best = (word, "");
        let mut best_score = f64::NEG_INFINITY;

        for (index, grapheme) in word.grapheme_indices(true) {
            let end = index + grapheme.len();
            let score = self.scores.get(&word[..end]).copied().unwrap_or(0.0);
            // Later prefixes are longer, so `>=` keeps the longest among equals.
            if score >= best_score {
                best_score = score;
                best = word.split_at(end);
            }
        }

        best
    }
}

impl Tokenizer for LTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = Vec::new();

        for (position, (start, word)) in split_words(text).enumerate() {
            let (left, right) = self.split(word);
            let split_at = start + left.len();

            tokens.push(
                Token::with_offsets(left, position, start, split_at).with_part(TokenPart::Left),
            );
            if !right.is_empty() {
                tokens.push(
                    Token::with_offsets(right, position, split_at, start + word.len())
                        .with_part(TokenPart::Right),
                );
            }
        }

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "ltokenizer"
    }
}
