//! Token types for symptom text analysis.
//!
//! Tokens are what the tokenizer collaborator hands back to the resolver:
//! spacing correction joins their texts, keyword extraction looks each one up
//! in the synonym index.
//!
//! # Core Types
//!
//! - [`Token`] - A single token with text, word position and byte offsets
//! - [`TokenPart`] - Which part of a whitespace-separated word the token is
//! - [`TokenStream`] - Type alias for boxed iterator of tokens
//!
//! # Word parts
//!
//! Korean words ("eojeol") usually carry a content part on the left and a
//! particle or ending on the right. An L-tokenizer emits both parts with the
//! same word position:
//!
//! ```text
//! Input: "머리가 아파요"
//!
//!   Position 0: "머리" (Left)
//!   Position 0: "가"   (Right)
//!   Position 1: "아파요" (Left)
//! ```
//!
//! # Examples
//!
//! ```
//! use carematch::analysis::token::{Token, TokenPart};
//!
//! let token = Token::with_offsets("머리", 0, 0, 6).with_part(TokenPart::Left);
//! assert_eq!(token.text, "머리");
//! assert_eq!(token.part, TokenPart::Left);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A token represents a single unit of text after tokenization.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// Index of the whitespace-separated word this token came from (0-based)
    pub position: usize,

    /// The byte offset where this token starts in the original text
    pub start_offset: usize,

    /// The byte offset where this token ends in the original text
    pub end_offset: usize,

    /// Which part of the word this token covers
    pub part: TokenPart,
}

/// Role of a token inside its word.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenPart {
    /// The whole word, no split applied
    #[default]
    Whole,
    /// Left (content) part of a split word
    Left,
    /// Right (particle/ending) part of a split word
    Right,
}

impl Token {
    /// Create a new token with the given text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset: 0,
            end_offset: 0,
            part: TokenPart::Whole,
        }
    }

    /// Create a new token with text, position, and byte offsets.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset,
            end_offset,
            part: TokenPart::Whole,
        }
    }

    /// Set the word part of this token.
    pub fn with_part(mut self, part: TokenPart) -> Self {
        self.part = part;
        self
    }

    /// Get the length of the token text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the token is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A token stream represents a sequence of tokens produced by a tokenizer.
pub type TokenStream = Box<dyn Iterator<Item = Token> + Send>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_creation() {
        let token = Token::new("두통", 0);
        assert_eq!(token.text, "두통");
        assert_eq!(token.position, 0);
        assert_eq!(token.start_offset, 0);
        assert_eq!(token.end_offset, 0);
        assert_eq!(token.part, TokenPart::Whole);
    }

    #[test]
    fn test_token_with_offsets() {
        let token = Token::with_offsets("아파요", 1, 10, 19).with_part(TokenPart::Left);
        assert_eq!(token.position, 1);
        assert_eq!(token.start_offset, 10);
        assert_eq!(token.end_offset, 19);
        assert_eq!(token.part, TokenPart::Left);
        assert_eq!(token.len(), 9);
    }

    #[test]
    fn test_token_display() {
        let token = Token::new("기침", 0);
        assert_eq!(format!("{token}"), "기침");
    }
}
