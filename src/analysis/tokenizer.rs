//! Tokenizer implementations for symptom text.
//!
//! The tokenizer is the one external collaborator the resolver depends on. It
//! is used twice per request: flattened, to correct the spacing of the raw
//! message, and token by token, to extract synonym keywords.
//!
//! # Available Tokenizers
//!
//! - [`whitespace::WhitespaceTokenizer`] - Splits on whitespace characters
//! - [`ltokenizer::LTokenizer`] - Splits every word into a scored left part and a remainder
//!
//! # Examples
//!
//! ```
//! use carematch::analysis::tokenizer::Tokenizer;
//! use carematch::analysis::tokenizer::whitespace::WhitespaceTokenizer;
//!
//! let tokenizer = WhitespaceTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("머리가 아파요").unwrap().collect();
//! assert_eq!(tokens.len(), 2);
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` so one tokenizer can serve concurrent
/// requests without coordination.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod ltokenizer;
pub mod whitespace;

pub use ltokenizer::LTokenizer;
pub use whitespace::WhitespaceTokenizer;
