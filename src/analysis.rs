//! Text analysis for symptom messages.
//!
//! Tokens, the tokenizer collaborator and the spacing correction applied to a
//! raw message before department resolution.

pub mod spacing;
pub mod token;
pub mod tokenizer;

// Re-export commonly used types
pub use spacing::*;
pub use token::*;
pub use tokenizer::*;
