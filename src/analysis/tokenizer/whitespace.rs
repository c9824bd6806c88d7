//! Whitespace tokenizer implementation.

use super::Tokenizer;

use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// A tokenizer that splits text on whitespace.
#[derive(Clone, Debug, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer.
    pub fn new() -> Self {
        WhitespaceTokenizer
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<Token> = split_words(text)
            .enumerate()
            .map(|(position, (start, word))| {
                Token::with_offsets(word, position, start, start + word.len())
            })
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}

/// Iterate over the whitespace-separated words of `text` with their byte offsets.
pub(crate) fn split_words(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.split_whitespace().map(move |word| {
        // `split_whitespace` yields subslices of `text`, so the pointer
        // difference is the byte offset of the word.
        let start = word.as_ptr() as usize - text.as_ptr() as usize;
        (start, word)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_tokenizer() {
        let tokenizer = WhitespaceTokenizer::new();
        let tokens: Vec<Token> = tokenizer
            .tokenize("머리가  아파요\t열도 나요")
            .unwrap()
            .collect();

        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[0].text, "머리가");
        assert_eq!(tokens[1].text, "아파요");
        assert_eq!(tokens[2].text, "열도");
        assert_eq!(tokens[3].text, "나요");
        assert_eq!(tokens[3].position, 3);
    }

    #[test]
    fn test_offsets_point_into_source() {
        let text = "  기침 가래";
        let tokens: Vec<Token> = WhitespaceTokenizer::new().tokenize(text).unwrap().collect();

        for token in &tokens {
            assert_eq!(&text[token.start_offset..token.end_offset], token.text);
        }
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(WhitespaceTokenizer::new().name(), "whitespace");
    }
}
