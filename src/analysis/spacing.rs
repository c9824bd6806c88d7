//! Spacing correction for raw symptom messages.

use log::warn;

use crate::analysis::tokenizer::Tokenizer;

/// Re-space `text` by joining its flattened tokens with single spaces.
///
/// Spacing correction never fails: when the tokenizer returns an error the
/// original text is returned unchanged.
pub fn correct_spacing(tokenizer: &dyn Tokenizer, text: &str) -> String {
    match tokenizer.tokenize(text) {
        Ok(tokens) => tokens
            .filter(|token| !token.is_empty())
            .map(|token| token.text)
            .collect::<Vec<_>>()
            .join(" "),
        Err(e) => {
            warn!(
                "Spacing correction with '{}' failed, using original text: {}",
                tokenizer.name(),
                e
            );
            text.to_string()
        }
    }
}
