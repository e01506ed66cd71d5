//! Tokenizer adapter
//!
//! The renderer only depends on the `Tokenizer` trait; the syntect-backed
//! implementation lives in `syntect.rs` and is interchangeable.

pub mod syntect;

use crate::core::error::ConvertError;
use crate::core::model::Token;

/// Classifies code text into an ordered sequence of (category, text) tokens.
///
/// Contract: the returned tokens cover every character of `text` exactly
/// once, in original order, with no gaps and no overlaps. Fails with
/// `ConvertError::LexerResolution` when no lexer matches the hint and
/// automatic detection is unsupported for the text.
pub trait Tokenizer {
    fn tokenize(&self, text: &str, language_hint: &str) -> Result<Vec<Token>, ConvertError>;
}
