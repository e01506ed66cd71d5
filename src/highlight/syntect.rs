//! syntect-backed tokenizer
//!
//! Resolves a syntax definition from the language hint, falling back to
//! first-line detection, and folds syntect's scope stack into the coarse
//! token categories the style table understands.

use syntect::parsing::{ParseState, ScopeStack, SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;

use crate::core::error::ConvertError;
use crate::core::model::{Token, TokenCategory};
use crate::highlight::Tokenizer;

pub struct SyntectTokenizer {
    syntaxes: SyntaxSet,
}

impl SyntectTokenizer {
    pub fn new() -> Self {
        Self {
            syntaxes: SyntaxSet::load_defaults_newlines(),
        }
    }

    /// Resolve a syntax for the hint, or fall back to detection over the
    /// first line of the text.
    fn resolve(&self, text: &str, hint: &str) -> Result<&SyntaxReference, ConvertError> {
        if !hint.is_empty() {
            if let Some(syntax) = self.syntaxes.find_syntax_by_token(hint) {
                return Ok(syntax);
            }
        }
        let first_line = text.lines().next().unwrap_or("");
        self.syntaxes
            .find_syntax_by_first_line(first_line)
            .ok_or(ConvertError::LexerResolution)
    }
}

impl Default for SyntectTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer for SyntectTokenizer {
    fn tokenize(&self, text: &str, language_hint: &str) -> Result<Vec<Token>, ConvertError> {
        let syntax = self.resolve(text, language_hint)?;
        let mut state = ParseState::new(syntax);
        let mut stack = ScopeStack::new();
        let mut tokens: Vec<Token> = Vec::new();

        for line in LinesWithEndings::from(text) {
            let ops = state
                .parse_line(line, &self.syntaxes)
                .map_err(|_| ConvertError::LexerResolution)?;

            // Walk the scope operations, emitting the text region between
            // consecutive operations with the stack that covers it.
            let mut cursor = 0usize;
            for (offset, op) in &ops {
                if *offset > cursor {
                    push_region(&mut tokens, &line[cursor..*offset], &stack);
                    cursor = *offset;
                }
                stack
                    .apply(op)
                    .map_err(|_| ConvertError::LexerResolution)?;
            }
            if cursor < line.len() {
                push_region(&mut tokens, &line[cursor..], &stack);
            }
        }

        Ok(tokens)
    }
}

/// Append a region, merging into the previous token when the category is
/// unchanged so runs stay coarse.
fn push_region(tokens: &mut Vec<Token>, text: &str, stack: &ScopeStack) {
    let category = classify(stack);
    match tokens.last_mut() {
        Some(last) if last.category == category => last.text.push_str(text),
        _ => tokens.push(Token {
            category,
            text: text.to_string(),
        }),
    }
}

/// Fold a scope stack into a token category. The innermost scope wins.
fn classify(stack: &ScopeStack) -> TokenCategory {
    for scope in stack.as_slice().iter().rev() {
        let name = scope.build_string();
        if name.starts_with("comment") {
            return TokenCategory::Comment;
        }
        if name.starts_with("string") {
            return TokenCategory::String;
        }
        if name.starts_with("keyword") || name.starts_with("storage") {
            return TokenCategory::Keyword;
        }
    }
    TokenCategory::Other
}
