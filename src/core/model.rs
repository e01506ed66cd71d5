//! Intermediate document model
//!
//! The aggregator produces one `FileRecord` per included file; the renderer
//! consumes their Markdown form and turns code blocks into `StyledRun`s via
//! the tokenizer.

use std::collections::HashSet;

/// One included file, captured during traversal.
///
/// Immutable once created; owned by the aggregate until handed to the
/// renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// Path relative to the repository root, using '/' as separator
    pub relative_path: String,

    /// Language hint derived from the file extension (may be empty)
    pub language_hint: String,

    /// Raw text content, lossy-decoded
    pub content: String,
}

impl FileRecord {
    /// Render this record as its Markdown section: a `##` heading followed by
    /// a fenced code block tagged with the language hint.
    ///
    /// Embedded triple backticks in the content are not escaped.
    pub fn to_markdown(&self) -> String {
        format!(
            "## {}\n\n```{}\n{}\n```\n\n",
            self.relative_path, self.language_hint, self.content
        )
    }
}

/// Exclusion rules applied during traversal.
///
/// Extension matching is case-insensitive and tolerates a leading dot, so
/// ".PY" and "py" describe the same rule. Directory matching is exact on the
/// directory name and applies before descent.
#[derive(Debug, Clone, Default)]
pub struct ExclusionRules {
    extensions: HashSet<String>,
    directories: HashSet<String>,
}

impl ExclusionRules {
    pub fn new(
        extensions: impl IntoIterator<Item = String>,
        directories: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            extensions: extensions
                .into_iter()
                .map(|e| e.trim().trim_start_matches('.').to_lowercase())
                .filter(|e| !e.is_empty())
                .collect(),
            directories: directories
                .into_iter()
                .map(|d| d.trim().to_string())
                .filter(|d| !d.is_empty())
                .collect(),
        }
    }

    /// Check a file extension (without the leading dot) against the rules.
    pub fn excludes_extension(&self, extension: &str) -> bool {
        !extension.is_empty() && self.extensions.contains(&extension.to_lowercase())
    }

    /// Check a directory name against the rules.
    pub fn excludes_directory(&self, name: &str) -> bool {
        self.directories.contains(name)
    }
}

/// Lexical classification assigned to a substring of source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenCategory {
    Keyword,
    String,
    Comment,
    Other,
}

/// One (category, text) pair produced by the tokenizer.
///
/// A token sequence covers every character of its input exactly once, in
/// original order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub category: TokenCategory,
    pub text: String,
}

/// A piece of code-block text with its presentation style attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledRun {
    pub text: String,
    pub style: crate::core::style::Style,
}
