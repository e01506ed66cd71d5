//! Repository aggregator
//!
//! Walks a directory tree depth-first, applies the exclusion rules, reads
//! each included file as lossy-decoded text and collects one `FileRecord` per
//! file. Entries are visited in file-name order so two runs over an
//! unmodified tree produce byte-identical Markdown.

use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use crate::core::error::ConvertError;
use crate::core::language::hint_for_extension;
use crate::core::model::{ExclusionRules, FileRecord};
use crate::core::paths::make_relative;

/// The ordered result of a traversal.
#[derive(Debug, Clone, Default)]
pub struct Aggregate {
    pub records: Vec<FileRecord>,
}

impl Aggregate {
    /// Concatenate the Markdown sections of all records, in traversal order.
    pub fn to_markdown(&self) -> String {
        self.records.iter().map(FileRecord::to_markdown).collect()
    }
}

/// Walk `root` and collect every file not matched by `rules`.
///
/// `.env` files are always skipped regardless of the rules. Excluded
/// directories are pruned before descent, so nothing inside them is visited.
/// Unreadable entries are skipped rather than aborting the walk; decoding is
/// lossy and cannot fail. `progress` is invoked once per included file.
pub fn aggregate(
    root: &Path,
    rules: &ExclusionRules,
    mut progress: impl FnMut(&FileRecord),
) -> Result<Aggregate, ConvertError> {
    if !root.is_dir() {
        return Err(ConvertError::NotADirectory(root.to_path_buf()));
    }

    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            !(entry.depth() > 0
                && entry.file_type().is_dir()
                && rules.excludes_directory(&entry.file_name().to_string_lossy()))
        });

    let mut records = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(_) => continue,
        };

        if !entry.file_type().is_file() {
            continue;
        }

        if entry.file_name().to_string_lossy() == ".env" {
            continue;
        }

        let extension = entry
            .path()
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("");
        if rules.excludes_extension(extension) {
            continue;
        }

        let relative_path = match make_relative(entry.path(), root) {
            Some(r) => r,
            None => continue,
        };

        let bytes = match fs::read(entry.path()) {
            Ok(b) => b,
            Err(_) => continue,
        };

        let record = FileRecord {
            relative_path,
            language_hint: hint_for_extension(extension).to_string(),
            content: String::from_utf8_lossy(&bytes).into_owned(),
        };

        progress(&record);
        records.push(record);
    }

    Ok(Aggregate { records })
}
