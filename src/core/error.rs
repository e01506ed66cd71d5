//! Error taxonomy for a conversion run
//!
//! Fatal conditions (`NotADirectory`, `Write`) abort the run. `LexerResolution`
//! is recoverable: it is contained to a single code block, which the renderer
//! emits as one unstyled run. Decoding never fails; undecodable byte sequences
//! are replaced during the lossy read.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    /// The repository root does not reference an existing directory.
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    /// No lexer matched the language hint and automatic detection failed.
    #[error("no lexer matched the code block")]
    LexerResolution,

    /// Writing an output file failed.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConvertError {
    /// Wrap an I/O error as a write failure for the given path.
    pub fn write(path: &std::path::Path, source: std::io::Error) -> Self {
        ConvertError::Write {
            path: path.to_path_buf(),
            source,
        }
    }
}
