//! Session configuration persistence
//!
//! A small key-value JSON file remembers the last session's settings. It is
//! read once at session start and written back at session end; a missing or
//! corrupt file is not an error, the defaults apply.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::error::ConvertError;

/// Default config file name, resolved relative to the working directory.
pub const CONFIG_FILE: &str = "code_convert_config.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Repository root of the last run
    #[serde(default)]
    pub target: String,

    #[serde(default)]
    pub excluded_extensions: Vec<String>,

    #[serde(default = "default_excluded_directories")]
    pub excluded_directories: Vec<String>,

    #[serde(default = "default_markdown_out")]
    pub markdown_out: String,

    #[serde(default = "default_docx_out")]
    pub docx_out: String,
}

fn default_excluded_directories() -> Vec<String> {
    vec![".git".to_string()]
}

fn default_markdown_out() -> String {
    "output.md".to_string()
}

fn default_docx_out() -> String {
    "output.docx".to_string()
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            target: String::new(),
            excluded_extensions: Vec::new(),
            excluded_directories: default_excluded_directories(),
            markdown_out: default_markdown_out(),
            docx_out: default_docx_out(),
        }
    }
}

/// Load the session config, falling back to defaults when the file is
/// missing or unparsable.
pub fn load(path: &Path) -> SessionConfig {
    fs::read_to_string(path)
        .ok()
        .and_then(|s| serde_json::from_str(&s).ok())
        .unwrap_or_default()
}

/// Persist the session config as pretty-printed JSON.
pub fn save(path: &Path, config: &SessionConfig) -> Result<(), ConvertError> {
    let json = serde_json::to_string_pretty(config)
        .map_err(|e| ConvertError::write(path, std::io::Error::new(std::io::ErrorKind::Other, e)))?;
    fs::write(path, json).map_err(|e| ConvertError::write(path, e))
}
