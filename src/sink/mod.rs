//! Document sink adapter
//!
//! The renderer emits structural events through the `DocumentSink` trait and
//! never touches a concrete writer. `docx.rs` provides the DOCX-backed sink.

pub mod docx;

use std::path::Path;

use crate::core::error::ConvertError;
use crate::core::style::Style;

/// Receives structural events and produces the final persisted document.
///
/// Styled runs accumulate into the current code-block context, which
/// `begin_code_block` opens and the next heading/paragraph closes.
pub trait DocumentSink {
    fn add_heading(&mut self, text: &str, level: usize);
    fn add_paragraph(&mut self, text: &str);
    fn begin_code_block(&mut self);
    fn add_styled_run(&mut self, text: &str, style: Style);

    /// Persist the accumulated document. Fails with `ConvertError::Write`.
    fn save(&mut self, path: &Path) -> Result<(), ConvertError>;
}
