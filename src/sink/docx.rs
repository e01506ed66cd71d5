//! DOCX-backed document sink
//!
//! Builds the document in memory with docx-rs and packs it on `save`.
//! Headings use the `Heading1`/`Heading2` paragraph styles, code blocks a
//! monospaced `CodeBlock` style with one run per styled run.

use std::fs::File;
use std::io;
use std::path::Path;

use docx_rs::{
    BreakType, Docx, Paragraph, Run, RunFonts, Style as ParagraphStyle, StyleType,
};

use crate::core::error::ConvertError;
use crate::core::style::Style;
use crate::sink::DocumentSink;

/// Monospace font size in half-points (10pt).
const CODE_FONT_SIZE: usize = 20;

pub struct DocxSink {
    docx: Docx,
    code: Option<Paragraph>,
}

impl DocxSink {
    pub fn new() -> Self {
        let docx = Docx::new()
            .add_style(
                ParagraphStyle::new("Heading1", StyleType::Paragraph)
                    .name("heading 1")
                    .bold()
                    .size(32),
            )
            .add_style(
                ParagraphStyle::new("Heading2", StyleType::Paragraph)
                    .name("heading 2")
                    .bold()
                    .size(28),
            )
            .add_style(
                ParagraphStyle::new("CodeBlock", StyleType::Paragraph)
                    .name("Code Block")
                    .fonts(RunFonts::new().ascii("Courier New"))
                    .size(CODE_FONT_SIZE),
            );
        Self { docx, code: None }
    }

    /// Close the in-flight code block, if any, and append it.
    fn flush_code(&mut self) {
        if let Some(paragraph) = self.code.take() {
            self.docx = std::mem::take(&mut self.docx).add_paragraph(paragraph);
        }
    }

    fn push_paragraph(&mut self, paragraph: Paragraph) {
        self.flush_code();
        self.docx = std::mem::take(&mut self.docx).add_paragraph(paragraph);
    }
}

impl Default for DocxSink {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentSink for DocxSink {
    fn add_heading(&mut self, text: &str, level: usize) {
        let style_id = format!("Heading{}", level.clamp(1, 2));
        self.push_paragraph(
            Paragraph::new()
                .style(&style_id)
                .add_run(Run::new().add_text(text)),
        );
    }

    fn add_paragraph(&mut self, text: &str) {
        self.push_paragraph(Paragraph::new().add_run(Run::new().add_text(text)));
    }

    fn begin_code_block(&mut self) {
        self.flush_code();
        self.code = Some(Paragraph::new().style("CodeBlock"));
    }

    fn add_styled_run(&mut self, text: &str, style: Style) {
        let paragraph = self
            .code
            .take()
            .unwrap_or_else(|| Paragraph::new().style("CodeBlock"));
        self.code = Some(paragraph.add_run(styled_run(text, style)));
    }

    fn save(&mut self, path: &Path) -> Result<(), ConvertError> {
        self.flush_code();
        let file = File::create(path).map_err(|e| ConvertError::write(path, e))?;
        std::mem::take(&mut self.docx)
            .build()
            .pack(file)
            .map_err(|e| ConvertError::write(path, io::Error::new(io::ErrorKind::Other, e)))?;
        Ok(())
    }
}

/// Build a run, turning embedded newlines into text-wrapping breaks so
/// multi-line tokens keep their line structure.
fn styled_run(text: &str, style: Style) -> Run {
    let mut run = Run::new();
    for (i, piece) in text.split('\n').enumerate() {
        if i > 0 {
            run = run.add_break(BreakType::TextWrapping);
        }
        if !piece.is_empty() {
            run = run.add_text(piece);
        }
    }
    if let Some(color) = style.color {
        run = run.color(color.hex());
    }
    if style.bold {
        run = run.bold();
    }
    run
}
