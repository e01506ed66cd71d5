//! Markdown renderer
//!
//! Line-oriented state machine over the Markdown aggregate. Classifies each
//! line as heading, fenced-code delimiter, code content or plain text, and
//! emits structural events to a `DocumentSink`. Code blocks go through the
//! tokenizer and the style table; a block whose lexer cannot be resolved is
//! emitted as a single unstyled run instead of aborting the document.

use crate::core::error::ConvertError;
use crate::core::model::StyledRun;
use crate::core::style::{style_for, Style};
use crate::highlight::Tokenizer;
use crate::sink::DocumentSink;

/// Heading level used for per-file sections.
pub const HEADING_LEVEL: usize = 2;

const FENCE: &str = "```";

/// Transient per-render state. Created at renderer start, mutated line by
/// line, discarded at end of input.
#[derive(Debug, Default)]
struct RenderState {
    in_code_block: bool,
    language: String,
    buffer: Vec<String>,
}

/// Render a Markdown document into the sink, one pass, no lookahead.
///
/// An unterminated code block at end of input is flushed as-is.
pub fn render_markdown(markdown: &str, tokenizer: &dyn Tokenizer, sink: &mut dyn DocumentSink) {
    let mut state = RenderState::default();

    for line in markdown.lines() {
        if state.in_code_block {
            if line.starts_with(FENCE) {
                flush_code_block(&state, tokenizer, sink);
                state = RenderState::default();
            } else {
                state.buffer.push(line.to_string());
            }
        } else if line.starts_with(FENCE) {
            state.in_code_block = true;
            state.language = line[FENCE.len()..].trim().to_string();
            state.buffer.clear();
        } else if line.starts_with("##") {
            sink.add_heading(line.trim_start_matches('#').trim(), HEADING_LEVEL);
        } else {
            sink.add_paragraph(line);
        }
    }

    if state.in_code_block {
        flush_code_block(&state, tokenizer, sink);
    }
}

/// Tokenize a code block and map each token through the style table.
///
/// Concatenating the run texts in order reproduces `text` exactly.
pub fn render_code_block(
    text: &str,
    language_hint: &str,
    tokenizer: &dyn Tokenizer,
) -> Result<Vec<StyledRun>, ConvertError> {
    let tokens = tokenizer.tokenize(text, language_hint)?;
    Ok(tokens
        .into_iter()
        .map(|token| StyledRun {
            style: style_for(token.category),
            text: token.text,
        })
        .collect())
}

fn flush_code_block(state: &RenderState, tokenizer: &dyn Tokenizer, sink: &mut dyn DocumentSink) {
    let text = state.buffer.join("\n");
    sink.begin_code_block();
    match render_code_block(&text, &state.language, tokenizer) {
        Ok(runs) => {
            for run in runs {
                sink.add_styled_run(&run.text, run.style);
            }
        }
        // recoverable: degrade this block to a single unstyled run
        Err(_) => sink.add_styled_run(&text, Style::default()),
    }
}
