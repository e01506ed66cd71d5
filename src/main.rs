//! repodoc - Convert a repository into a single consolidated document
//!
//! repodoc provides:
//! - Repository aggregation into fenced-code-block Markdown
//! - Markdown rendering into a DOCX with per-token syntax coloring
//! - A session config file that remembers the last run's settings

use anyhow::Result;
use clap::Parser;

mod aggregate;
mod cli;
mod config;
mod core;
mod highlight;
mod render;
mod sink;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::run(cli)
}
