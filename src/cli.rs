//! CLI module - Command-line interface definitions and handlers

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};

use crate::aggregate::{aggregate, Aggregate};
use crate::config::{self, SessionConfig, CONFIG_FILE};
use crate::core::error::ConvertError;
use crate::core::model::ExclusionRules;
use crate::highlight::syntect::SyntectTokenizer;
use crate::render::render_markdown;
use crate::sink::docx::DocxSink;
use crate::sink::DocumentSink;

/// repodoc - aggregate a repository into Markdown and convert it to DOCX.
#[derive(Parser, Debug)]
#[command(name = "repodoc")]
#[command(
    author,
    version,
    about,
    long_about = r#"repodoc turns a directory tree of source files into a single document.

Stage one walks the repository and emits one Markdown section per file:
a `## relative/path` heading followed by a fenced code block tagged with
the language guessed from the file extension. Stage two renders that
Markdown into a DOCX with per-token syntax coloring.

Settings you pass on the command line are remembered in a small JSON
config file and used as defaults next time.

Examples:
    repodoc markdown . --exclude-dir .git,target -o repo.md
    repodoc docx repo.md -o repo.docx
    repodoc convert . --exclude-ext .lock -o repo.docx
"#
)]
pub struct Cli {
    /// Path to the session config file.
    #[arg(
        long,
        global = true,
        default_value = CONFIG_FILE,
        value_name = "FILE",
        long_help = "Path to the session config file.\n\n\
Values omitted on the command line fall back to this file; the effective\n\
values are written back after a successful run."
    )]
    pub config: PathBuf,

    /// Do not write settings back to the config file.
    #[arg(long, global = true)]
    pub no_save_config: bool,

    /// Quiet mode (suppress per-file progress lines).
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Aggregate a repository into a single Markdown document.
    #[command(
        long_about = "Walk the repository depth-first (entries sorted by file name), skip\n\
excluded directories before descent and excluded extensions before read,\n\
and write one `## path` heading plus fenced code block per file.\n\n\
`.env` files are always skipped. File content is decoded lossily, so\n\
binary files never abort the run.\n\n\
Examples:\n\
  repodoc markdown .\n\
  repodoc markdown ~/src/app --exclude-ext .lock,.min.js -o app.md\n"
    )]
    Markdown {
        /// Repository root (falls back to the configured target).
        #[arg(value_name = "REPO")]
        repo: Option<PathBuf>,

        /// File extensions to exclude (comma-separated, e.g. .exe,.dll).
        #[arg(long, value_name = "EXTS", value_delimiter = ',')]
        exclude_ext: Vec<String>,

        /// Directory names to exclude (comma-separated).
        #[arg(long, value_name = "DIRS", value_delimiter = ',')]
        exclude_dir: Vec<String>,

        /// Output Markdown file (falls back to the configured markdown_out).
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Convert a Markdown file into a styled DOCX document.
    #[command(
        long_about = "Render an existing Markdown file into a DOCX. `##` lines become\n\
headings, fenced code blocks become monospaced paragraphs with per-token\n\
syntax coloring, everything else becomes plain paragraphs.\n\n\
A code block whose language cannot be resolved is emitted unstyled; the\n\
rest of the document still renders.\n\n\
Example:\n\
  repodoc docx repo.md -o repo.docx\n"
    )]
    Docx {
        /// Markdown file to convert.
        #[arg(value_name = "MARKDOWN")]
        input: PathBuf,

        /// Output DOCX file (falls back to the configured docx_out).
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Aggregate a repository and convert it straight to DOCX.
    #[command(
        long_about = "Run both stages in one go: aggregate the repository into Markdown in\n\
memory, then render it to DOCX. Pass --markdown-out to also keep the\n\
intermediate Markdown file.\n\n\
Examples:\n\
  repodoc convert .\n\
  repodoc convert ~/src/app --markdown-out app.md -o app.docx\n"
    )]
    Convert {
        /// Repository root (falls back to the configured target).
        #[arg(value_name = "REPO")]
        repo: Option<PathBuf>,

        /// File extensions to exclude (comma-separated, e.g. .exe,.dll).
        #[arg(long, value_name = "EXTS", value_delimiter = ',')]
        exclude_ext: Vec<String>,

        /// Directory names to exclude (comma-separated).
        #[arg(long, value_name = "DIRS", value_delimiter = ',')]
        exclude_dir: Vec<String>,

        /// Also write the intermediate Markdown to this file.
        #[arg(long, value_name = "FILE")]
        markdown_out: Option<PathBuf>,

        /// Output DOCX file (falls back to the configured docx_out).
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    let mut cfg = config::load(&cli.config);

    match cli.command {
        Commands::Markdown {
            repo,
            exclude_ext,
            exclude_dir,
            output,
        } => {
            let repo = resolve_repo(repo, &cfg)?;
            let rules = resolve_rules(&mut cfg, exclude_ext, exclude_dir);
            let result = run_aggregate(&repo, &rules, cli.quiet)?;

            let out = output.unwrap_or_else(|| PathBuf::from(&cfg.markdown_out));
            write_text(&out, &result.to_markdown())?;
            println!("Markdown document generated: {}", out.display());

            cfg.target = repo.display().to_string();
            cfg.markdown_out = out.display().to_string();
            persist(&cli.config, &cfg, cli.no_save_config)
        }

        Commands::Docx { input, output } => {
            let bytes = fs::read(&input)
                .with_context(|| format!("failed to read {}", input.display()))?;
            let markdown = String::from_utf8_lossy(&bytes);

            let out = output.unwrap_or_else(|| PathBuf::from(&cfg.docx_out));
            render_docx(&markdown, &out)?;
            println!("Word document generated: {}", out.display());

            cfg.docx_out = out.display().to_string();
            persist(&cli.config, &cfg, cli.no_save_config)
        }

        Commands::Convert {
            repo,
            exclude_ext,
            exclude_dir,
            markdown_out,
            output,
        } => {
            let repo = resolve_repo(repo, &cfg)?;
            let rules = resolve_rules(&mut cfg, exclude_ext, exclude_dir);
            let result = run_aggregate(&repo, &rules, cli.quiet)?;
            let markdown = result.to_markdown();

            if let Some(md_out) = &markdown_out {
                write_text(md_out, &markdown)?;
                println!("Markdown document generated: {}", md_out.display());
                cfg.markdown_out = md_out.display().to_string();
            }

            let out = output.unwrap_or_else(|| PathBuf::from(&cfg.docx_out));
            render_docx(&markdown, &out)?;
            println!("Word document generated: {}", out.display());

            cfg.target = repo.display().to_string();
            cfg.docx_out = out.display().to_string();
            persist(&cli.config, &cfg, cli.no_save_config)
        }
    }
}

/// Pick the repository root from the argument or the configured target.
fn resolve_repo(repo: Option<PathBuf>, cfg: &SessionConfig) -> Result<PathBuf> {
    match repo {
        Some(path) => Ok(path),
        None if !cfg.target.is_empty() => Ok(PathBuf::from(&cfg.target)),
        None => bail!("no repository path given and none configured"),
    }
}

/// Merge command-line exclusions with the configured ones. Flags override
/// the config; omitted flags fall back to it. The effective values are
/// stored back into the config for persistence.
fn resolve_rules(
    cfg: &mut SessionConfig,
    exclude_ext: Vec<String>,
    exclude_dir: Vec<String>,
) -> ExclusionRules {
    if !exclude_ext.is_empty() {
        cfg.excluded_extensions = exclude_ext;
    }
    if !exclude_dir.is_empty() {
        cfg.excluded_directories = exclude_dir;
    }
    ExclusionRules::new(
        cfg.excluded_extensions.iter().cloned(),
        cfg.excluded_directories.iter().cloned(),
    )
}

fn run_aggregate(repo: &Path, rules: &ExclusionRules, quiet: bool) -> Result<Aggregate> {
    let result = aggregate(repo, rules, |record| {
        if !quiet {
            eprintln!("Processing {}...", record.relative_path);
        }
    })?;
    Ok(result)
}

fn render_docx(markdown: &str, out: &Path) -> Result<()> {
    let tokenizer = SyntectTokenizer::new();
    let mut sink = DocxSink::new();
    render_markdown(markdown, &tokenizer, &mut sink);
    sink.save(out)?;
    Ok(())
}

fn write_text(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| ConvertError::write(path, e))?;
    Ok(())
}

fn persist(path: &Path, cfg: &SessionConfig, skip: bool) -> Result<()> {
    if skip {
        return Ok(());
    }
    config::save(path, cfg)?;
    Ok(())
}
