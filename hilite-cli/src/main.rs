//! Hilite CLI - Command line interface
//!
//! Tokenizes a source file (or stdin) with a registered language rule set.

use clap::Parser;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process;

mod config;
mod error;
mod logging;
mod output;

use crate::config::FileConfig;
use crate::error::CliError;
use crate::logging::LogFormat;
use crate::output::OutputFormat;
use hilite_config::LogLevel;
use hilite_core::Highlighter;
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(
    name = "hilite",
    about = "Tokenize source code with registered highlighting rule sets",
    version
)]
struct Cli {
    /// Source file to tokenize (reads stdin when omitted)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Language alias, e.g. `asm` or `att`
    #[arg(short, long, value_name = "ALIAS")]
    lang: Option<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Configuration file path (default: ./hilite.json when present)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Log level: silent, error, warn, info, debug, trace
    #[arg(long, value_name = "LEVEL", value_parser = parse_log_level)]
    log_level: Option<LogLevel>,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,

    /// List registered language aliases and exit
    #[arg(long)]
    list: bool,
}

fn parse_log_level(s: &str) -> Result<LogLevel, String> {
    LogLevel::parse(s).ok_or_else(|| format!("unknown log level '{s}'"))
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let file_config = config::load(cli.config.as_deref())?;

    let log_format = if cli.log_json {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };
    logging::init(&file_config.log_config(cli.log_level), log_format);

    let highlighter = Highlighter::new(file_config.highlight.clone())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.list {
        for alias in highlighter.languages() {
            writeln!(out, "{alias}")?;
        }
        return Ok(());
    }

    let language = resolve_language(cli.lang.as_deref(), &file_config, cli.file.as_deref())?;
    let source = read_source(cli.file.as_deref())?;
    info!(target: "hilite::cli", %language, bytes = source.len(), "Highlighting");

    let format = cli.format.or(file_config.format).unwrap_or_default();
    let highlighted = highlighter.highlight(&language, &source)?;
    debug!(target: "hilite::cli", tokens = highlighted.tokens.len(), ?format, "Writing output");

    match format {
        OutputFormat::Text => output::write_text(&mut out, &highlighted)?,
        OutputFormat::Json => output::write_json(&mut out, &highlighted)?,
        OutputFormat::Decorations => {
            let decorations = highlighted.decorations(highlighter.config().merge_decorations);
            output::write_decorations(&mut out, &decorations)?
        }
    }
    out.flush()?;
    Ok(())
}

/// `--lang`, then the config file, then the file extension
fn resolve_language(
    flag: Option<&str>,
    file_config: &FileConfig,
    file: Option<&Path>,
) -> Result<String, CliError> {
    flag.map(str::to_string)
        .or_else(|| file_config.language.clone())
        .or_else(|| {
            file.and_then(Path::extension)
                .and_then(|ext| ext.to_str())
                .map(alias_for_extension)
        })
        .ok_or(CliError::MissingLanguage)
}

/// Language alias for a file extension; unknown extensions pass through
fn alias_for_extension(ext: &str) -> String {
    match ext.to_ascii_lowercase().as_str() {
        "s" | "asm" => "asm".to_string(),
        other => other.to_string(),
    }
}

fn read_source(file: Option<&Path>) -> Result<String, CliError> {
    match file {
        Some(path) => std::fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        }),
        None => {
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .map_err(|e| CliError::Io {
                    path: PathBuf::from("<stdin>"),
                    source: e,
                })?;
            Ok(source)
        }
    }
}
