//! `json-dotpath` — print the node a dotted path selects in a JSON document.
//!
//! Exit codes: `0` found, `1` not found, `2` path error, `3` input error.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use json_dotpath::{resolve, Mode};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info};

const EXIT_NOT_FOUND: u8 = 1;
const EXIT_PATH_ERROR: u8 = 2;
const EXIT_INPUT_ERROR: u8 = 3;

/// Resolve a dotted path (`a.b[0,1].c`) against a JSON document.
#[derive(Parser, Debug)]
#[command(name = "json-dotpath")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path expression, e.g. `store.books[0].title`
    #[arg(value_name = "PATH")]
    path: String,

    /// Read the document from FILE instead of stdin
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    file: Option<PathBuf>,

    /// Resolution mode: strict or lenient
    #[arg(
        short = 'm',
        long = "mode",
        value_name = "MODE",
        env = "JSON_DOTPATH_MODE",
        default_value_t = Mode::Lenient
    )]
    mode: Mode,

    /// Shorthand for `--mode strict`
    #[arg(short = 's', long = "strict", action = ArgAction::SetTrue)]
    strict: bool,

    /// Print the result on a single line
    #[arg(long = "compact", action = ArgAction::SetTrue)]
    compact: bool,

    /// Log level used when RUST_LOG is not set: trace, debug, info, warn, error
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", default_value = "warn")]
    log_level: String,
}

#[derive(Debug, Error)]
enum InputError {
    #[error("cannot read input: {0}")]
    Io(#[from] io::Error),
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let mode = if cli.strict { Mode::Strict } else { cli.mode };
    let doc = match read_document(cli.file.as_deref()) {
        Ok(doc) => doc,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::from(EXIT_INPUT_ERROR);
        }
    };
    debug!(path = %cli.path, %mode, "resolving");

    match resolve(&doc, &cli.path, mode) {
        Ok(Some(node)) => match render(node, cli.compact) {
            Ok(text) => {
                println!("{text}");
                ExitCode::SUCCESS
            }
            Err(err) => {
                eprintln!("error: {err}");
                ExitCode::from(EXIT_INPUT_ERROR)
            }
        },
        Ok(None) => {
            info!(path = %cli.path, "no node at path");
            ExitCode::from(EXIT_NOT_FOUND)
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(EXIT_PATH_ERROR)
        }
    }
}

fn init_logging(level: &str) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr))
        .init();
}

fn read_document(file: Option<&Path>) -> Result<Value, InputError> {
    let text = match file {
        Some(file) => fs::read_to_string(file)?,
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            text
        }
    };
    Ok(serde_json::from_str(&text)?)
}

fn render(node: &Value, compact: bool) -> Result<String, serde_json::Error> {
    if compact {
        serde_json::to_string(node)
    } else {
        serde_json::to_string_pretty(node)
    }
}
