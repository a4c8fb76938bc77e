//! `dynjson` - read, write and compare JSON documents through dot paths.
//!
//! Usage:
//!   dynjson get <PATH> [--file F] [--compact]
//!   dynjson set <PATH> <VALUE> [--file F] [--compact]
//!   dynjson eq <LEFT> <RIGHT> [--coerce] [--delta D]
//!
//! Documents are read from stdin unless `--file` is given. `eq` exits with
//! status 0 when the documents are equal and 1 otherwise. Log verbosity is
//! controlled with `RUST_LOG`.

use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use dynamic_json::cli::{self, Comparison};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the value at a dot path.
    Get {
        path: String,
        /// Read the document from this file instead of stdin.
        #[arg(long)]
        file: Option<PathBuf>,
        #[arg(long)]
        compact: bool,
    },
    /// Write a value at a dot path and print the new document.
    Set {
        path: String,
        /// JSON text, or a plain string when it does not parse.
        value: String,
        #[arg(long)]
        file: Option<PathBuf>,
        #[arg(long)]
        compact: bool,
    },
    /// Compare two JSON documents.
    Eq {
        left: String,
        right: String,
        /// Treat integers as equal to their string and boolean spellings.
        #[arg(long, conflicts_with = "delta")]
        coerce: bool,
        /// Accept numbers involving a float that are at most this far apart.
        #[arg(long)]
        delta: Option<f64>,
    },
}

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_document(file: Option<&PathBuf>) -> anyhow::Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read file `{}`", path.display())),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read the document from stdin")?;
            Ok(buf)
        }
    }
}

fn print(text: &str) -> anyhow::Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.write_all(b"\n")?;
    Ok(())
}

fn main() -> anyhow::Result<ExitCode> {
    setup_logging();

    let args = Args::parse();
    debug!(?args);

    match args.command {
        Command::Get { path, file, compact } => {
            let doc = read_document(file.as_ref())?;
            let out = cli::get(&doc, &path, compact).context("get failed")?;
            print(&out)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Set {
            path,
            value,
            file,
            compact,
        } => {
            let doc = read_document(file.as_ref())?;
            let out = cli::set(&doc, &path, &value, compact).context("set failed")?;
            print(&out)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Eq {
            left,
            right,
            coerce,
            delta,
        } => {
            let comparison = match (coerce, delta) {
                (_, Some(delta)) => Comparison::Tolerant(delta),
                (true, None) => Comparison::Coercing,
                (false, None) => Comparison::Strict,
            };
            let equal = cli::compare(&left, &right, comparison).context("eq failed")?;
            print(if equal { "equal" } else { "different" })?;
            Ok(if equal { ExitCode::SUCCESS } else { ExitCode::FAILURE })
        }
    }
}
