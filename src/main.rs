use std::fs;
use std::io::{self, Read, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use itertools::Itertools;
use tracing::info;

use nestmatch::MatcherBuilder;

mod telemetry;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Extended pattern, e.g. 'query\s+\w+[{:nested:}]'
    #[arg(value_name = "PATTERN")]
    pattern: String,

    /// File to search (reads stdin when omitted)
    #[arg(value_name = "FILE")]
    file: Option<String>,

    /// Print byte offsets as start..end instead of the matched text
    #[arg(short = 'o', long)]
    offsets: bool,

    /// Print only the number of matches
    #[arg(short = 'c', long)]
    count: bool,

    /// Match anchors case-insensitively
    #[arg(short = 'i', long)]
    ignore_case: bool,

    /// Let ^ and $ in anchors match at line boundaries
    #[arg(short = 'm', long)]
    multi_line: bool,

    /// Require anchors to touch their delimiters, with no whitespace between
    #[arg(long)]
    strict: bool,

    /// Separate output records with NUL instead of newline
    #[arg(short = '0', long)]
    null: bool,

    /// Increase log verbosity (repeatable)
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            eprintln!("nestmatch: {err:#}");
            ExitCode::from(2)
        }
    }
}

/// Returns whether anything matched.
fn run(args: &Args) -> Result<bool> {
    telemetry::init(args.verbose)?;

    let matcher = MatcherBuilder::new(&args.pattern)
        .case_insensitive(args.ignore_case)
        .multi_line(args.multi_line)
        .delimiter_gap(!args.strict)
        .build()
        .with_context(|| format!("invalid pattern {:?}", args.pattern))?;

    let text = match args.file.as_deref() {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("failed to read {path}"))?
        }
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            text
        }
    };

    let found: Vec<_> = matcher.find_iter(&text).collect();
    info!(matches = found.len(), bytes = text.len(), "search finished");

    let separator = if args.null { "\0" } else { "\n" };
    let mut out = io::stdout().lock();
    if args.count {
        write!(out, "{}{separator}", found.len())?;
    } else if !found.is_empty() {
        let records = if args.offsets {
            found.iter().map(|m| m.span.to_string()).join(separator)
        } else {
            found.iter().map(|m| m.text).join(separator)
        };
        write!(out, "{records}{separator}")?;
    }
    out.flush()?;

    Ok(!found.is_empty())
}
