//! Command-line collaborator: reads a fetched page from a file or stdin and
//! prints the `{ title?, date }` payload as JSON on stdout.
//!
//! Logs go to stderr; set `RUST_LOG=link_metadata=debug` to watch the
//! cascades.

use std::error::Error;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;
use link_metadata::{extract_bytes_with_options, DateSource, ExtractionInput, Options, TitleSource};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "link-metadata", about = "Extract title and publication date from a fetched page")]
struct Args {
    /// URL the page was fetched from.
    #[arg(long)]
    url: String,

    /// HTML file to read; stdin when omitted.
    #[arg(long)]
    input: Option<PathBuf>,

    /// Date to report when the page carries none (YYYY-MM-DD).
    #[arg(long, value_parser = parse_day)]
    today: Option<NaiveDate>,

    /// Also report which cascade step produced each value.
    #[arg(long)]
    sources: bool,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pretty: bool,
}

#[derive(Serialize)]
struct Output {
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    title_source: Option<TitleSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    date_source: Option<DateSource>,
}

fn parse_day(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}

fn read_page(input: Option<&PathBuf>) -> io::Result<Vec<u8>> {
    match input {
        Some(path) => fs::read(path),
        None => {
            let mut body = Vec::new();
            io::stdin().read_to_end(&mut body)?;
            Ok(body)
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    // Reject bad URLs before touching the page
    let source_url = ExtractionInput::new(String::new(), &args.url)?.source_url().to_string();

    let body = read_page(args.input.as_ref())?;
    tracing::info!(url = %source_url, bytes = body.len(), "extracting link metadata");

    let options = Options {
        reference_date: args.today,
    };
    let result = extract_bytes_with_options(&body, &source_url, &options);

    let output = Output {
        title: result.title,
        date: result.date,
        title_source: args.sources.then_some(result.title_source),
        date_source: args.sources.then_some(result.date_source),
    };

    let json = if args.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{json}");

    Ok(())
}
