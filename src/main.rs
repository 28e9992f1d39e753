// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Command-line front end: scan a file or stdin and print the report

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use pii_sieve::{Category, Extractor, ScanConfig, SieveError};

/// Extract and validate emails, URLs, phone numbers and payment cards
/// found in text.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Input file to scan (reads stdin when omitted)
    #[arg(index = 1)]
    file: Option<PathBuf>,

    /// Emit the structured JSON dump instead of the human report
    #[arg(long)]
    json: bool,

    /// Restrict the scan to these categories (comma-separated:
    /// emails,urls,phones,credit_cards)
    #[arg(short, long)]
    categories: Option<String>,

    /// Character substituted for masked card digits
    #[arg(long, default_value_t = '*')]
    mask_char: char,
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    if let Err(err) = run(Args::parse()) {
        eprintln!("pii-sieve: {err}");
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), SieveError> {
    let text = read_input(args.file.as_deref())?;

    let mut config = match &args.categories {
        Some(csv) => ScanConfig::only(&parse_categories(csv)?),
        None => ScanConfig::default(),
    };
    config.mask_char = args.mask_char;

    let extractor = Extractor::new(config)?;
    let report = extractor.extract(&text)?;

    if args.json {
        println!("{}", report.to_json()?);
    } else {
        print!("{report}");
    }
    Ok(())
}

fn parse_categories(csv: &str) -> Result<Vec<Category>, SieveError> {
    csv.split(',')
        .map(|name| name.trim().parse().map_err(SieveError::invalid_input))
        .collect()
}

fn read_input(path: Option<&Path>) -> Result<String, SieveError> {
    let bytes = match path {
        Some(path) => fs::read(path)?,
        None => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf)?;
            buf
        }
    };
    String::from_utf8(bytes).map_err(|_| SieveError::invalid_input("input is not valid UTF-8"))
}
