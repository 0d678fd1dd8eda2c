//! Rental quote command line tool
//!
//! Reads one JSON quote request from stdin (or the file given as the only
//! argument) and prints the JSON quote response on stdout.

use std::io::{self, Read, Write};

use anyhow::{bail, Context, Result};
use tracing_subscriber::EnvFilter;

use rental_quote::config::{Config, DEFAULT_LOG_FILTER};
use rental_quote::{quote, QuoteRequest, QuoteResponse};

fn main() -> Result<()> {
    let config = Config::from_env();
    init_tracing(&config);

    let input = read_input()?;
    let request: QuoteRequest =
        serde_json::from_str(&input).context("Failed to parse quote request JSON")?;

    tracing::debug!(
        pickup = %request.pickup_location,
        dropoff = %request.dropoff_location,
        "Received quote request"
    );

    let response = QuoteResponse::from(quote(&request));

    let mut stdout = io::stdout().lock();
    serde_json::to_writer(&mut stdout, &response).context("Failed to write quote response")?;
    writeln!(stdout)?;

    Ok(())
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_filter)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false);

    if config.log_json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn read_input() -> Result<String> {
    let mut args = std::env::args().skip(1);
    let path = args.next();
    if args.next().is_some() {
        bail!("Usage: rental-quote [REQUEST_FILE]");
    }

    match path {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read request file {}", path)),
        None => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read request from stdin")?;
            Ok(input)
        }
    }
}
