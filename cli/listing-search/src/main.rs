//! `listing-search` entry point.
//!
//! Loads settings, parses search flags, and writes the rendered result page
//! as JSON to stdout.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use listing_search::{CliError, SearchArgs, load_settings, run, write_page};
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> ExitCode {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .with_writer(io::stderr)
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let args = SearchArgs::parse();
    match search(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Err(write_err) = writeln!(io::stderr().lock(), "{err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}

fn search(args: &SearchArgs) -> Result<(), CliError> {
    let settings = load_settings()?;
    let page = run(args, &settings)?;
    write_page(&mut io::stdout().lock(), &page)
}
