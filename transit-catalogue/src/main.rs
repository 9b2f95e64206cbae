use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use transit_catalogue::cache::CacheConfig;
use transit_catalogue::ingest::{DocumentError, TransitDocument};
use transit_catalogue::requests::process_document;

fn main() -> ExitCode {
    // Logs go to stderr; stdout carries only the JSON answer.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "failed to process request document");
            ExitCode::FAILURE
        }
    }
}

/// Read the document named on the command line (or stdin), answer its stat
/// requests and print the responses as a JSON array.
fn run() -> Result<(), DocumentError> {
    let document = match std::env::args_os().nth(1) {
        Some(path) => {
            info!(path = %Path::new(&path).display(), "reading request document");
            TransitDocument::from_path(&path)?
        }
        None => TransitDocument::from_reader(io::stdin().lock())?,
    };

    let responses = process_document(&document, &CacheConfig::default())?;

    let mut out = BufWriter::new(io::stdout().lock());
    serde_json::to_writer_pretty(&mut out, &responses)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
