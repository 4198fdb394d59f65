use std::error::Error;
use std::fs::File;
use std::io;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use clap::Parser;
use log::{error, info};
use u256_vectors::verify_vectors;

/// Check vector lines produced by `vecgen`.
#[derive(Parser)]
struct Args {
    /// File to read. Reads stdin when absent.
    path: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let stdin = io::stdin();
    let reader: Box<dyn BufRead> = match &args.path {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(stdin.lock()),
    };

    let report = verify_vectors(reader).map_err(|e| {
        error!("{e}");
        e
    })?;
    info!(
        "{} vectors ok, {} wrapped past 2^256",
        report.lines, report.wrapped
    );

    Ok(())
}
