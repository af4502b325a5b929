//! IIF Export CLI
//!
//! A batch converter that reads a payment-export CSV and writes a
//! QuickBooks-compatible `payments.iif` import file into the working
//! directory.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- payments.csv
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity
//! - `IIF_SOURCE_ACCOUNT`, `IIF_EXPENSE_ACCOUNT`, `IIF_FEE_ACCOUNT`,
//!   `IIF_INCOME_ACCOUNT`, `IIF_MEMO`: override the ledger account names
//!   and transaction memo

use iif_export::{AccountNames, ExportError, IifExporter, Result};
use log::info;
use std::env;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::process;

/// Fixed output filename, written into the working directory.
const OUTPUT_FILENAME: &str = "payments.iif";

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        return Err(ExportError::MissingArgument);
    }

    let input_path = &args[1];
    let file = File::open(input_path)?;
    let reader = BufReader::new(file);

    let mut exporter = IifExporter::new(AccountNames::from_env());
    exporter.process_csv(reader)?;

    let output = File::create(OUTPUT_FILENAME)?;
    exporter.write_output(BufWriter::new(output))?;

    let summary = exporter.summary();
    info!(
        "wrote {}: {} transactions imported, {} rows skipped, gross {}, net {}",
        OUTPUT_FILENAME, summary.imported, summary.skipped, summary.gross, summary.net
    );

    Ok(())
}
