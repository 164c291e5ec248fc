//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `csv_nslookup` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output and exit codes
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use std::process;

use csv_nslookup::config::USAGE;
use csv_nslookup::initialization::init_logger_with;
use csv_nslookup::{run_lookup, Config, LookupError, Opt};

#[tokio::main]
async fn main() -> Result<()> {
    let opt = match Opt::try_parse() {
        Ok(opt) => opt,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return Ok(());
        }
        Err(e) => {
            let err = LookupError::Usage(e.to_string());
            eprintln!("{err}");
            eprintln!("{USAGE}");
            process::exit(err.exit_code());
        }
    };
    let config = Config::from(opt);

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    match run_lookup(config).await {
        Ok(report) if !report.output_written => {
            println!("No hosts found in that column.");
            Ok(())
        }
        Ok(report) => {
            println!(
                "Done. Resolved {} host{} ({} ok, {} failed) in {:.1}s",
                report.total_hosts,
                if report.total_hosts == 1 { "" } else { "s" },
                report.succeeded,
                report.failed,
                report.elapsed_seconds
            );
            println!("Results saved to {}", report.output_path.display());
            Ok(())
        }
        Err(e) => {
            eprintln!("ERROR: {e}");
            process::exit(e.exit_code());
        }
    }
}
