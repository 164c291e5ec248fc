//! The lookup pipeline: load hosts, fan out queries, write the report.

mod progress;
mod task;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use futures::StreamExt;
use log::{info, warn};

use crate::config::Config;
use crate::error_handling::LookupError;
use crate::loader::load_hosts;
use crate::report::{ReportHeader, ReportWriter};
use crate::resolver::{CommandResolver, Resolver};

use progress::log_progress;
pub use task::spawn_queries;

/// Results of a lookup run.
#[derive(Debug, Clone)]
pub struct LookupReport {
    /// Hosts loaded from the column (one report block each)
    pub total_hosts: usize,
    /// Hosts whose command ran to completion
    pub succeeded: usize,
    /// Hosts recorded as timeouts or errors
    pub failed: usize,
    /// Report path
    pub output_path: PathBuf,
    /// False when the column had no hosts and no report was created
    pub output_written: bool,
    /// Elapsed time in seconds
    pub elapsed_seconds: f64,
}

/// Runs a lookup with the `nslookup`/`dig` resolver described by `config`.
///
/// # Errors
///
/// Returns an error if the input cannot be read, the column is missing, or the
/// report cannot be written. Failures of individual queries are recorded in the
/// report instead.
///
/// # Example
///
/// ```no_run
/// use csv_nslookup::{run_lookup, Config};
/// use std::path::PathBuf;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = Config {
///     input: PathBuf::from("crtsh.csv"),
///     column: "common_name".to_string(),
///     output: PathBuf::from("results.txt"),
///     ..Default::default()
/// };
/// let report = run_lookup(config).await?;
/// println!("Resolved {} hosts", report.total_hosts);
/// # Ok(())
/// # }
/// ```
pub async fn run_lookup(config: Config) -> Result<LookupReport, LookupError> {
    let resolver = Arc::new(CommandResolver::from_config(&config));
    run_lookup_with(config, resolver).await
}

/// Runs a lookup with a caller-supplied resolver.
///
/// The input is loaded and the column checked before the report file is
/// touched, so a fatal input error leaves any existing report as it was.
pub async fn run_lookup_with<R: Resolver + 'static>(
    config: Config,
    resolver: Arc<R>,
) -> Result<LookupReport, LookupError> {
    let start_time = Instant::now();
    let hosts = load_hosts(&config.input, &config.column)?;
    let total_hosts = hosts.len();

    if hosts.is_empty() {
        info!(
            "No hosts in column '{}' of {}",
            config.column,
            config.input.display()
        );
        return Ok(LookupReport {
            total_hosts: 0,
            succeeded: 0,
            failed: 0,
            output_path: config.output,
            output_written: false,
            elapsed_seconds: start_time.elapsed().as_secs_f64(),
        });
    }

    info!(
        "Resolving {} host(s) with {} ({} workers, {}s timeout)",
        total_hosts,
        config.query_mode,
        config.worker_count(),
        config.timeout_seconds
    );

    let output_error = |source| LookupError::OutputFile {
        path: config.output.clone(),
        source,
    };

    let mut writer = ReportWriter::create(&config.output)?;
    writer
        .write_header(&ReportHeader::new(&config.input, &config.column, total_hosts))
        .map_err(output_error)?;

    let mut tasks = spawn_queries(
        hosts,
        resolver,
        config.worker_count(),
        config.query_timeout(),
    );

    let mut succeeded = 0usize;
    let mut failed = 0usize;
    while let Some(result) = tasks.next().await {
        if result.is_ok() {
            succeeded += 1;
        } else {
            failed += 1;
            warn!("{} [{}]: {}", result.host(), result.status(), result.output());
        }
        writer.write_result(&result).map_err(output_error)?;
        log_progress(start_time, writer.blocks_written(), total_hosts);
    }
    writer.finish().map_err(output_error)?;

    Ok(LookupReport {
        total_hosts,
        succeeded,
        failed,
        output_path: config.output,
        output_written: true,
        elapsed_seconds: start_time.elapsed().as_secs_f64(),
    })
}
