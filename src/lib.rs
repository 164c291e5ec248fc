//! csv_nslookup library: bulk DNS lookups for a CSV column
//!
//! Reads the hostnames in one column of a CSV file (for example a crt.sh
//! export), runs `nslookup` or `dig` for each of them with a bounded number of
//! concurrent queries, and writes every command's output to a single report.
//!
//! # Example
//!
//! ```no_run
//! use csv_nslookup::{run_lookup, Config, QueryMode};
//! use std::path::PathBuf;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     input: PathBuf::from("crtsh.csv"),
//!     column: "common_name".to_string(),
//!     output: PathBuf::from("results.txt"),
//!     query_mode: QueryMode::Dig,
//!     max_workers: 4,
//!     ..Default::default()
//! };
//!
//! let report = run_lookup(config).await?;
//! println!("{} hosts, {} failed", report.total_hosts, report.failed);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime, and the chosen query command must be
//! on `PATH` (a missing command is recorded per host, not raised).

pub mod config;
pub mod error_handling;
pub mod initialization;
pub mod loader;
pub mod report;
pub mod resolver;
mod run;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel, Opt, QueryMode};
pub use error_handling::{LookupError, QueryError};
pub use loader::{load_hosts, load_hosts_from_reader};
pub use report::{ReportHeader, ReportWriter};
pub use resolver::{CommandResolver, QueryResult, QueryStatus, Resolver};
pub use run::{run_lookup, run_lookup_with, spawn_queries, LookupReport};
