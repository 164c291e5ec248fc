//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::constants::{DEFAULT_RECORD_TYPE, MAX_WORKERS, QUERY_TIMEOUT_SECS};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// External command used to resolve each host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum QueryMode {
    /// `nslookup -type=<record type> <host>`
    Nslookup,
    /// `dig +short <record type> <host>`
    Dig,
}

impl QueryMode {
    /// Name of the binary this mode invokes.
    pub fn program(&self) -> &'static str {
        match self {
            QueryMode::Nslookup => "nslookup",
            QueryMode::Dig => "dig",
        }
    }
}

impl std::fmt::Display for QueryMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.program())
    }
}

/// Command-line options.
///
/// Exactly three positional arguments are accepted. The flags only adjust how
/// queries run and how much gets logged.
///
/// # Examples
///
/// ```bash
/// csv_nslookup crtsh.csv common_name results.txt
///
/// csv_nslookup crtsh.csv common_name results.txt --query-cmd dig --max-workers 4
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "csv_nslookup",
    version,
    about = "Resolves every hostname in a CSV column with nslookup or dig and saves the output."
)]
pub struct Opt {
    /// CSV file with a header row
    #[arg(value_parser)]
    pub input: PathBuf,

    /// Name of the column holding the hostnames
    pub column: String,

    /// Report file (overwritten if it exists)
    #[arg(value_parser)]
    pub output: PathBuf,

    /// Query command: nslookup|dig
    #[arg(long, value_enum, default_value_t = QueryMode::Nslookup)]
    pub query_cmd: QueryMode,

    /// Record type to query; an empty string leaves the type to the command's default
    #[arg(long, default_value = DEFAULT_RECORD_TYPE)]
    pub record_type: String,

    /// Per-query timeout in seconds
    #[arg(long, default_value_t = QUERY_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// Maximum queries running at the same time
    #[arg(long, default_value_t = MAX_WORKERS)]
    pub max_workers: usize,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```no_run
/// use csv_nslookup::{Config, QueryMode};
/// use std::path::PathBuf;
///
/// let config = Config {
///     input: PathBuf::from("crtsh.csv"),
///     column: "common_name".to_string(),
///     output: PathBuf::from("results.txt"),
///     query_mode: QueryMode::Dig,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// CSV file to read hostnames from
    pub input: PathBuf,

    /// Column holding the hostnames
    pub column: String,

    /// Report file
    pub output: PathBuf,

    /// External query command
    pub query_mode: QueryMode,

    /// Record type; empty means the command's default lookup
    pub record_type: String,

    /// Per-query timeout in seconds
    pub timeout_seconds: u64,

    /// Maximum concurrent queries
    pub max_workers: usize,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Config {
    /// Per-query timeout as a `Duration`.
    pub fn query_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Worker count, never below one.
    pub fn worker_count(&self) -> usize {
        self.max_workers.max(1)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from("input.csv"),
            column: String::new(),
            output: PathBuf::from("output.txt"),
            query_mode: QueryMode::Nslookup,
            record_type: DEFAULT_RECORD_TYPE.to_string(),
            timeout_seconds: QUERY_TIMEOUT_SECS,
            max_workers: MAX_WORKERS,
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
        }
    }
}

impl From<Opt> for Config {
    fn from(opt: Opt) -> Self {
        Self {
            input: opt.input,
            column: opt.column,
            output: opt.output,
            query_mode: opt.query_cmd,
            record_type: opt.record_type,
            timeout_seconds: opt.timeout_seconds,
            max_workers: opt.max_workers,
            log_level: opt.log_level,
            log_format: opt.log_format,
        }
    }
}
