//! Error type definitions.
//!
//! This module defines the fatal run errors, the per-host query errors, and the
//! initialization errors used throughout the application.

use std::path::PathBuf;
use std::time::Duration;

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Errors that abort a run.
///
/// All of them are raised before the first result block is written, except
/// `OutputFile`, which can also surface while results are being appended.
#[derive(Error, Debug)]
pub enum LookupError {
    /// Wrong command-line arguments.
    #[error("{0}")]
    Usage(String),

    /// The input CSV could not be opened or parsed.
    #[error("cannot read input CSV {}: {source}", .path.display())]
    InputFile {
        /// Input path as given
        path: PathBuf,
        /// Underlying reader error
        #[source]
        source: csv::Error,
    },

    /// The requested column is not in the header row.
    #[error("column '{column}' not found. Available columns: {available:?}")]
    ColumnNotFound {
        /// Column that was requested
        column: String,
        /// Header names actually present
        available: Vec<String>,
    },

    /// The report file could not be created or written.
    #[error("cannot write report {}: {source}", .path.display())]
    OutputFile {
        /// Report path as given
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl LookupError {
    /// Process exit status for this error.
    ///
    /// A missing column gets its own status (2); everything else exits with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            LookupError::ColumnNotFound { .. } => 2,
            LookupError::Usage(_)
            | LookupError::InputFile { .. }
            | LookupError::OutputFile { .. } => 1,
        }
    }
}

/// Per-host query failures.
///
/// These never abort a run. The `Display` text is written into the host's
/// report block after an `ERROR: ` prefix.
#[derive(Error, Debug)]
pub enum QueryError {
    /// The query did not finish within the configured timeout.
    #[error("timeout after {}s", .0.as_secs())]
    Timeout(Duration),

    /// The query command could not be started (usually a missing binary).
    #[error("failed to run {program}: {source}")]
    Spawn {
        /// Program that failed to start
        program: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Waiting on the child or reading its pipes failed.
    #[error("failed to collect output: {0}")]
    Wait(#[source] std::io::Error),

    /// The command wrote output that is not valid UTF-8.
    #[error("output is not valid UTF-8: {0}")]
    Decode(#[from] std::string::FromUtf8Error),

    /// The worker running the query panicked, was cancelled, or never got a slot.
    #[error("query task failed: {0}")]
    Worker(String),
}
