//! Configuration constants.
//!
//! Defaults for the query pool and the report layout. Every value here can be
//! overridden through [`Config`](super::Config) when the library is used
//! directly, or through the matching CLI flag.

use std::time::Duration;

/// Maximum number of queries running at the same time
pub const MAX_WORKERS: usize = 12;

/// Per-query timeout in seconds
pub const QUERY_TIMEOUT_SECS: u64 = 6;

/// Per-query timeout as a `Duration`
pub const QUERY_TIMEOUT: Duration = Duration::from_secs(QUERY_TIMEOUT_SECS);

/// Record type passed to the query command (`-type=TXT` for nslookup, `TXT` for dig)
pub const DEFAULT_RECORD_TYPE: &str = "TXT";

/// Log a progress line every N completed hosts
pub const PROGRESS_LOG_INTERVAL: usize = 25;

/// Tool name written on the first line of every report
pub const REPORT_TOOL_NAME: &str = env!("CARGO_PKG_NAME");

/// Timestamp layout for the report header (a literal `Z` is appended after it)
pub const REPORT_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Usage line printed when the positional arguments are wrong
pub const USAGE: &str = "Usage: csv_nslookup input.csv ColumnName output.txt";
