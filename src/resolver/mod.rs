//! Host resolution.
//!
//! A [`Resolver`] turns one hostname into one [`QueryResult`]. The production
//! implementation, [`CommandResolver`], shells out to `nslookup` or `dig`;
//! tests plug in their own implementations to avoid spawning processes.

mod command;

use std::future::Future;

use crate::error_handling::QueryError;

pub use command::CommandResolver;

/// Outcome category of a single query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryStatus {
    /// The command ran to completion (whatever its exit code)
    Ok,
    /// The host was blank after trimming, nothing was run
    EmptyHostname,
    /// Timeout, spawn failure, decode failure or a crashed worker
    Exception,
}

impl QueryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryStatus::Ok => "OK",
            QueryStatus::EmptyHostname => "EMPTY_HOSTNAME",
            QueryStatus::Exception => "EXCEPTION",
        }
    }
}

impl std::fmt::Display for QueryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of querying one host. Fields are read-only once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryResult {
    host: String,
    status: QueryStatus,
    output: String,
}

impl QueryResult {
    /// A command that ran to completion.
    ///
    /// `stdout` and `stderr` are trimmed before being stored.
    pub fn completed(
        host: impl Into<String>,
        return_code: i32,
        stdout: &str,
        stderr: &str,
    ) -> Self {
        Self {
            host: host.into(),
            status: QueryStatus::Ok,
            output: format!(
                "RETURN_CODE={return_code}\nSTDOUT:\n{}\nSTDERR:\n{}",
                stdout.trim(),
                stderr.trim()
            ),
        }
    }

    /// A blank host; no command was run.
    pub fn empty_hostname(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            status: QueryStatus::EmptyHostname,
            output: String::new(),
        }
    }

    /// A query that failed before producing command output.
    pub fn failed(host: impl Into<String>, error: &QueryError) -> Self {
        Self {
            host: host.into(),
            status: QueryStatus::Exception,
            output: format!("ERROR: {error}"),
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn status(&self) -> QueryStatus {
        self.status
    }

    /// Text written into the host's report block.
    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn is_ok(&self) -> bool {
        self.status == QueryStatus::Ok
    }
}

/// Resolves a single host.
///
/// Implementations must not fail: every problem is folded into the returned
/// [`QueryResult`]. Timeouts are enforced by the caller, which drops the
/// future when the limit is reached.
pub trait Resolver: Send + Sync {
    fn query(&self, host: &str) -> impl Future<Output = QueryResult> + Send;
}
