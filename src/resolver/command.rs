//! `nslookup` / `dig` subprocess resolver.

use std::process::{ExitStatus, Stdio};

use log::{debug, trace};
use tokio::process::Command;

use crate::config::{Config, QueryMode};
use crate::error_handling::QueryError;

use super::{QueryResult, Resolver};

/// Resolves hosts by running an external DNS query command.
///
/// The child is spawned with `kill_on_drop`, so a query abandoned by the pool's
/// timeout does not leave the process running.
#[derive(Debug, Clone)]
pub struct CommandResolver {
    mode: QueryMode,
    record_type: String,
    program: String,
}

impl CommandResolver {
    /// Creates a resolver for `mode`. An empty `record_type` leaves the record
    /// type to the command's own default.
    pub fn new(mode: QueryMode, record_type: impl Into<String>) -> Self {
        Self {
            mode,
            record_type: record_type.into(),
            program: mode.program().to_string(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.query_mode, config.record_type.clone())
    }

    /// Runs `program` instead of the mode's usual binary, keeping the mode's
    /// argument layout.
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Argument vector for `host`, program name first.
    ///
    /// Returns `None` when the host is blank after trimming.
    pub fn command_args(&self, host: &str) -> Option<Vec<String>> {
        let host = host.trim();
        if host.is_empty() {
            return None;
        }

        let mut args = vec![self.program.clone()];
        match self.mode {
            QueryMode::Nslookup => {
                if !self.record_type.is_empty() {
                    args.push(format!("-type={}", self.record_type));
                }
            }
            QueryMode::Dig => {
                args.push("+short".to_string());
                if !self.record_type.is_empty() {
                    args.push(self.record_type.clone());
                }
            }
        }
        args.push(host.to_string());
        Some(args)
    }

    async fn run(&self, args: &[String]) -> Result<(i32, String, String), QueryError> {
        // args[0] is the program itself
        let rest = args.get(1..).unwrap_or_default();

        trace!("Running {}", args.join(" "));
        let child = Command::new(&self.program)
            .args(rest)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| QueryError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        let output = child.wait_with_output().await.map_err(QueryError::Wait)?;
        let stdout = String::from_utf8(output.stdout)?;
        let stderr = String::from_utf8(output.stderr)?;
        Ok((return_code(output.status), stdout, stderr))
    }
}

impl Resolver for CommandResolver {
    async fn query(&self, host: &str) -> QueryResult {
        let Some(args) = self.command_args(host) else {
            return QueryResult::empty_hostname(host);
        };

        match self.run(&args).await {
            Ok((code, stdout, stderr)) => {
                debug!("{} exited with {} for {}", self.program, code, host);
                QueryResult::completed(host, code, &stdout, &stderr)
            }
            Err(e) => QueryResult::failed(host, &e),
        }
    }
}

/// Exit code, or the negated signal number when the child was killed.
fn return_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return -signal;
        }
    }
    -1
}
