//! Error handling.
//!
//! Errors are split into:
//! - **Fatal** ([`LookupError`]): bad arguments, unreadable input, a missing
//!   column, or an unwritable report. These stop the run and pick the exit code.
//! - **Per-host** ([`QueryError`]): timeouts, spawn failures, undecodable output.
//!   These are recorded in the report and the run continues.

mod types;

// Re-export public API
pub use types::{InitializationError, LookupError, QueryError};
