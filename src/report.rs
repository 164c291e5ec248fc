//! Plain-text report output.
//!
//! A report is a `#`-prefixed header followed by one block per host:
//!
//! ```text
//! # csv_nslookup results
//! # source CSV: crtsh.csv
//! # column: common_name
//! # date: 2024-05-01T12:00:00.000000Z
//! # total hosts: 2
//!
//! --- a.example.com ---
//! RETURN_CODE=0
//! STDOUT:
//! ...
//! ```

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use chrono::{DateTime, Utc};

use crate::config::{REPORT_DATE_FORMAT, REPORT_TOOL_NAME};
use crate::error_handling::LookupError;
use crate::resolver::QueryResult;

/// Run metadata written once at the top of the report.
#[derive(Debug, Clone)]
pub struct ReportHeader {
    /// File name of the input CSV (no directory)
    pub source_name: String,
    /// Column the hosts came from
    pub column: String,
    pub timestamp: DateTime<Utc>,
    pub total_hosts: usize,
}

impl ReportHeader {
    /// Header stamped with the current UTC time.
    pub fn new(source: &Path, column: &str, total_hosts: usize) -> Self {
        let source_name = source
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| source.display().to_string());
        Self {
            source_name,
            column: column.to_string(),
            timestamp: Utc::now(),
            total_hosts,
        }
    }
}

/// Sequential writer for a report. Owned by the collecting loop only.
pub struct ReportWriter<W: Write> {
    out: W,
    blocks: usize,
}

impl ReportWriter<BufWriter<File>> {
    /// Creates (or truncates) the report file at `path`.
    pub fn create(path: &Path) -> Result<Self, LookupError> {
        let file = File::create(path).map_err(|source| LookupError::OutputFile {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> ReportWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out, blocks: 0 }
    }

    pub fn write_header(&mut self, header: &ReportHeader) -> io::Result<()> {
        writeln!(self.out, "# {} results", REPORT_TOOL_NAME)?;
        writeln!(self.out, "# source CSV: {}", header.source_name)?;
        writeln!(self.out, "# column: {}", header.column)?;
        writeln!(
            self.out,
            "# date: {}Z",
            header.timestamp.format(REPORT_DATE_FORMAT)
        )?;
        writeln!(self.out, "# total hosts: {}", header.total_hosts)?;
        writeln!(self.out)
    }

    /// Appends the block for one host.
    pub fn write_result(&mut self, result: &QueryResult) -> io::Result<()> {
        writeln!(self.out, "--- {} ---", result.host())?;
        self.out.write_all(result.output().as_bytes())?;
        self.out.write_all(b"\n\n")?;
        self.blocks += 1;
        Ok(())
    }

    /// Number of host blocks written so far.
    pub fn blocks_written(&self) -> usize {
        self.blocks
    }

    /// Flushes and hands back the underlying writer.
    pub fn finish(mut self) -> io::Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}
