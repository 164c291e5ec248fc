//! Hostname extraction from a CSV column.

use std::io::Read;
use std::path::Path;

use log::debug;

use crate::error_handling::LookupError;

/// Reads the named column of a CSV file and returns its non-empty values.
///
/// Values are trimmed, blanks are skipped, and input order and duplicates are
/// kept.
///
/// # Errors
///
/// - `LookupError::InputFile` if the file cannot be opened or a row cannot be parsed
/// - `LookupError::ColumnNotFound` if the header row has no such column
pub fn load_hosts(path: &Path, column: &str) -> Result<Vec<String>, LookupError> {
    let reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|source| LookupError::InputFile {
            path: path.to_path_buf(),
            source,
        })?;

    let hosts = collect_column(reader, column).map_err(|e| match e {
        ColumnError::Missing(available) => LookupError::ColumnNotFound {
            column: column.to_string(),
            available,
        },
        ColumnError::Csv(source) => LookupError::InputFile {
            path: path.to_path_buf(),
            source,
        },
    })?;

    debug!(
        "Loaded {} host(s) from column '{}' of {}",
        hosts.len(),
        column,
        path.display()
    );
    Ok(hosts)
}

/// Same as [`load_hosts`], reading CSV text from any reader.
///
/// Parse failures are reported as `InputFile` with an empty path.
pub fn load_hosts_from_reader<R: Read>(rdr: R, column: &str) -> Result<Vec<String>, LookupError> {
    let reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(rdr);

    collect_column(reader, column).map_err(|e| match e {
        ColumnError::Missing(available) => LookupError::ColumnNotFound {
            column: column.to_string(),
            available,
        },
        ColumnError::Csv(source) => LookupError::InputFile {
            path: Default::default(),
            source,
        },
    })
}

enum ColumnError {
    Missing(Vec<String>),
    Csv(csv::Error),
}

fn collect_column<R: Read>(
    mut reader: csv::Reader<R>,
    column: &str,
) -> Result<Vec<String>, ColumnError> {
    let headers = reader.headers().map_err(ColumnError::Csv)?.clone();
    // with duplicate header names the last one wins
    let Some(index) = headers.iter().collect::<Vec<_>>().iter().rposition(|h| *h == column) else {
        return Err(ColumnError::Missing(
            headers.iter().map(str::to_string).collect(),
        ));
    };

    let mut hosts = Vec::new();
    for record in reader.records() {
        let record = record.map_err(ColumnError::Csv)?;
        // short rows count as blank
        let value = record.get(index).unwrap_or("").trim();
        if !value.is_empty() {
            hosts.push(value.to_string());
        }
    }
    Ok(hosts)
}
