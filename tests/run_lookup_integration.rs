//! Integration tests for run_lookup_with
//!
//! These tests drive the whole pipeline (CSV → worker pool → report) with fake
//! resolvers, so no external DNS command is spawned.

use csv_nslookup::{
    run_lookup_with, Config, LookupError, QueryError, QueryResult, Resolver,
};
use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tempfile::{NamedTempFile, TempDir};

/// Answers after a delay derived from the host name, so completion order
/// differs from input order.
struct FakeResolver;

impl Resolver for FakeResolver {
    async fn query(&self, host: &str) -> QueryResult {
        let delay = if host.starts_with("hang") {
            Duration::from_secs(60)
        } else {
            Duration::from_millis((host.len() as u64 * 7) % 40)
        };
        tokio::time::sleep(delay).await;
        if host.starts_with("broken") {
            return QueryResult::failed(
                host,
                &QueryError::Spawn {
                    program: "nslookup".to_string(),
                    source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
                },
            );
        }
        QueryResult::completed(host, 0, &format!("\"txt for {host}\""), "")
    }
}

/// Helper function to write CSV text to a temporary file
fn write_csv(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write CSV");
    file.flush().expect("Failed to flush file");
    file
}

/// Helper function to create a Config for testing
fn create_test_config(input: &Path, column: &str, output: PathBuf) -> Config {
    Config {
        input: input.to_path_buf(),
        column: column.to_string(),
        output,
        timeout_seconds: 1,
        max_workers: 4,
        ..Default::default()
    }
}

/// Splits a report into (header lines, host -> block body).
fn parse_report(text: &str) -> (Vec<String>, Vec<(String, String)>) {
    let mut header = Vec::new();
    let mut blocks: Vec<(String, String)> = Vec::new();
    for line in text.lines() {
        if let Some(host) = line
            .strip_prefix("--- ")
            .and_then(|rest| rest.strip_suffix(" ---"))
        {
            blocks.push((host.to_string(), String::new()));
        } else if let Some((_, body)) = blocks.last_mut() {
            body.push_str(line);
            body.push('\n');
        } else if line.starts_with('#') {
            header.push(line.to_string());
        }
    }
    (header, blocks)
}

#[tokio::test]
async fn test_example_csv_produces_two_blocks() {
    let csv = write_csv("CN,Issuer\na.example.com,X\n,Y\nb.example.com,Z\n");
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("out.txt");

    let report = run_lookup_with(
        create_test_config(csv.path(), "CN", output.clone()),
        Arc::new(FakeResolver),
    )
    .await
    .expect("run should succeed");

    assert_eq!(report.total_hosts, 2);
    assert_eq!(report.succeeded, 2);
    assert_eq!(report.failed, 0);
    assert!(report.output_written);

    let text = std::fs::read_to_string(&output).unwrap();
    let (header, blocks) = parse_report(&text);
    assert_eq!(header[0], "# csv_nslookup results");
    assert!(header.contains(&"# column: CN".to_string()));
    assert!(header.contains(&"# total hosts: 2".to_string()));
    let file_name = csv.path().file_name().unwrap().to_string_lossy();
    assert!(header.contains(&format!("# source CSV: {file_name}")));
    assert!(header.iter().any(|l| l.starts_with("# date: ") && l.ends_with('Z')));

    let mut hosts: Vec<&str> = blocks.iter().map(|(h, _)| h.as_str()).collect();
    hosts.sort();
    assert_eq!(hosts, vec!["a.example.com", "b.example.com"]);
    for (host, body) in &blocks {
        assert!(body.starts_with("RETURN_CODE=0\nSTDOUT:\n"));
        assert!(body.contains(&format!("txt for {host}")));
    }
}

#[tokio::test]
async fn test_block_count_matches_values_including_duplicates() {
    let mut csv_text = String::from("common_name,id\n");
    for i in 0..30 {
        csv_text.push_str(&format!("host{}.example.com,{i}\n", i % 10));
        if i % 4 == 0 {
            csv_text.push_str(&format!("  ,{i}\n"));
        }
    }
    let csv = write_csv(&csv_text);
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("out.txt");

    let report = run_lookup_with(
        create_test_config(csv.path(), "common_name", output.clone()),
        Arc::new(FakeResolver),
    )
    .await
    .unwrap();
    assert_eq!(report.total_hosts, 30);

    let text = std::fs::read_to_string(&output).unwrap();
    let (_, blocks) = parse_report(&text);
    assert_eq!(blocks.len(), 30);

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for (host, _) in &blocks {
        *counts.entry(host.as_str()).or_default() += 1;
    }
    assert_eq!(counts.len(), 10);
    assert!(counts.values().all(|&n| n == 3));
}

#[tokio::test]
async fn test_timeout_block_has_no_partial_output() {
    let csv = write_csv("CN\nhang.example.com\nfast.example.com\n");
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("out.txt");

    let report = run_lookup_with(
        create_test_config(csv.path(), "CN", output.clone()),
        Arc::new(FakeResolver),
    )
    .await
    .unwrap();
    assert_eq!(report.succeeded, 1);
    assert_eq!(report.failed, 1);

    let text = std::fs::read_to_string(&output).unwrap();
    let (_, blocks) = parse_report(&text);
    let (_, hang_body) = blocks
        .iter()
        .find(|(h, _)| h == "hang.example.com")
        .expect("timed out host is still reported");
    assert!(hang_body.contains("ERROR: timeout after 1s"));
    assert!(!hang_body.contains("STDOUT:"));
    assert!(!hang_body.contains("STDERR:"));
}

#[tokio::test]
async fn test_per_host_errors_do_not_abort_run() {
    let csv = write_csv("CN\nbroken.example.com\nok.example.com\n");
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("out.txt");

    let report = run_lookup_with(
        create_test_config(csv.path(), "CN", output.clone()),
        Arc::new(FakeResolver),
    )
    .await
    .unwrap();
    assert_eq!(report.total_hosts, 2);
    assert_eq!(report.failed, 1);

    let text = std::fs::read_to_string(&output).unwrap();
    assert!(text.contains("--- broken.example.com ---\nERROR: failed to run nslookup: not found\n\n"));
}

#[tokio::test]
async fn test_missing_column_writes_nothing() {
    let csv = write_csv("CN,Issuer\na.example.com,X\n");
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("out.txt");

    let err = run_lookup_with(
        create_test_config(csv.path(), "SAN", output.clone()),
        Arc::new(FakeResolver),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, LookupError::ColumnNotFound { .. }));
    assert_eq!(err.exit_code(), 2);
    assert!(!output.exists(), "no report should be created");
}

#[tokio::test]
async fn test_missing_column_leaves_existing_report_untouched() {
    let csv = write_csv("CN\na.example.com\n");
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("out.txt");
    std::fs::write(&output, "previous report\n").unwrap();

    let err = run_lookup_with(
        create_test_config(csv.path(), "Nope", output.clone()),
        Arc::new(FakeResolver),
    )
    .await
    .unwrap_err();
    assert_eq!(err.exit_code(), 2);
    assert_eq!(std::fs::read_to_string(&output).unwrap(), "previous report\n");
}

#[tokio::test]
async fn test_second_run_overwrites_report() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("out.txt");

    let first = write_csv("CN\na.example.com\nb.example.com\nc.example.com\n");
    run_lookup_with(
        create_test_config(first.path(), "CN", output.clone()),
        Arc::new(FakeResolver),
    )
    .await
    .unwrap();

    let second = write_csv("CN\nz.example.com\n");
    run_lookup_with(
        create_test_config(second.path(), "CN", output.clone()),
        Arc::new(FakeResolver),
    )
    .await
    .unwrap();

    let text = std::fs::read_to_string(&output).unwrap();
    let (header, blocks) = parse_report(&text);
    assert!(header.contains(&"# total hosts: 1".to_string()));
    assert_eq!(header.iter().filter(|l| l.ends_with("results")).count(), 1);
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].0, "z.example.com");
}

#[tokio::test]
async fn test_empty_column_skips_report() {
    let csv = write_csv("CN,Issuer\n,X\n  ,Y\n");
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("out.txt");

    let report = run_lookup_with(
        create_test_config(csv.path(), "CN", output.clone()),
        Arc::new(FakeResolver),
    )
    .await
    .unwrap();

    assert_eq!(report.total_hosts, 0);
    assert!(!report.output_written);
    assert!(!output.exists());
}

#[tokio::test]
async fn test_unwritable_output_is_fatal() {
    let csv = write_csv("CN\na.example.com\n");
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("no-such-dir").join("out.txt");

    let err = run_lookup_with(
        create_test_config(csv.path(), "CN", output),
        Arc::new(FakeResolver),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, LookupError::OutputFile { .. }));
    assert_eq!(err.exit_code(), 1);
}
