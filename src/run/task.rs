//! Per-host task processing.
//!
//! This module contains the logic for querying a single host, including the
//! timeout and the isolation of worker failures.

use std::sync::Arc;
use std::time::{Duration, Instant};

use futures::future::BoxFuture;
use futures::stream::FuturesUnordered;
use futures::FutureExt;
use tokio::sync::Semaphore;

use crate::error_handling::QueryError;
use crate::initialization::init_semaphore;
use crate::resolver::{QueryResult, Resolver};

/// Query a single host.
///
/// Waits for a worker slot, then runs the query under `timeout`. A query that
/// runs past the limit is dropped and replaced by a timeout result, so no
/// partial output is kept.
pub async fn query_host_task<R: Resolver>(
    host: String,
    resolver: Arc<R>,
    semaphore: Arc<Semaphore>,
    timeout: Duration,
) -> QueryResult {
    let _permit = match semaphore.acquire_owned().await {
        Ok(permit) => permit,
        Err(_) => {
            log::warn!("Worker pool closed, skipping host: {host}");
            return QueryResult::failed(host, &QueryError::Worker("worker pool closed".into()));
        }
    };

    let query_start = Instant::now();
    match tokio::time::timeout(timeout, resolver.query(&host)).await {
        Ok(result) => {
            log::debug!(
                "Finished {} in {:.2}s ({})",
                host,
                query_start.elapsed().as_secs_f64(),
                result.status()
            );
            result
        }
        Err(_) => {
            log::warn!(
                "Query for {} timed out after {}s",
                host,
                timeout.as_secs()
            );
            QueryResult::failed(host, &QueryError::Timeout(timeout))
        }
    }
}

/// Starts one task per host and returns them as a completion-ordered set.
///
/// At most `max_workers` queries run at the same time. A task that panics is
/// turned into an `EXCEPTION` result for its host; the other tasks are not
/// affected.
pub fn spawn_queries<R: Resolver + 'static>(
    hosts: Vec<String>,
    resolver: Arc<R>,
    max_workers: usize,
    timeout: Duration,
) -> FuturesUnordered<BoxFuture<'static, QueryResult>> {
    let semaphore = init_semaphore(max_workers.max(1));
    let tasks = FuturesUnordered::new();

    for host in hosts {
        let handle = tokio::spawn(query_host_task(
            host.clone(),
            Arc::clone(&resolver),
            Arc::clone(&semaphore),
            timeout,
        ));
        tasks.push(
            async move {
                match handle.await {
                    Ok(result) => result,
                    Err(e) => {
                        log::warn!("Query task for {host} failed: {e}");
                        QueryResult::failed(host, &QueryError::Worker(e.to_string()))
                    }
                }
            }
            .boxed(),
        );
    }

    tasks
}
