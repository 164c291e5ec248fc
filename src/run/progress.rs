//! Progress logging.

use std::time::Instant;

use log::info;

use crate::config::PROGRESS_LOG_INTERVAL;

/// Logs a progress line every `PROGRESS_LOG_INTERVAL` hosts and on the last one.
pub fn log_progress(start_time: Instant, completed: usize, total: usize) {
    if completed != total && completed % PROGRESS_LOG_INTERVAL != 0 {
        return;
    }
    let elapsed_secs = start_time.elapsed().as_secs_f64();
    let rate = if elapsed_secs > 0.0 {
        completed as f64 / elapsed_secs
    } else {
        0.0
    };
    info!(
        "Resolved {}/{} hosts in {:.2} seconds (~{:.2} hosts/sec)",
        completed, total, elapsed_secs, rate
    );
}
