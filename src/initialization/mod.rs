//! Application initialization and resource setup.
//!
//! This module provides the logger setup and the semaphore that bounds how
//! many queries run at once.

mod logger;

use std::sync::Arc;

use tokio::sync::Semaphore;

// Re-export public API
pub use logger::init_logger_with;

/// Initializes a semaphore for controlling concurrency.
///
/// Each query task holds one permit while its command runs, so at most `count`
/// commands are alive at any moment.
pub fn init_semaphore(count: usize) -> Arc<Semaphore> {
    Arc::new(Semaphore::new(count))
}
