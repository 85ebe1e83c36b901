//! The one concurrent task: a shared atomic counter incremented from a
//! fixed pool of worker threads.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use std::thread;

use crate::config::SuiteConfig;
use crate::error::{BenchError, Result};

/// Task 16: each worker applies its increments to a shared counter, then all
/// workers join before the task returns.
///
/// Increments are symmetric and order-independent, so relaxed fetch-adds
/// suffice; the final value is exactly `workers * increments` for any
/// interleaving.
pub fn atomic_counter(config: &SuiteConfig) -> Result<String> {
    let counter = Arc::new(AtomicI64::new(0));

    let mut handles = Vec::with_capacity(config.workers);
    for _ in 0..config.workers {
        let counter = Arc::clone(&counter);
        let increments = config.increments;
        handles.push(thread::spawn(move || {
            for _ in 0..increments {
                counter.fetch_add(1, Ordering::Relaxed);
            }
        }));
    }
    for handle in handles {
        handle.join().map_err(|_| BenchError::WorkerPanic)?;
    }

    Ok(format!("{}", counter.load(Ordering::SeqCst)))
}
