//! Error taxonomy for the benchmark suite.
//!
//! Tasks perform no local recovery: anything that fails propagates with `?`
//! and aborts the run at the top level.

use std::io;
use std::num::ParseIntError;
use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, BenchError>;

/// Errors surfaced by the suite. All are fatal to the run.
#[derive(Debug, Error)]
pub enum BenchError {
    /// Scratch-file or report I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// A fixed-input numeric parse failed.
    #[error("parse error: {0}")]
    Parse(#[from] ParseIntError),
    /// A regex pattern failed to compile.
    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),
    /// Report serialization failed.
    #[error("serialization error: {0}")]
    Serialization(String),
    /// A request named a task ordinal outside 1..=50.
    #[error("unknown task ordinal: {0}")]
    UnknownTask(u16),
    /// A counter worker thread panicked before joining.
    #[error("worker thread panicked")]
    WorkerPanic,
}

impl From<serde_json::Error> for BenchError {
    fn from(err: serde_json::Error) -> Self {
        BenchError::Serialization(err.to_string())
    }
}

impl From<csv::Error> for BenchError {
    fn from(err: csv::Error) -> Self {
        BenchError::Serialization(err.to_string())
    }
}
