//! Micro-benchmark suite of fifty isolated language and library idioms.
//!
//! Each task builds a synthetic dataset, exercises exactly one idiom over it
//! (string concatenation, vector growth, hash lookups, virtual dispatch,
//! threaded counting, ...) and reports one summary line. Tasks share no state
//! and can be run individually or as the full ordered suite.

#![warn(missing_docs)]

pub mod config;
pub mod env;
pub mod error;
pub mod report;
pub mod runner;
pub mod tasks;

pub use config::SuiteConfig;
pub use error::{BenchError, Result};
pub use runner::{Task, TaskOutcome};
