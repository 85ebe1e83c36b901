//! Task registry and timing harness.
//!
//! Provides quick per-task wall-time measurements with minimal overhead; no
//! warmup or statistical analysis, one execution per task per run.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::config::SuiteConfig;
use crate::error::{BenchError, Result};
use crate::tasks;

/// One registered benchmark task.
pub struct Task {
    /// Ordinal within the suite, 1-based.
    pub id: u16,
    /// Short name used in listings and report artifacts.
    pub name: &'static str,
    /// Task body. Returns the single summary line for stdout.
    pub run: fn(&SuiteConfig) -> Result<String>,
}

/// Outcome of one executed task.
#[derive(Debug)]
pub struct TaskOutcome {
    /// Ordinal of the task that produced this outcome.
    pub id: u16,
    /// Registered task name.
    pub name: &'static str,
    /// Summary line the task printed.
    pub line: String,
    /// Wall time spent in the task body.
    pub elapsed: Duration,
}

impl TaskOutcome {
    /// Prints the header row of the timing table.
    pub fn print_table_header() {
        println!("\n{:<6} {:<24} {:>12}", "TASK", "NAME", "TIME");
    }

    /// Prints this outcome as one timing-table row.
    pub fn print_table_row(&self) {
        println!(
            "{:<6} {:<24} {:>12}",
            self.id,
            self.name,
            format_duration(self.elapsed)
        );
    }
}

/// Runs a single task under the timing wrapper.
pub fn run_task(task: &Task, config: &SuiteConfig) -> Result<TaskOutcome> {
    let start = Instant::now();
    let line = (task.run)(config)?;
    let elapsed = start.elapsed();
    debug!(id = task.id, name = task.name, elapsed_us = elapsed.as_micros() as u64, "task finished");
    Ok(TaskOutcome {
        id: task.id,
        name: task.name,
        line,
        elapsed,
    })
}

/// Resolves a task selection into registry entries, preserving suite order.
///
/// An empty selection means the full suite. Duplicate ordinals collapse to a
/// single execution.
pub fn select(only: &[u16]) -> Result<Vec<Task>> {
    let registry = tasks::all();
    if only.is_empty() {
        return Ok(registry);
    }
    for id in only {
        if !registry.iter().any(|t| t.id == *id) {
            return Err(BenchError::UnknownTask(*id));
        }
    }
    Ok(registry
        .into_iter()
        .filter(|t| only.contains(&t.id))
        .collect())
}

/// Human-readable duration with µs/ms/s scaling.
pub fn format_duration(d: Duration) -> String {
    let micros = d.as_micros();
    if micros < 1_000 {
        format!("{} µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2} ms", micros as f64 / 1_000.0)
    } else {
        format!("{:.2} s", micros as f64 / 1_000_000.0)
    }
}
