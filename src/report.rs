//! Run-report artifacts.
//!
//! A run can optionally archive its results the way the CI collector does:
//! a timestamped directory holding `env.json` (host snapshot), `results.json`
//! and `results.csv` (one record per executed task).

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use csv::Writer;
use serde::Serialize;

use crate::env::HostInfo;
use crate::error::Result;
use crate::runner::TaskOutcome;

/// One per-task row in the report artifacts.
#[derive(Debug, Serialize)]
pub struct TaskRecord {
    /// Task ordinal.
    pub id: u16,
    /// Registered task name.
    pub name: String,
    /// Summary line the task emitted.
    pub output: String,
    /// Wall time in nanoseconds.
    pub elapsed_ns: u128,
}

impl From<&TaskOutcome> for TaskRecord {
    fn from(outcome: &TaskOutcome) -> Self {
        Self {
            id: outcome.id,
            name: outcome.name.to_string(),
            output: outcome.line.clone(),
            elapsed_ns: outcome.elapsed.as_nanos(),
        }
    }
}

/// Writes `env.json`, `results.json` and `results.csv` for a completed run.
///
/// Artifacts land under `root/<UTC timestamp>/`; the created directory is
/// returned so callers can point at it.
pub fn write_artifacts(root: &Path, outcomes: &[TaskOutcome]) -> Result<PathBuf> {
    let timestamp = Utc::now().format("%Y%m%dT%H%M%SZ").to_string();
    let out_dir = root.join(timestamp);
    fs::create_dir_all(&out_dir)?;

    let env = HostInfo::collect();
    fs::write(out_dir.join("env.json"), serde_json::to_vec_pretty(&env)?)?;

    let records: Vec<TaskRecord> = outcomes.iter().map(TaskRecord::from).collect();
    fs::write(
        out_dir.join("results.json"),
        serde_json::to_vec_pretty(&records)?,
    )?;
    write_csv(out_dir.join("results.csv"), &records)?;

    Ok(out_dir)
}

fn write_csv(path: PathBuf, rows: &[TaskRecord]) -> Result<()> {
    let mut writer = Writer::from_path(path)?;
    writer.write_record(["id", "name", "output", "elapsed_ns"])?;
    for row in rows {
        writer.write_record(&[
            row.id.to_string(),
            row.name.clone(),
            row.output.clone(),
            row.elapsed_ns.to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}
