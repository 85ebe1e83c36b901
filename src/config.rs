//! Suite-wide configuration.
//!
//! Only knobs that affect reproducibility or shared side effects live here
//! (worker counts, RNG seed, filesystem destinations). Per-task dataset
//! sizes stay fixed so that results remain comparable across runs.

use std::path::{Path, PathBuf};

/// Default worker count for the threaded counter task.
pub const DEFAULT_WORKERS: usize = 8;
/// Default per-worker increment count for the threaded counter task.
pub const DEFAULT_INCREMENTS: u64 = 1_000_000;

/// Configuration shared by all tasks in a run.
#[derive(Debug, Clone)]
pub struct SuiteConfig {
    /// Seed for tasks that draw random values. Pinning it makes every task
    /// in the suite deterministic.
    pub seed: u64,
    /// Worker threads spawned by the atomic counter task.
    pub workers: usize,
    /// Increments each worker applies to the shared counter.
    pub increments: u64,
    /// Directory receiving the discard file and the read-back file.
    pub scratch_dir: PathBuf,
    /// Append-only log file. Grows without rotation across runs.
    pub log_path: PathBuf,
}

impl SuiteConfig {
    /// Config with a caller-chosen seed and defaults for everything else.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            workers: DEFAULT_WORKERS,
            increments: DEFAULT_INCREMENTS,
            scratch_dir: PathBuf::from("."),
            log_path: PathBuf::from("log.txt"),
        }
    }

    /// Path of a scratch file used by a task.
    pub fn scratch_file(&self, name: &str) -> PathBuf {
        self.scratch_dir.join(name)
    }

    /// Redirects all filesystem side effects under `dir`.
    pub fn rooted_at(mut self, dir: &Path) -> Self {
        self.scratch_dir = dir.to_path_buf();
        self.log_path = dir.join("log.txt");
        self
    }
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self::with_seed(0)
    }
}
