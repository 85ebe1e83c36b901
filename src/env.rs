//! Host metadata captured alongside benchmark results.
//!
//! Micro-benchmark numbers are meaningless without the machine they ran on,
//! so every report artifact embeds a snapshot of the host and, when the suite
//! runs inside a checkout, the git revision.

use std::process::Command;

use chrono::{DateTime, Utc};
use serde::Serialize;
use sysinfo::{RefreshKind, System};

/// Snapshot of the host a benchmark run executed on.
#[derive(Debug, Serialize)]
pub struct HostInfo {
    /// UTC time the snapshot was taken.
    pub timestamp_utc: DateTime<Utc>,
    /// Host name, if the OS reports one.
    pub hostname: Option<String>,
    /// Long OS version string.
    pub os_version: Option<String>,
    /// Kernel version string.
    pub kernel_version: Option<String>,
    /// Brand string of the first CPU.
    pub cpu_brand: Option<String>,
    /// Physical core count, if known.
    pub cpu_physical_cores: Option<usize>,
    /// Logical core count, at least 1.
    pub cpu_logical_cores: usize,
    /// Total memory in bytes.
    pub total_memory_bytes: u64,
    /// Git revision of the working tree, if one is present.
    pub git: Option<GitInfo>,
}

/// Git revision metadata.
#[derive(Debug, Serialize)]
pub struct GitInfo {
    /// Full commit hash.
    pub commit: String,
    /// Branch name, if resolvable.
    pub branch: Option<String>,
    /// Whether uncommitted changes were present.
    pub dirty: bool,
}

impl HostInfo {
    /// Collects a snapshot of the current host.
    pub fn collect() -> Self {
        let mut sys = System::new_with_specifics(RefreshKind::everything());
        sys.refresh_all();
        Self {
            timestamp_utc: Utc::now(),
            hostname: System::host_name(),
            os_version: System::long_os_version(),
            kernel_version: System::kernel_version(),
            cpu_brand: sys.cpus().first().map(|cpu| cpu.brand().to_string()),
            cpu_physical_cores: sys.physical_core_count(),
            cpu_logical_cores: sys.cpus().len().max(1),
            total_memory_bytes: sys.total_memory(),
            git: collect_git_info(),
        }
    }
}

fn collect_git_info() -> Option<GitInfo> {
    let commit = run_git(&["rev-parse", "HEAD"])?.trim().to_string();
    let branch = run_git(&["rev-parse", "--abbrev-ref", "HEAD"]).map(|s| s.trim().to_string());
    let dirty = run_git(&["status", "--porcelain"])
        .map(|out| !out.trim().is_empty())
        .unwrap_or(false);
    Some(GitInfo {
        commit,
        branch,
        dirty,
    })
}

fn run_git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout).ok()
}
