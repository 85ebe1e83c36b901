//! Filesystem tasks: a discard sink, a write/read round trip and an
//! append-only log.

use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter, Read, Write};

use crate::config::SuiteConfig;
use crate::error::Result;

/// Task 3: stream 10 001 lines into a discard file. Nothing reads the
/// content back; the write path itself is the workload.
pub fn discard_writes(config: &SuiteConfig) -> Result<String> {
    let file = File::create(config.scratch_file("discard.out"))?;
    let mut sink = BufWriter::new(file);
    let mut lines = 0u64;
    for i in 0..10_000 {
        writeln!(sink, "Number: {i}")?;
        lines += 1;
    }
    writeln!(sink, "Done")?;
    lines += 1;
    sink.flush()?;
    Ok(format!("Wrote: {lines} lines"))
}

/// Task 10: write a 100 000-character run of `x`, then re-read the file one
/// byte at a time and count.
pub fn file_roundtrip(config: &SuiteConfig) -> Result<String> {
    let path = config.scratch_file("test.txt");
    std::fs::write(&path, "x".repeat(100_000))?;

    let file = File::open(&path)?;
    let mut count = 0u64;
    for byte in BufReader::new(file).bytes() {
        byte?;
        count += 1;
    }
    Ok(format!("Read {count} chars."))
}

/// Task 21: append 1000 entries to the configured log file.
///
/// The log is never rotated or truncated, so it grows across runs. Redirect
/// it with the log-path setting if the accumulation is unwanted.
pub fn log_append(config: &SuiteConfig) -> Result<String> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_path)?;
    let mut out = BufWriter::new(file);
    let mut entries = 0u64;
    for i in 0..1000 {
        writeln!(out, "Log entry {i}")?;
        entries += 1;
    }
    out.flush()?;
    Ok(format!("Appended: {entries} entries"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SuiteConfig;
    use tempfile::TempDir;

    fn scoped_config(dir: &TempDir) -> SuiteConfig {
        SuiteConfig::with_seed(0).rooted_at(dir.path())
    }

    #[test]
    fn discard_file_receives_every_line() {
        let dir = TempDir::new().expect("tempdir");
        let config = scoped_config(&dir);
        assert_eq!(discard_writes(&config).unwrap(), "Wrote: 10001 lines");
        let written = std::fs::read_to_string(config.scratch_file("discard.out")).unwrap();
        assert_eq!(written.lines().count(), 10_001);
    }

    #[test]
    fn roundtrip_count_equals_characters_written() {
        let dir = TempDir::new().expect("tempdir");
        let config = scoped_config(&dir);
        assert_eq!(file_roundtrip(&config).unwrap(), "Read 100000 chars.");
    }

    #[test]
    fn log_accumulates_across_runs() {
        let dir = TempDir::new().expect("tempdir");
        let config = scoped_config(&dir);
        assert_eq!(log_append(&config).unwrap(), "Appended: 1000 entries");
        assert_eq!(log_append(&config).unwrap(), "Appended: 1000 entries");
        let log = std::fs::read_to_string(&config.log_path).unwrap();
        // Append-only, no rotation: two runs leave both batches in place.
        assert_eq!(log.lines().count(), 2000);
    }
}
