#![allow(missing_docs)]

use std::fs;
use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use serde_json::Value;
use tempfile::TempDir;

fn single_subdir(root: &PathBuf) -> PathBuf {
    let mut entries: Vec<PathBuf> = fs::read_dir(root)
        .expect("report root")
        .map(|e| e.expect("dir entry").path())
        .collect();
    assert_eq!(entries.len(), 1, "expected one timestamped dir");
    entries.remove(0)
}

#[test]
fn report_dir_receives_env_results_and_csv() {
    let dir = TempDir::new().expect("tempdir");
    let report_root = dir.path().join("reports");

    cargo_bin_cmd!("idiombench")
        .args([
            "run",
            "--only",
            "2",
            "--only",
            "5",
            "--only",
            "11",
            "--seed",
            "1",
        ])
        .arg("--scratch-dir")
        .arg(dir.path())
        .arg("--log-file")
        .arg(dir.path().join("log.txt"))
        .arg("--report-dir")
        .arg(&report_root)
        .assert()
        .success();

    let out_dir = single_subdir(&report_root);

    let env: Value =
        serde_json::from_slice(&fs::read(out_dir.join("env.json")).expect("env.json"))
            .expect("valid env json");
    assert!(env["cpu_logical_cores"].as_u64().unwrap_or(0) >= 1);
    assert!(env["timestamp_utc"].is_string());

    let results: Value =
        serde_json::from_slice(&fs::read(out_dir.join("results.json")).expect("results.json"))
            .expect("valid results json");
    let records = results.as_array().expect("array of records");
    assert_eq!(records.len(), 3);
    assert_eq!(records[0]["name"], "vec_push_growth");
    assert_eq!(records[1]["output"], "Found: 1000");
    assert_eq!(records[2]["id"], 11);
    assert!(records[2]["elapsed_ns"].as_u64().is_some());

    let mut reader =
        csv::Reader::from_path(out_dir.join("results.csv")).expect("results.csv");
    let rows: Vec<csv::StringRecord> =
        reader.records().map(|r| r.expect("csv row")).collect();
    assert_eq!(rows.len(), 3);
    assert_eq!(&rows[2][2], "1048575");
}

#[test]
fn runs_without_report_dir_leave_no_artifacts() {
    let dir = TempDir::new().expect("tempdir");
    cargo_bin_cmd!("idiombench")
        .args(["run", "--only", "11"])
        .arg("--scratch-dir")
        .arg(dir.path())
        .arg("--log-file")
        .arg(dir.path().join("log.txt"))
        .assert()
        .success();
    let names: Vec<String> = fs::read_dir(dir.path())
        .expect("scratch dir")
        .map(|e| e.expect("entry").file_name().to_string_lossy().into_owned())
        .collect();
    assert!(
        names.iter().all(|n| n != "reports"),
        "unexpected entries: {names:?}"
    );
}
