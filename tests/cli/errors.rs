use crate::support::{lostfound, setup_snapshot};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_help_flag() {
    lostfound()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: lostfound"))
        .stdout(predicate::str::contains("duplicates"))
        .stdout(predicate::str::contains("similarity"))
        .stdout(predicate::str::contains("summary"));
}

#[test]
fn test_no_command_prints_banner() {
    lostfound()
        .assert()
        .success()
        .stdout(predicate::str::contains("lostfound"));
}

#[test]
fn test_missing_snapshot_exit_code() {
    let dir = tempdir().unwrap();

    lostfound()
        .current_dir(dir.path())
        .arg("duplicates")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("snapshot not found"));
}

#[test]
fn test_missing_snapshot_json_envelope() {
    let dir = tempdir().unwrap();

    let output = lostfound()
        .current_dir(dir.path())
        .args(["duplicates", "--format", "json"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(3));
    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["code"], 3);
    assert_eq!(json["error"]["type"], "snapshot_not_found");
}

#[test]
fn test_invalid_snapshot_exit_code() {
    let dir = setup_snapshot("{\"lost_items\": [{\"title\": \"no id\"}]}");

    lostfound()
        .current_dir(dir.path())
        .arg("duplicates")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid snapshot"));
}

#[test]
fn test_usage_error_exit_code() {
    lostfound()
        .args(["duplicates", "--threshold", "high"])
        .assert()
        .code(2);

    lostfound().args(["similarity", "lost:1"]).assert().code(2);

    lostfound()
        .args(["duplicates", "--format", "yaml"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown format"));
}

#[test]
fn test_usage_error_json_envelope() {
    let output = lostfound()
        .args(["duplicates", "--threshold", "abc", "--format", "json"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["code"], 2);
    assert_eq!(json["error"]["type"], "usage_error");
}

#[test]
fn test_quiet_hides_error_text() {
    let dir = tempdir().unwrap();

    lostfound()
        .current_dir(dir.path())
        .args(["duplicates", "--quiet"])
        .assert()
        .code(3)
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_watch_rejects_zero_interval() {
    let dir = setup_snapshot("{}");

    lostfound()
        .current_dir(dir.path())
        .args(["watch", "--interval-ms", "0"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("at least 1 ms"));
}
