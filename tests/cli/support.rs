use std::fs;
use std::path::PathBuf;

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use tempfile::TempDir;

/// Get a Command for lostfound
pub fn lostfound() -> Command {
    let mut cmd = cargo_bin_cmd!("lostfound");
    cmd.env_remove("LOSTFOUND_CONFIG").env_remove("LOSTFOUND_LOG");
    cmd
}

/// Two wallets, two phones and three unrelated reports, no timestamps
pub const CAMPUS_SNAPSHOT: &str = r#"{
  "lost_items": [
    {"id": 1, "title": "Blue Wallet", "description": "lost near library", "place": "Library"},
    {"id": 2, "title": "iPhone 13", "description": "black case cracked screen", "place": "Canteen"},
    {"id": 4, "title": "Chemistry Textbook", "description": null, "place": "Library"},
    {"id": 6, "title": "Car Keys", "description": "toyota key with red keychain", "place": "Parking Lot"}
  ],
  "found_items": [
    {"id": 3, "title": "Blue Wallet", "description": "found near library", "place": "Main Library"},
    {"id": 5, "title": "iPhone 13", "description": "black case with cracked screen", "place": "Main Canteen"},
    {"id": 7, "title": "Umbrella"}
  ],
  "profiles": [{"id": "u1"}, {"id": "u2"}]
}"#;

/// Temp dir holding `reports.json`, the default input name
pub fn setup_snapshot(content: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("reports.json"), content).unwrap();
    dir
}

#[allow(dead_code)]
pub fn setup_campus() -> TempDir {
    setup_snapshot(CAMPUS_SNAPSHOT)
}

/// Run a command expected to succeed and parse its stdout as JSON
#[allow(dead_code)]
pub fn run_json(dir: &TempDir, args: &[&str]) -> serde_json::Value {
    let output = lostfound()
        .current_dir(dir.path())
        .args(args)
        .args(["--format", "json"])
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

#[allow(dead_code)]
pub fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}
