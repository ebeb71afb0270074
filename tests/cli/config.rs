use crate::support::{lostfound, run_json, setup_campus, write_file};

#[test]
fn test_config_file_in_working_directory() {
    let dir = setup_campus();
    write_file(&dir, "lostfound.toml", "[duplicates]\nthreshold = 0.95\n");

    let json = run_json(&dir, &["duplicates"]);
    assert_eq!(json["threshold"], 0.95);
    assert_eq!(json["stats"]["duplicate_groups"], 0);

    // the flag wins over the file
    let json = run_json(&dir, &["duplicates", "--threshold", "0.7"]);
    assert_eq!(json["stats"]["duplicate_groups"], 2);
}

#[test]
fn test_config_from_environment() {
    let dir = setup_campus();
    let path = write_file(&dir, "custom.toml", "[tagging]\nconfidence_threshold = 0.4\n");

    let output = lostfound()
        .current_dir(dir.path())
        .env("LOSTFOUND_CONFIG", &path)
        .args(["categorize", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["confidence_threshold"], 0.4);
    assert_eq!(json["stats"]["categorized_items"], 2);
}

#[test]
fn test_config_feed_limit() {
    let dir = setup_campus();
    let path = write_file(&dir, "limits.toml", "[duplicates]\nfeed_limit = 1\n");

    let json = run_json(&dir, &["duplicates", "--config", path.to_str().unwrap()]);
    assert_eq!(json["stats"]["total_items"], 2);
}

#[test]
fn test_malformed_config_fails() {
    let dir = setup_campus();
    write_file(&dir, "lostfound.toml", "[duplicates\nthreshold = ");

    lostfound()
        .current_dir(dir.path())
        .arg("duplicates")
        .assert()
        .code(1);
}

#[test]
fn test_config_flag_wins_over_environment() {
    let dir = setup_campus();
    let env_path = write_file(&dir, "env.toml", "[duplicates]\nthreshold = 0.95\n");
    let flag_path = write_file(&dir, "flag.toml", "[duplicates]\nthreshold = 0.8\n");

    let output = lostfound()
        .current_dir(dir.path())
        .env("LOSTFOUND_CONFIG", &env_path)
        .args(["duplicates", "--format", "json", "--config"])
        .arg(&flag_path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["threshold"], 0.8);
}
