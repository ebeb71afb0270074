use crate::support::{lostfound, run_json, setup_campus};
use predicates::prelude::*;

const NOW: &str = "2024-03-10T12:00:00Z";

#[test]
fn test_summary_json() {
    let dir = setup_campus();

    let json = run_json(&dir, &["summary", "--now", NOW]);

    let overview = &json["overview"];
    assert_eq!(overview["total_items"], 7);
    assert_eq!(overview["lost_items"], 4);
    assert_eq!(overview["found_items"], 3);
    assert_eq!(overview["resolved_items"], 0);
    assert_eq!(overview["active_users"], 2);
    assert_eq!(overview["success_rate"], 0.0);

    assert_eq!(json["trends"]["daily"].as_array().unwrap().len(), 7);
    assert_eq!(json["trends"]["daily"][6]["label"], "2024-03-10");
    assert_eq!(json["trends"]["weekly"][0]["label"], "Week 1");

    assert_eq!(json["insights"]["top_locations"][0]["location"], "library");
    assert_eq!(json["insights"]["top_locations"][0]["count"], 2);
    assert!(json["insights"]["peak_hours"].as_array().unwrap().is_empty());

    let titles: Vec<&str> = json["recommendations"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Low Success Rate", "High-Risk Location"]);
    assert_eq!(json["recommendations"][0]["kind"], "warning");
}

#[test]
fn test_summary_human() {
    let dir = setup_campus();

    lostfound()
        .current_dir(dir.path())
        .args(["summary", "--now", NOW])
        .assert()
        .success()
        .stdout(predicate::str::contains("7 reports (4 lost, 3 found), 0 resolved, 2 users"))
        .stdout(predicate::str::contains("Top locations: library (2)"))
        .stdout(predicate::str::contains("[warning] Low Success Rate"));
}

#[test]
fn test_summary_records() {
    let dir = setup_campus();

    lostfound()
        .current_dir(dir.path())
        .args(["summary", "--now", NOW, "--format", "records"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("H lostfound=1 mode=summary"))
        .stdout(predicate::str::contains("D 2024-03-10 lost=0 found=0 resolved=0"))
        .stdout(predicate::str::contains("L \"library\" count=2"));
}

#[test]
fn test_summary_rejects_bad_timestamp() {
    let dir = setup_campus();

    lostfound()
        .current_dir(dir.path())
        .args(["summary", "--now", "yesterday"])
        .assert()
        .code(2);
}
