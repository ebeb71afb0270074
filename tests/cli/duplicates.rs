use crate::support::{lostfound, run_json, setup_campus, setup_snapshot};
use predicates::prelude::*;

#[test]
fn test_duplicates_human() {
    let dir = setup_campus();

    lostfound()
        .current_dir(dir.path())
        .arg("duplicates")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Scanned 7 reports at threshold 0.70: 2 groups, 4 potential matches",
        ))
        .stdout(predicate::str::contains("group_lost:1  confidence 0.85 (high), 2 reports"))
        .stdout(predicate::str::contains("lost:1 Blue Wallet @ Library"))
        .stdout(predicate::str::contains("found:3 Blue Wallet @ Main Library"))
        .stdout(predicate::str::contains("Umbrella").not());
}

#[test]
fn test_duplicates_json_groups_ranked() {
    let dir = setup_campus();

    let json = run_json(&dir, &["duplicates"]);

    assert_eq!(json["threshold"], 0.7);
    assert_eq!(json["stats"]["total_items"], 7);
    assert_eq!(json["stats"]["duplicate_groups"], 2);
    assert_eq!(json["stats"]["potential_matches"], 4);

    let groups = json["groups"].as_array().unwrap();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0]["id"], "group_lost:2");
    assert_eq!(groups[1]["id"], "group_lost:1");
    assert!(groups[0]["confidence"].as_f64().unwrap() >= groups[1]["confidence"].as_f64().unwrap());
    assert!((groups[1]["confidence"].as_f64().unwrap() - 0.85).abs() < 1e-9);
    assert_eq!(groups[1]["average_similarity"], groups[1]["confidence"]);

    let members: Vec<(&str, &str)> = groups[1]["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| (m["type"].as_str().unwrap(), m["id"].as_str().unwrap()))
        .collect();
    assert_eq!(members, vec![("lost", "1"), ("found", "3")]);
}

#[test]
fn test_duplicates_records() {
    let dir = setup_campus();

    lostfound()
        .current_dir(dir.path())
        .args(["duplicates", "--format", "records"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "H lostfound=1 mode=duplicates threshold=0.70 items=7 groups=2 matches=4",
        ))
        .stdout(predicate::str::contains("G group_lost:1 confidence=0.85 level=high members=2"))
        .stdout(predicate::str::contains(
            "M group_lost:1 found:3 \"Blue Wallet\" place=\"Main Library\"",
        ));
}

#[test]
fn test_duplicates_high_threshold_finds_nothing() {
    let dir = setup_campus();

    let json = run_json(&dir, &["duplicates", "--threshold", "0.95"]);
    assert_eq!(json["stats"]["duplicate_groups"], 0);
    assert_eq!(json["stats"]["total_items"], 7);

    lostfound()
        .current_dir(dir.path())
        .args(["duplicates", "-t", "0.95"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No duplicate groups found"));
}

#[test]
fn test_duplicates_search_filters_display_only() {
    let dir = setup_campus();

    let json = run_json(&dir, &["duplicates", "--search", "CRACKED"]);

    let groups = json["groups"].as_array().unwrap();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0]["id"], "group_lost:2");
    assert_eq!(json["stats"]["duplicate_groups"], 2);

    let json = run_json(&dir, &["duplicates", "--search", "passport"]);
    assert!(json["groups"].as_array().unwrap().is_empty());
}

#[test]
fn test_duplicates_limit_per_table() {
    let dir = setup_campus();

    // Rows without timestamps keep file order: lost 1 and found 3 remain
    let json = run_json(&dir, &["duplicates", "--limit", "1"]);

    assert_eq!(json["stats"]["total_items"], 2);
    assert_eq!(json["groups"][0]["id"], "group_lost:1");
}

#[test]
fn test_duplicates_empty_snapshot() {
    let dir = setup_snapshot("{}");

    let json = run_json(&dir, &["duplicates"]);
    assert_eq!(json["stats"]["total_items"], 0);
    assert!(json["groups"].as_array().unwrap().is_empty());
}

#[test]
fn test_duplicates_quiet_suppresses_header() {
    let dir = setup_campus();

    lostfound()
        .current_dir(dir.path())
        .args(["duplicates", "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Scanned").not())
        .stdout(predicate::str::contains("group_lost:2"));
}

#[test]
fn test_duplicates_out_of_range_threshold_is_clamped() {
    let dir = setup_campus();

    let json = run_json(&dir, &["duplicates", "--threshold", "1.5"]);
    assert_eq!(json["threshold"], 1.0);
    assert_eq!(json["stats"]["duplicate_groups"], 0);

    let json = run_json(&dir, &["duplicates", "--threshold", "0"]);
    assert_eq!(json["threshold"], 0.01);
    assert_eq!(json["stats"]["total_items"], 7);
}

#[test]
fn test_duplicates_group_ids_name_the_anchor_kind() {
    let dir = setup_snapshot(
        r#"{
          "lost_items": [
            {"id": 1, "title": "Blue Wallet", "description": "lost near library", "place": "Library"},
            {"id": 2, "title": "iPhone 13", "description": "black case with cracked screen", "place": "Main Canteen"}
          ],
          "found_items": [
            {"id": 1, "title": "iPhone 13", "description": "black case cracked screen", "place": "Canteen"},
            {"id": 2, "title": "Blue Wallet", "description": "found near library", "place": "Main Library"}
          ]
        }"#,
    );

    lostfound()
        .current_dir(dir.path())
        .args(["duplicates", "--format", "records"])
        .assert()
        .success()
        .stdout(predicate::str::contains("G group_lost:1 "))
        .stdout(predicate::str::contains("G group_lost:2 "))
        .stdout(predicate::str::contains("M group_lost:2 found:1 \"iPhone 13\""));
}
