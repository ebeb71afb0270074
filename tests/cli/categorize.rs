use crate::support::{lostfound, run_json, setup_campus};
use predicates::prelude::*;

#[test]
fn test_categorize_json_stats() {
    let dir = setup_campus();

    let json = run_json(&dir, &["categorize"]);

    assert_eq!(json["confidence_threshold"], 0.7);
    assert_eq!(json["stats"]["total_items"], 7);
    assert_eq!(json["stats"]["categorized_items"], 1);
    assert_eq!(json["stats"]["accuracy"], 14.29);
    assert_eq!(json["stats"]["categories_found"], 5);

    let predictions = json["predictions"].as_array().unwrap();
    assert_eq!(predictions.len(), 1);
    assert_eq!(predictions[0]["id"], "6");
    assert_eq!(predictions[0]["category"], "Keys");
    assert_eq!(predictions[0]["confidence"], 1.0);

    let distribution = json["distribution"].as_array().unwrap();
    assert_eq!(distribution.len(), 10);
    assert_eq!(distribution[0]["category"], "Electronics");
    assert_eq!(distribution[0]["count"], 2);
}

#[test]
fn test_categorize_lower_confidence_and_category_filter() {
    let dir = setup_campus();

    let json = run_json(&dir, &["categorize", "--confidence", "0.4"]);
    let ids: Vec<&str> = json["predictions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["4", "6"]);

    let json = run_json(&dir, &["categorize", "-c", "0.4", "--category", "books"]);
    assert_eq!(json["predictions"].as_array().unwrap().len(), 1);
    assert_eq!(json["predictions"][0]["category"], "Books");
}

#[test]
fn test_categorize_plan() {
    let dir = setup_campus();

    let json = run_json(&dir, &["categorize", "--plan", "--confidence", "0.4"]);
    let updates = json.as_array().unwrap();

    assert_eq!(updates.len(), 2);
    assert_eq!(updates[0]["table"], "lost_items");
    assert_eq!(updates[0]["id"], "4");
    assert_eq!(updates[0]["category"], "Books");
    assert_eq!(updates[0]["auto_categorized"], true);
    assert_eq!(updates[1]["id"], "6");

    lostfound()
        .current_dir(dir.path())
        .args(["categorize", "--plan"])
        .assert()
        .success()
        .stdout(predicate::str::contains("lost_items.6 -> Keys (1.00)"));
}

#[test]
fn test_categorize_human() {
    let dir = setup_campus();

    lostfound()
        .current_dir(dir.path())
        .arg("categorize")
        .assert()
        .success()
        .stdout(predicate::str::contains("7 reports, 1 categorized at confidence 0.70"))
        .stdout(predicate::str::contains("Keys         1.00  lost:6  Car Keys"));
}

#[test]
fn test_categorize_confidence_above_one_is_clamped() {
    let dir = setup_campus();

    let json = run_json(&dir, &["categorize", "--confidence", "2"]);
    assert_eq!(json["confidence_threshold"], 1.0);
    assert_eq!(json["stats"]["categorized_items"], 1);
}
