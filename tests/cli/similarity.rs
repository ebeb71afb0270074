use crate::support::{lostfound, run_json, setup_campus};
use predicates::prelude::*;

#[test]
fn test_similarity_human_breakdown() {
    let dir = setup_campus();

    lostfound()
        .current_dir(dir.path())
        .args(["similarity", "lost:1", "found:3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("title        1.00"))
        .stdout(predicate::str::contains("location     0.80"))
        .stdout(predicate::str::contains("category     1.00"))
        .stdout(predicate::str::contains("Similarity: 0.85"));
}

#[test]
fn test_similarity_json() {
    let dir = setup_campus();

    let json = run_json(&dir, &["similarity", "lost:1", "found:3"]);

    assert_eq!(json["first"], "lost:1");
    assert_eq!(json["second"], "found:3");
    assert_eq!(json["similarity"]["title"], 1.0);
    assert_eq!(json["similarity"]["location"], 0.8);
    assert!((json["similarity"]["score"].as_f64().unwrap() - 0.85).abs() < 1e-9);
}

#[test]
fn test_similarity_is_symmetric() {
    let dir = setup_campus();

    let ab = run_json(&dir, &["similarity", "lost:2", "found:5"]);
    let ba = run_json(&dir, &["similarity", "found:5", "lost:2"]);

    assert_eq!(ab["similarity"]["score"], ba["similarity"]["score"]);
}

#[test]
fn test_similarity_unknown_report() {
    let dir = setup_campus();

    lostfound()
        .current_dir(dir.path())
        .args(["similarity", "lost:1", "found:99"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("report not found: found:99"));
}

#[test]
fn test_similarity_kind_matters() {
    let dir = setup_campus();

    // id 3 only exists in the found table
    lostfound()
        .current_dir(dir.path())
        .args(["similarity", "lost:1", "lost:3"])
        .assert()
        .code(3);
}
