use crate::support::{graphwalk, stdout_json};
use predicates::prelude::*;

// ============================================================================
// Ancestor command tests
// ============================================================================

const FAMILY: [&str; 10] = [
    "1:3", "2:3", "3:6", "5:6", "5:7", "4:5", "4:8", "8:9", "11:8", "10:1",
];

fn family_args() -> Vec<String> {
    FAMILY
        .iter()
        .flat_map(|pair| ["--pair".to_string(), pair.to_string()])
        .collect()
}

#[test]
fn test_ancestor_follows_longest_chain() {
    graphwalk()
        .args(["ancestor", "--start", "6"])
        .args(family_args())
        .assert()
        .success()
        .stdout("10\n");
}

#[test]
fn test_ancestor_tie_prefers_lowest_id() {
    graphwalk()
        .args(["ancestor", "--start", "9"])
        .args(family_args())
        .assert()
        .success()
        .stdout("4\n");
}

#[test]
fn test_ancestor_without_parents() {
    graphwalk()
        .args(["ancestor", "--start", "10"])
        .args(family_args())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("-1"));
}

#[test]
fn test_ancestor_json() {
    let output = graphwalk()
        .args(["--format", "json", "ancestor", "--start", "8"])
        .args(family_args())
        .output()
        .unwrap();

    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["earliest_ancestor"], 4);
    assert_eq!(json["found"], true);
}

#[test]
fn test_ancestor_rejects_malformed_pair() {
    graphwalk()
        .args(["ancestor", "--start", "1", "--pair", "1-3"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("expected PARENT:CHILD"));
}

#[test]
fn test_ancestor_rejects_negative_pair() {
    graphwalk()
        .args(["ancestor", "--start", "5", "--pair=-1:5"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("must be non-negative"));
}

#[test]
fn test_ancestor_rejects_negative_start() {
    let output = graphwalk()
        .args(["--format", "json", "ancestor", "--start", "-3", "--pair", "1:3"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    let err: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(err["error"]["type"], "invalid_value");
}
