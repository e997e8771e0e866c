use crate::support::{graphwalk, write_map, DANGLING_MAP};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Help, version and error envelope tests
// ============================================================================

#[test]
fn test_help_lists_commands() {
    graphwalk()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: graphwalk"))
        .stdout(predicate::str::contains("traverse"))
        .stdout(predicate::str::contains("explore"))
        .stdout(predicate::str::contains("ancestor"));
}

#[test]
fn test_no_subcommand_prints_banner() {
    graphwalk()
        .assert()
        .success()
        .stdout(predicate::str::contains("graphwalk 0.1.0"));
}

#[test]
fn test_unknown_format_is_usage_error() {
    graphwalk()
        .args(["--format", "yaml", "ancestor", "--start", "1"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown format"));
}

#[test]
fn test_json_envelope_for_parse_errors() {
    let output = graphwalk()
        .args(["--format", "json", "traverse"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    let err: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(err["error"]["type"], "usage_error");
}

#[test]
fn test_missing_map_file_is_failure() {
    let dir = tempdir().unwrap();

    graphwalk()
        .current_dir(dir.path())
        .args(["traverse", "missing.json"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("IO error"));
}

#[test]
fn test_invalid_map_json_envelope() {
    let dir = tempdir().unwrap();
    let map = write_map(dir.path(), "dangling.json", DANGLING_MAP);

    let output = graphwalk()
        .current_dir(dir.path())
        .args(["--format", "json", "traverse"])
        .arg(&map)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(3));
    let err: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(err["error"]["type"], "invalid_map");
}
