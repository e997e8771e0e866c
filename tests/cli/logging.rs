use crate::support::{graphwalk, write_map, CROSS_MAP};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Logging tests
// ============================================================================

#[test]
fn test_log_level_debug_shows_debug_messages() {
    let dir = tempdir().unwrap();
    let map = write_map(dir.path(), "cross.json", CROSS_MAP);

    graphwalk()
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .env_remove("GRAPHWALK_LOG")
        .args(["--log-level", "debug", "traverse"])
        .arg(&map)
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"));
}

#[test]
fn test_default_level_hides_debug_messages() {
    let dir = tempdir().unwrap();
    let map = write_map(dir.path(), "cross.json", CROSS_MAP);

    graphwalk()
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .env_remove("GRAPHWALK_LOG")
        .arg("traverse")
        .arg(&map)
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args").not());
}

#[test]
fn test_verbose_reaches_library_logs() {
    let dir = tempdir().unwrap();
    let map = write_map(dir.path(), "cross.json", CROSS_MAP);

    graphwalk()
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .env_remove("GRAPHWALK_LOG")
        .args(["--verbose", "traverse"])
        .arg(&map)
        .assert()
        .success()
        .stderr(predicate::str::contains("map loaded"));
}

#[test]
fn test_log_json_emits_structured_lines() {
    let dir = tempdir().unwrap();
    let map = write_map(dir.path(), "cross.json", CROSS_MAP);

    graphwalk()
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .env_remove("GRAPHWALK_LOG")
        .args(["--log-level", "debug", "--log-json", "traverse"])
        .arg(&map)
        .assert()
        .success()
        .stderr(predicate::str::contains("\"message\":\"parse_args\""));
}
