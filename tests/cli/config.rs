use crate::support::{graphwalk, stdout_json, write_map, CROSS_MAP, ISLAND_MAP};
use std::fs;
use tempfile::tempdir;

// ============================================================================
// Configuration file tests
// ============================================================================

#[test]
fn test_discovered_config_sets_default_order() {
    let dir = tempdir().unwrap();
    let map = write_map(dir.path(), "cross.json", CROSS_MAP);
    fs::write(
        dir.path().join("graphwalk.toml"),
        "[traversal]\norder = \"dfs-recursive\"\n",
    )
    .unwrap();

    let output = graphwalk()
        .current_dir(dir.path())
        .args(["--format", "json", "traverse"])
        .arg(&map)
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["order"], "dfs-recursive");
}

#[test]
fn test_flag_overrides_config() {
    let dir = tempdir().unwrap();
    let map = write_map(dir.path(), "cross.json", CROSS_MAP);
    fs::write(
        dir.path().join("graphwalk.toml"),
        "[search]\nstrategy = \"dfs\"\n",
    )
    .unwrap();

    let output = graphwalk()
        .current_dir(dir.path())
        .args(["--format", "json", "path", "--from", "0", "--to", "4"])
        .args(["--strategy", "bfs"])
        .arg(&map)
        .output()
        .unwrap();

    assert_eq!(stdout_json(&output)["strategy"], "bfs");
}

#[test]
fn test_explicit_config_disables_verification() {
    let dir = tempdir().unwrap();
    let map = write_map(dir.path(), "island.json", ISLAND_MAP);
    let config = dir.path().join("walk.toml");
    fs::write(&config, "[walk]\nverify = false\n").unwrap();

    graphwalk()
        .current_dir(dir.path())
        .arg("--config")
        .arg(&config)
        .arg("explore")
        .arg(&map)
        .assert()
        .success();
}

#[test]
fn test_config_known_total_mode() {
    let dir = tempdir().unwrap();
    let map = write_map(dir.path(), "cross.json", CROSS_MAP);
    fs::write(
        dir.path().join("graphwalk.toml"),
        "[walk]\ntermination = \"known-total\"\n",
    )
    .unwrap();

    let output = graphwalk()
        .current_dir(dir.path())
        .args(["--format", "json", "explore"])
        .arg(&map)
        .output()
        .unwrap();

    assert_eq!(stdout_json(&output)["termination"], "known-total");
}

#[test]
fn test_malformed_config_fails() {
    let dir = tempdir().unwrap();
    let map = write_map(dir.path(), "cross.json", CROSS_MAP);
    fs::write(dir.path().join("graphwalk.toml"), "[walk\n").unwrap();

    graphwalk()
        .current_dir(dir.path())
        .arg("traverse")
        .arg(&map)
        .assert()
        .code(1);
}
