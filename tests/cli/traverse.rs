use crate::support::{graphwalk, stdout_json, write_map, CROSS_MAP};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Traverse command tests
// ============================================================================

#[test]
fn test_traverse_breadth_first_by_default() {
    let dir = tempdir().unwrap();
    let map = write_map(dir.path(), "cross.json", CROSS_MAP);

    graphwalk()
        .current_dir(dir.path())
        .arg("traverse")
        .arg(&map)
        .assert()
        .success()
        .stdout(predicate::str::contains("bfs from room 0: 5 rooms reachable"))
        .stdout(predicate::str::contains("0 1 3 2 4"));
}

#[test]
fn test_traverse_quiet_prints_only_ids() {
    let dir = tempdir().unwrap();
    let map = write_map(dir.path(), "cross.json", CROSS_MAP);

    graphwalk()
        .current_dir(dir.path())
        .args(["--quiet", "traverse", "--start", "2"])
        .arg(&map)
        .assert()
        .success()
        .stdout("2 1 0 3 4\n");
}

#[test]
fn test_traverse_depth_first_json() {
    let dir = tempdir().unwrap();
    let map = write_map(dir.path(), "cross.json", CROSS_MAP);

    let output = graphwalk()
        .current_dir(dir.path())
        .args(["--format", "json", "traverse", "--order", "dfs"])
        .arg(&map)
        .output()
        .unwrap();

    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["order"], "dfs");
    assert_eq!(json["start"], 0);
    assert_eq!(json["count"], 5);
    assert_eq!(json["visited"][0], 0);
}

#[test]
fn test_traverse_recursive_order_follows_lowest_neighbor() {
    let dir = tempdir().unwrap();
    let map = write_map(dir.path(), "cross.json", CROSS_MAP);

    graphwalk()
        .current_dir(dir.path())
        .args(["-q", "traverse", "--order", "dfs-recursive"])
        .arg(&map)
        .assert()
        .success()
        .stdout("0 1 2 3 4\n");
}

#[test]
fn test_traverse_unknown_start_is_data_error() {
    let dir = tempdir().unwrap();
    let map = write_map(dir.path(), "cross.json", CROSS_MAP);

    graphwalk()
        .current_dir(dir.path())
        .args(["traverse", "--start", "42"])
        .arg(&map)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("unknown vertex: 42"));
}

#[test]
fn test_traverse_rejects_unknown_order() {
    let dir = tempdir().unwrap();
    let map = write_map(dir.path(), "cross.json", CROSS_MAP);

    graphwalk()
        .current_dir(dir.path())
        .args(["traverse", "--order", "astar"])
        .arg(&map)
        .assert()
        .code(2);
}

#[test]
fn test_traverse_recursive_on_long_corridor_is_data_error() {
    let dir = tempdir().unwrap();
    let rooms: Vec<String> = (0..1500u32)
        .map(|id| {
            let mut exits = Vec::new();
            if id > 0 {
                exits.push(format!("\"s\": {}", id - 1));
            }
            if id + 1 < 1500 {
                exits.push(format!("\"n\": {}", id + 1));
            }
            format!("\"{}\": {{ \"exits\": {{ {} }} }}", id, exits.join(", "))
        })
        .collect();
    let map = write_map(
        dir.path(),
        "corridor.json",
        &format!("{{ {} }}", rooms.join(",\n")),
    );

    graphwalk()
        .current_dir(dir.path())
        .args(["traverse", "--order", "dfs-recursive"])
        .arg(&map)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("recursion depth limit"));

    graphwalk()
        .current_dir(dir.path())
        .args(["-q", "traverse", "--order", "dfs"])
        .arg(&map)
        .assert()
        .success();
}
