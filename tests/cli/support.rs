use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

/// Get a Command for graphwalk
pub fn graphwalk() -> Command {
    cargo_bin_cmd!("graphwalk")
}

/// Two corridors meeting at room 0:
///
/// ```text
///   2
///   |
///   1
///   |
///   0 - 3 - 4
/// ```
pub const CROSS_MAP: &str = r#"{
  "0": { "coords": [0, 0], "exits": { "n": 1, "e": 3 } },
  "1": { "coords": [0, 1], "exits": { "n": 2, "s": 0 } },
  "2": { "coords": [0, 2], "exits": { "s": 1 } },
  "3": { "coords": [1, 0], "exits": { "w": 0, "e": 4 } },
  "4": { "coords": [2, 0], "exits": { "w": 3 } }
}"#;

/// Rooms 0 and 1 joined; room 2 cannot be reached
pub const ISLAND_MAP: &str = r#"{
  "0": { "exits": { "e": 1 } },
  "1": { "exits": { "w": 0 } },
  "2": { "exits": {} }
}"#;

/// Room 1 points at a room the map never defines
pub const DANGLING_MAP: &str = r#"{
  "0": { "exits": { "n": 1 } },
  "1": { "exits": { "s": 0, "n": 7 } }
}"#;

/// Write `content` as `name` inside `dir`
pub fn write_map(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

/// Parse stdout as JSON
pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap()
}
