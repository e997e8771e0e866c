//! Configuration type definitions

use serde::{Deserialize, Serialize};

use crate::graph::Strategy;
use crate::maze::Termination;

/// How the maze walker decides it is done
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TerminationMode {
    /// Local information only: stop when nothing reachable is unexplored
    #[default]
    Exhaustive,
    /// Stop once every room of the loaded map has been discovered
    KnownTotal,
}

impl TerminationMode {
    /// Resolve to a walker termination for a map of `total` rooms
    pub fn for_total(self, total: usize) -> Termination {
        match self {
            TerminationMode::Exhaustive => Termination::Exhaustive,
            TerminationMode::KnownTotal => Termination::KnownTotal(total),
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub walk: WalkConfig,

    #[serde(default)]
    pub search: SearchConfig,

    #[serde(default)]
    pub traversal: TraversalConfig,
}

/// Maze walker settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalkConfig {
    #[serde(default)]
    pub termination: TerminationMode,

    /// Replay the recorded path after a walk and check coverage
    #[serde(default = "default_verify")]
    pub verify: bool,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            termination: TerminationMode::default(),
            verify: default_verify(),
        }
    }
}

fn default_verify() -> bool {
    true
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    #[serde(default)]
    pub strategy: Strategy,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraversalConfig {
    #[serde(default)]
    pub order: Strategy,
}
