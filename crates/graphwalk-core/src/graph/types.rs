use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GraphError;

/// Identifier of a vertex: comparable, totally ordered, printable.
///
/// The total order doubles as the deterministic iteration order of
/// neighbor sets and as the tie-breaker in ancestry search.
pub trait VertexId: Clone + Ord + fmt::Display {}

impl<T: Clone + Ord + fmt::Display> VertexId for T {}

/// Frontier discipline used for traversal and path search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// FIFO queue; shortest paths by edge count
    #[default]
    Bfs,
    /// LIFO stack
    Dfs,
    /// Call-stack recursion
    DfsRecursive,
}

impl FromStr for Strategy {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bfs" | "breadth-first" => Ok(Strategy::Bfs),
            "dfs" | "depth-first" => Ok(Strategy::Dfs),
            "dfs-recursive" | "recursive" => Ok(Strategy::DfsRecursive),
            other => crate::bail_invalid!("strategy", other),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Bfs => write!(f, "bfs"),
            Strategy::Dfs => write!(f, "dfs"),
            Strategy::DfsRecursive => write!(f, "dfs-recursive"),
        }
    }
}

/// A path found by search: first vertex is the start, last is the goal.
///
/// Never empty; an absent path is represented by `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Path<V>(Vec<V>);

impl<V> Path<V> {
    /// Build a path from its vertices, returning `None` for an empty sequence
    pub fn new(vertices: Vec<V>) -> Option<Self> {
        if vertices.is_empty() {
            None
        } else {
            Some(Path(vertices))
        }
    }

    /// Single-vertex path used when start and goal coincide
    pub fn singleton(vertex: V) -> Self {
        Path(vec![vertex])
    }

    pub fn start(&self) -> &V {
        &self.0[0]
    }

    pub fn goal(&self) -> &V {
        &self.0[self.0.len() - 1]
    }

    /// Number of edges along the path
    pub fn edge_count(&self) -> usize {
        self.0.len() - 1
    }

    pub fn vertices(&self) -> &[V] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<V> {
        self.0
    }
}

impl<V: fmt::Display> fmt::Display for Path<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, vertex) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{}", vertex)?;
        }
        Ok(())
    }
}
