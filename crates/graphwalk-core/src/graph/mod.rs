//! Graph storage, traversal and path-finding operations
//!
//! Provides the in-memory directed graph and the algorithms run against it:
//! - Breadth-first and depth-first enumeration (iterative and recursive)
//! - Breadth-first shortest path and depth-first any-path search
//! - Strategy dispatch used by the CLI and configuration

pub mod algos;
pub mod store;
pub mod types;

pub use store::Graph;
pub use types::{Path, Strategy, VertexId};

use crate::error::Result;

impl<V: VertexId> Graph<V> {
    /// Enumerate every vertex reachable from `start` in the order produced by `strategy`
    pub fn traverse(&self, start: &V, strategy: Strategy) -> Result<Vec<V>> {
        match strategy {
            Strategy::Bfs => self.breadth_first_traverse(start),
            Strategy::Dfs => self.depth_first_traverse(start),
            Strategy::DfsRecursive => self.depth_first_traverse_recursive(start),
        }
    }

    /// Search for a path from `start` to `goal` using `strategy`
    ///
    /// Only [`Strategy::Bfs`] guarantees the path is a shortest one.
    pub fn find_path(&self, start: &V, goal: &V, strategy: Strategy) -> Result<Option<Path<V>>> {
        match strategy {
            Strategy::Bfs => self.breadth_first_search(start, goal),
            Strategy::Dfs => self.depth_first_search(start, goal),
            Strategy::DfsRecursive => self.depth_first_search_recursive(start, goal),
        }
    }
}
