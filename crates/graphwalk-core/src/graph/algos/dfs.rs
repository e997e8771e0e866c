use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use crate::error::{GraphError, Result};
use crate::graph::algos::path::reconstruct_path;
use crate::graph::types::{Path, VertexId};
use crate::graph::Graph;

/// Deepest call nesting the recursive variants will enter
pub const MAX_RECURSION_DEPTH: usize = 1000;

impl<V: VertexId> Graph<V> {
    /// Vertices reachable from `start` in depth-first order, using an explicit stack.
    #[tracing::instrument(level = "debug", skip_all, fields(start = %start))]
    pub fn depth_first_traverse(&self, start: &V) -> Result<Vec<V>> {
        self.neighbors(start)?;

        let mut visited = BTreeSet::new();
        let mut order = Vec::new();
        let mut stack = vec![start.clone()];

        while let Some(vertex) = stack.pop() {
            if !visited.insert(vertex.clone()) {
                continue;
            }
            for neighbor in self.neighbors(&vertex)? {
                if !visited.contains(neighbor) {
                    stack.push(neighbor.clone());
                }
            }
            order.push(vertex);
        }

        debug!(visited = order.len(), "depth_first_traverse");
        Ok(order)
    }

    /// Vertices reachable from `start` in depth-first order, by recursion.
    ///
    /// Fails with [`GraphError::RecursionLimit`] if a branch nests deeper
    /// than [`MAX_RECURSION_DEPTH`] calls.
    #[tracing::instrument(level = "debug", skip_all, fields(start = %start))]
    pub fn depth_first_traverse_recursive(&self, start: &V) -> Result<Vec<V>> {
        let mut visited = BTreeSet::new();
        let mut order = Vec::new();
        self.visit_recursive(start, 0, &mut visited, &mut order)?;
        debug!(visited = order.len(), "depth_first_traverse_recursive");
        Ok(order)
    }

    fn visit_recursive(
        &self,
        vertex: &V,
        depth: usize,
        visited: &mut BTreeSet<V>,
        order: &mut Vec<V>,
    ) -> Result<()> {
        if depth >= MAX_RECURSION_DEPTH {
            return Err(GraphError::RecursionLimit {
                depth: MAX_RECURSION_DEPTH,
            });
        }
        let neighbors = self.neighbors(vertex)?;
        visited.insert(vertex.clone());
        order.push(vertex.clone());

        for neighbor in neighbors {
            if !visited.contains(neighbor) {
                self.visit_recursive(neighbor, depth + 1, visited, order)?;
            }
        }
        Ok(())
    }

    /// Some path from `start` to `goal` found depth-first with an explicit stack.
    ///
    /// Each vertex remembers the vertex that pushed it, and the path is
    /// rebuilt from those predecessors once `goal` is popped. Not
    /// necessarily shortest.
    #[tracing::instrument(level = "debug", skip_all, fields(start = %start, goal = %goal))]
    pub fn depth_first_search(&self, start: &V, goal: &V) -> Result<Option<Path<V>>> {
        self.neighbors(start)?;
        if start == goal {
            return Ok(Some(Path::singleton(start.clone())));
        }

        let mut visited = BTreeSet::new();
        let mut predecessors = BTreeMap::new();
        let mut stack = vec![start.clone()];

        while let Some(vertex) = stack.pop() {
            if !visited.insert(vertex.clone()) {
                continue;
            }
            if vertex == *goal {
                let path = reconstruct_path(start, goal, &predecessors);
                debug!(edges = ?path.as_ref().map(Path::edge_count), "path found");
                return Ok(path);
            }
            for neighbor in self.neighbors(&vertex)? {
                if !visited.contains(neighbor) {
                    // Latest pusher wins: its copy sits on top of the stack.
                    predecessors.insert(neighbor.clone(), vertex.clone());
                    stack.push(neighbor.clone());
                }
            }
        }

        debug!(visited = visited.len(), "no path");
        Ok(None)
    }

    /// Some path from `start` to `goal` found by depth-first recursion.
    ///
    /// Fails with [`GraphError::RecursionLimit`] once the current path
    /// reaches [`MAX_RECURSION_DEPTH`] vertices.
    #[tracing::instrument(level = "debug", skip_all, fields(start = %start, goal = %goal))]
    pub fn depth_first_search_recursive(&self, start: &V, goal: &V) -> Result<Option<Path<V>>> {
        let mut visited = BTreeSet::new();
        self.depth_first_search_recursive_with(start, goal, &mut visited, &[])
    }

    /// Recursive step of [`Graph::depth_first_search_recursive`] with explicit accumulators.
    ///
    /// `visited` is shared by every branch of one search. `path` is the route
    /// to `start` and is copied before extension, so a dead-end branch never
    /// alters the caller's path. The prefix counts toward
    /// [`MAX_RECURSION_DEPTH`].
    pub fn depth_first_search_recursive_with(
        &self,
        start: &V,
        goal: &V,
        visited: &mut BTreeSet<V>,
        path: &[V],
    ) -> Result<Option<Path<V>>> {
        let neighbors = self.neighbors(start)?;
        if path.len() >= MAX_RECURSION_DEPTH {
            return Err(GraphError::RecursionLimit {
                depth: MAX_RECURSION_DEPTH,
            });
        }
        visited.insert(start.clone());

        let mut path = path.to_vec();
        path.push(start.clone());

        if start == goal {
            return Ok(Path::new(path));
        }

        for neighbor in neighbors {
            if visited.contains(neighbor) {
                continue;
            }
            if let Some(found) =
                self.depth_first_search_recursive_with(neighbor, goal, visited, &path)?
            {
                return Ok(Some(found));
            }
        }
        Ok(None)
    }
}
