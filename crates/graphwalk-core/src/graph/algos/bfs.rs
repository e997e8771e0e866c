use std::collections::{BTreeSet, VecDeque};

use tracing::debug;

use crate::error::Result;
use crate::graph::types::{Path, VertexId};
use crate::graph::Graph;

impl<V: VertexId> Graph<V> {
    /// Vertices reachable from `start` in breadth-first order.
    ///
    /// A vertex is marked visited when dequeued, so each appears once.
    #[tracing::instrument(level = "debug", skip_all, fields(start = %start))]
    pub fn breadth_first_traverse(&self, start: &V) -> Result<Vec<V>> {
        self.neighbors(start)?;

        let mut visited = BTreeSet::new();
        let mut order = Vec::new();
        let mut queue = VecDeque::from([start.clone()]);

        while let Some(vertex) = queue.pop_front() {
            if !visited.insert(vertex.clone()) {
                continue;
            }
            for neighbor in self.neighbors(&vertex)? {
                if !visited.contains(neighbor) {
                    queue.push_back(neighbor.clone());
                }
            }
            order.push(vertex);
        }

        debug!(visited = order.len(), "breadth_first_traverse");
        Ok(order)
    }

    /// Shortest path (by edge count) from `start` to `goal`.
    ///
    /// Paths leave the queue in non-decreasing length, so the first one
    /// ending at `goal` is a shortest one. `Ok(None)` when unreachable.
    #[tracing::instrument(level = "debug", skip_all, fields(start = %start, goal = %goal))]
    pub fn breadth_first_search(&self, start: &V, goal: &V) -> Result<Option<Path<V>>> {
        self.neighbors(start)?;
        if start == goal {
            return Ok(Some(Path::singleton(start.clone())));
        }

        let mut visited = BTreeSet::new();
        let mut queue = VecDeque::from([vec![start.clone()]]);

        while let Some(path) = queue.pop_front() {
            let Some(last) = path.last().cloned() else {
                continue;
            };
            if last == *goal {
                debug!(edges = path.len() - 1, "path found");
                return Ok(Path::new(path));
            }
            if !visited.insert(last.clone()) {
                continue;
            }
            for neighbor in self.neighbors(&last)? {
                if !visited.contains(neighbor) {
                    let mut extended = path.clone();
                    extended.push(neighbor.clone());
                    queue.push_back(extended);
                }
            }
        }

        debug!(visited = visited.len(), "no path");
        Ok(None)
    }
}
