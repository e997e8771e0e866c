//! Earliest-ancestor lookup over (parent, child) pairs
//!
//! Pairs become child -> parent edges; ancestor paths are enumerated
//! breadth-first from the starting individual and the ancestor at the end
//! of the longest path wins, smallest id breaking ties.

use std::collections::VecDeque;

use tracing::debug;

use crate::error::Result;
use crate::graph::{Graph, VertexId};

/// Returned by [`earliest_ancestor_id`] when the start has no ancestors.
/// Integer ids are non-negative, so the sentinel never collides with one.
pub const NO_ANCESTOR: i64 = -1;

/// Graph of child -> parent edges built from `(parent, child)` pairs
pub fn ancestry_graph<V: VertexId>(pairs: &[(V, V)]) -> Result<Graph<V>> {
    let mut graph = Graph::new();
    for (parent, child) in pairs {
        graph.add_vertex(parent.clone());
        graph.add_vertex(child.clone());
        graph.add_edge(child, parent)?;
    }
    Ok(graph)
}

/// Most distant ancestor of `start`, or `None` if it has no parents.
///
/// Depth is the length of the longest child -> parent chain. A vertex
/// already on the current chain is not re-entered, so cyclic input
/// terminates.
#[tracing::instrument(level = "debug", skip_all, fields(start = %start, pairs = pairs.len()))]
pub fn earliest_ancestor<V: VertexId>(pairs: &[(V, V)], start: &V) -> Result<Option<V>> {
    let graph = ancestry_graph(pairs)?;
    if !graph.contains(start) {
        return Ok(None);
    }

    let mut best: Option<(usize, V)> = None;
    let mut queue = VecDeque::from([vec![start.clone()]]);

    while let Some(chain) = queue.pop_front() {
        let Some(current) = chain.last() else {
            continue;
        };

        if chain.len() > 1 {
            let depth = chain.len() - 1;
            let better = match &best {
                None => true,
                Some((best_depth, best_id)) => {
                    depth > *best_depth || (depth == *best_depth && current < best_id)
                }
            };
            if better {
                best = Some((depth, current.clone()));
            }
        }

        for parent in graph.neighbors(current)? {
            if chain.contains(parent) {
                continue;
            }
            let mut extended = chain.clone();
            extended.push(parent.clone());
            queue.push_back(extended);
        }
    }

    debug!(depth = ?best.as_ref().map(|(depth, _)| *depth), "earliest_ancestor");
    Ok(best.map(|(_, id)| id))
}

/// Integer form of [`earliest_ancestor`] returning [`NO_ANCESTOR`] when absent.
///
/// Every id, in `pairs` and `start`, must be non-negative.
pub fn earliest_ancestor_id(pairs: &[(i64, i64)], start: i64) -> Result<i64> {
    let ids = pairs
        .iter()
        .flat_map(|&(parent, child)| [parent, child])
        .chain([start]);
    for id in ids {
        if id < 0 {
            crate::bail_invalid!("ancestor id (must be non-negative)", id);
        }
    }
    Ok(earliest_ancestor(pairs, &start)?.unwrap_or(NO_ANCESTOR))
}
