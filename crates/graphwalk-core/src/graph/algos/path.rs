//! Path reconstruction utilities for graph search

use std::collections::BTreeMap;

use crate::graph::types::{Path, VertexId};

/// Walk predecessors back from `goal` to `start` and return the forward path.
///
/// Returns `None` if the chain breaks before reaching `start`.
pub fn reconstruct_path<V: VertexId>(
    start: &V,
    goal: &V,
    predecessors: &BTreeMap<V, V>,
) -> Option<Path<V>> {
    let mut vertices = vec![goal.clone()];
    let mut current = goal;

    while current != start {
        current = predecessors.get(current)?;
        vertices.push(current.clone());
    }

    vertices.reverse();
    Path::new(vertices)
}
