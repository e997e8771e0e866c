use std::collections::{BTreeMap, BTreeSet};

use tracing::trace;

use crate::error::{GraphError, Result};
use crate::graph::types::VertexId;

/// Directed graph stored as vertex -> set of outbound neighbors.
///
/// Vertices are registered first, then edges; there is no removal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph<V: VertexId> {
    vertices: BTreeMap<V, BTreeSet<V>>,
}

impl<V: VertexId> Default for Graph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: VertexId> Graph<V> {
    pub fn new() -> Self {
        Self {
            vertices: BTreeMap::new(),
        }
    }

    /// Register a vertex with an empty neighbor set.
    ///
    /// Returns `false` and leaves existing edges untouched if the vertex is
    /// already registered; use [`Graph::clear_neighbors`] to reset one.
    pub fn add_vertex(&mut self, id: V) -> bool {
        if self.vertices.contains_key(&id) {
            return false;
        }
        trace!(vertex = %id, "add_vertex");
        self.vertices.insert(id, BTreeSet::new());
        true
    }

    /// Add a directed edge `from -> to`.
    ///
    /// Both endpoints must be registered. Returns whether the edge is new;
    /// duplicates collapse. On error the graph is unchanged.
    pub fn add_edge(&mut self, from: &V, to: &V) -> Result<bool> {
        if !self.vertices.contains_key(to) {
            return Err(GraphError::unknown_vertex(to));
        }
        let neighbors = self
            .vertices
            .get_mut(from)
            .ok_or_else(|| GraphError::unknown_vertex(from))?;
        trace!(from = %from, to = %to, "add_edge");
        Ok(neighbors.insert(to.clone()))
    }

    /// Outbound neighbors of `id`
    pub fn neighbors(&self, id: &V) -> Result<&BTreeSet<V>> {
        self.vertices
            .get(id)
            .ok_or_else(|| GraphError::unknown_vertex(id))
    }

    /// Drop every outbound edge of `id`, keeping the vertex registered
    pub fn clear_neighbors(&mut self, id: &V) -> Result<()> {
        self.vertices
            .get_mut(id)
            .ok_or_else(|| GraphError::unknown_vertex(id))?
            .clear();
        Ok(())
    }

    pub fn contains(&self, id: &V) -> bool {
        self.vertices.contains_key(id)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.vertices.values().map(BTreeSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Registered vertices in identifier order
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.vertices.keys()
    }

    /// Build a graph from `(vertex, neighbors)` pairs, registering every
    /// vertex before any edge so forward references resolve.
    pub fn from_adjacency<I, N>(adjacency: I) -> Result<Self>
    where
        I: IntoIterator<Item = (V, N)>,
        N: IntoIterator<Item = V>,
    {
        let entries: Vec<(V, N)> = adjacency.into_iter().collect();
        let mut graph = Self::new();
        for (vertex, _) in &entries {
            graph.add_vertex(vertex.clone());
        }
        for (vertex, neighbors) in entries {
            for neighbor in neighbors {
                graph.add_edge(&vertex, &neighbor)?;
            }
        }
        Ok(graph)
    }
}
