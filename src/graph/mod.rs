//! The signature adjacency graph.
//!
//! Vertices are [`SignatureId`]s of a [`SignatureIndex`](crate::signature::SignatureIndex).
//! Two signatures are adjacent when one is the other with a single letter
//! removed. The graph is undirected and stored as sorted adjacency lists,
//! one per signature, so every signature is a key even when it has no
//! neighbors.

mod builder;
pub mod components;

pub use self::builder::AdjacencyBuilder;
pub use self::components::{longest_ladder, ComponentCensus, ComponentSummary};

use serde::{Deserialize, Serialize};

use crate::signature::SignatureId;

/// Undirected adjacency over signatures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjacencyGraph {
    neighbors: Vec<Vec<SignatureId>>,
}

impl AdjacencyGraph {
    /// Create a graph with `len` vertices and no edges.
    pub fn with_vertices(len: usize) -> Self {
        Self {
            neighbors: vec![Vec::new(); len],
        }
    }

    /// Record the undirected edge `a - b` on both endpoints.
    ///
    /// Callers add each edge once; [`AdjacencyGraph::finish`] sorts the
    /// lists afterwards.
    pub(crate) fn add_edge(&mut self, a: SignatureId, b: SignatureId) {
        debug_assert_ne!(a, b, "self-loop");
        self.neighbors[a.index()].push(b);
        self.neighbors[b.index()].push(a);
    }

    pub(crate) fn finish(&mut self) {
        for list in &mut self.neighbors {
            list.sort_unstable();
            list.dedup();
        }
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    /// Check whether the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }

    /// Neighbors of a signature, in ascending id order.
    pub fn neighbors(&self, id: SignatureId) -> &[SignatureId] {
        &self.neighbors[id.index()]
    }

    /// Number of neighbors of a signature.
    pub fn degree(&self, id: SignatureId) -> usize {
        self.neighbors[id.index()].len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.neighbors.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// Check whether `a` and `b` are adjacent.
    pub fn contains_edge(&self, a: SignatureId, b: SignatureId) -> bool {
        self.neighbors
            .get(a.index())
            .is_some_and(|list| list.binary_search(&b).is_ok())
    }

    /// Iterate over `(id, neighbors)` for every vertex.
    pub fn iter(&self) -> impl Iterator<Item = (SignatureId, &[SignatureId])> {
        self.neighbors
            .iter()
            .enumerate()
            .map(|(i, list)| (SignatureId::new(i), list.as_slice()))
    }

    /// Check that every edge is recorded on both endpoints.
    pub fn is_symmetric(&self) -> bool {
        self.iter()
            .all(|(a, list)| list.iter().all(|&b| self.contains_edge(b, a)))
    }

    /// Check whether any vertex lists itself as a neighbor.
    pub fn has_self_loops(&self) -> bool {
        self.iter().any(|(a, list)| list.contains(&a))
    }

    /// Structural check for a graph restored from storage: `len` vertices,
    /// in-range sorted neighbor ids, symmetric, no self-loops.
    pub fn is_consistent(&self, len: usize) -> bool {
        self.neighbors.len() == len
            && self.neighbors.iter().all(|list| {
                list.windows(2).all(|w| w[0] < w[1]) && list.iter().all(|id| id.index() < len)
            })
            && self.is_symmetric()
            && !self.has_self_loops()
    }
}
