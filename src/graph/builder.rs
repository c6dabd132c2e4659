//! Adjacency construction by length buckets.

use rustc_hash::FxHashMap;
use tracing::{debug, info};

use super::AdjacencyGraph;
use crate::signature::{Signature, SignatureId, SignatureIndex};

/// Builds the [`AdjacencyGraph`] for a [`SignatureIndex`].
///
/// Only signatures whose lengths differ by one can be adjacent, so the index
/// is bucketed by length and each bucket `L` is compared against bucket
/// `L - 1` only. Within that pair of buckets a longer signature is compared
/// to the shorter bucket by multiset difference: each distinct one-letter
/// deletion of a sorted signature is itself sorted and is probed in a hash
/// map of the shorter bucket. That costs one lookup per distinct letter of
/// each signature instead of comparing every pair of signatures.
///
/// Each edge is discovered exactly once, from its longer endpoint, and
/// recorded on both endpoints.
///
/// # Example
///
/// ```rust,ignore
/// use word_ladder::prelude::*;
///
/// let index = SignatureIndex::from_words(["lead", "lad", "load"]);
/// let graph = AdjacencyBuilder::new(&index).build();
/// assert!(graph.is_symmetric());
/// ```
pub struct AdjacencyBuilder<'a> {
    index: &'a SignatureIndex,
}

impl<'a> AdjacencyBuilder<'a> {
    /// Create a builder over an index.
    pub fn new(index: &'a SignatureIndex) -> Self {
        Self { index }
    }

    /// Compute the graph.
    pub fn build(&self) -> AdjacencyGraph {
        let mut graph = AdjacencyGraph::with_vertices(self.index.len());
        let buckets = self.index.ids_by_length();

        for (&len, longer) in &buckets {
            let Some(shorter) = len.checked_sub(1).and_then(|l| buckets.get(&l)) else {
                debug!(len, signatures = longer.len(), "no shorter bucket");
                continue;
            };

            let lookup: FxHashMap<&Signature, SignatureId> = shorter
                .iter()
                .map(|&id| (self.index.signature(id), id))
                .collect();

            let before = graph.edge_count();
            for &id in longer {
                for deletion in self.index.signature(id).deletions() {
                    if let Some(&neighbor) = lookup.get(&deletion) {
                        graph.add_edge(id, neighbor);
                    }
                }
            }
            debug!(
                len,
                longer = longer.len(),
                shorter = shorter.len(),
                edges = graph.edge_count() - before,
                "linked length buckets"
            );
        }

        graph.finish();
        info!(
            signatures = graph.len(),
            edges = graph.edge_count(),
            "adjacency graph built"
        );
        graph
    }
}
