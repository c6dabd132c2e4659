//! Build-or-load lifecycle of the ladder graph.
//!
//! A [`WordGraph`] owns the signature index and adjacency graph for one run.
//! It is built from a [`WordList`] or restored from a
//! [`GraphCache`](crate::cache::GraphCache) once, then only read.

use tracing::info;
#[cfg(feature = "serialization")]
use tracing::warn;

use crate::dictionary::{Fingerprint, NormalizationConfig, WordList};
use crate::graph::{AdjacencyBuilder, AdjacencyGraph, ComponentCensus};
use crate::search::{Ladder, LadderSearch, SearchError, SearchOutcome};
use crate::signature::SignatureIndex;

#[cfg(feature = "serialization")]
use crate::cache::{CacheError, GraphCache};
#[cfg(feature = "serialization")]
use crate::serialization::SnapshotRef;

/// Where a [`WordGraph`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphSource {
    /// Built in memory; no cache was configured
    Built,
    /// Restored from a cache whose fingerprint matched
    Cache,
    /// Built because the cache was missing, stale, or unreadable
    Rebuilt,
}

impl std::fmt::Display for GraphSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Built => write!(f, "built"),
            Self::Cache => write!(f, "cache"),
            Self::Rebuilt => write!(f, "rebuilt"),
        }
    }
}

/// Read-only signature index and adjacency graph for one word list.
#[derive(Debug, Clone)]
pub struct WordGraph {
    index: SignatureIndex,
    graph: AdjacencyGraph,
    fingerprint: Fingerprint,
    normalization: NormalizationConfig,
}

impl WordGraph {
    /// Build the index and graph from scratch.
    pub fn build(words: &WordList) -> Self {
        let index = SignatureIndex::from_words(words.iter());
        info!(
            words = words.len(),
            signatures = index.len(),
            "signature index built"
        );
        let graph = AdjacencyBuilder::new(&index).build();
        Self {
            index,
            graph,
            fingerprint: *words.fingerprint(),
            normalization: *words.config(),
        }
    }

    /// Restore from `cache` if it matches `words`, otherwise build.
    ///
    /// After a rebuild the fresh graph is stored back into the cache. A
    /// failed store is logged and otherwise ignored: the run stays correct
    /// without a cache.
    #[cfg(feature = "serialization")]
    pub fn open(words: &WordList, cache: Option<&GraphCache>) -> (Self, GraphSource) {
        let Some(cache) = cache else {
            return (Self::build(words), GraphSource::Built);
        };

        if let Some((index, graph)) = cache.load_matching(words.fingerprint()) {
            info!(
                path = %cache.path().display(),
                signatures = index.len(),
                "using cached graph"
            );
            let restored = Self {
                index,
                graph,
                fingerprint: *words.fingerprint(),
                normalization: *words.config(),
            };
            return (restored, GraphSource::Cache);
        }

        let built = Self::build(words);
        if let Err(e) = built.store(cache) {
            warn!(path = %cache.path().display(), error = %e, "could not write graph cache");
        }
        (built, GraphSource::Rebuilt)
    }

    /// Rebuild unconditionally and overwrite the cache.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError`] if the cache cannot be written.
    #[cfg(feature = "serialization")]
    pub fn precompute(words: &WordList, cache: &GraphCache) -> Result<Self, CacheError> {
        let built = Self::build(words);
        built.store(cache)?;
        Ok(built)
    }

    /// Write this graph to `cache`.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError`] if the cache cannot be written.
    #[cfg(feature = "serialization")]
    pub fn store(&self, cache: &GraphCache) -> Result<(), CacheError> {
        cache.store(&self.index, &self.graph, &self.fingerprint)
    }

    /// Borrowed snapshot for serializers.
    #[cfg(feature = "serialization")]
    pub fn snapshot(&self) -> SnapshotRef<'_> {
        SnapshotRef {
            fingerprint: &self.fingerprint,
            index: &self.index,
            graph: &self.graph,
        }
    }

    /// The signature index.
    pub fn index(&self) -> &SignatureIndex {
        &self.index
    }

    /// The adjacency graph.
    pub fn graph(&self) -> &AdjacencyGraph {
        &self.graph
    }

    /// Fingerprint of the word list this graph represents.
    pub fn fingerprint(&self) -> &Fingerprint {
        &self.fingerprint
    }

    /// Shortest ladder between two words, normalizing them first.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::UnknownWord`] if either word is not in the
    /// dictionary.
    pub fn search(&self, start: &str, goal: &str) -> Result<SearchOutcome, SearchError> {
        LadderSearch::new(&self.index, &self.graph)
            .with_normalization(self.normalization)
            .find(start, goal)
    }

    /// Connected-component census.
    pub fn census(&self) -> ComponentCensus {
        ComponentCensus::compute(&self.index, &self.graph)
    }

    /// Longest ladder inside the component containing `word`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::UnknownWord`] if `word` is not in the
    /// dictionary.
    pub fn longest_ladder(&self, word: &str) -> Result<Ladder, SearchError> {
        let normalized = self
            .normalization
            .normalize(word)
            .ok_or_else(|| SearchError::UnknownWord {
                word: word.to_string(),
            })?;
        crate::graph::longest_ladder(&self.index, &self.graph, &normalized)
    }
}
