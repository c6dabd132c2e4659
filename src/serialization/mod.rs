//! Graph snapshot serialization.
//!
//! A snapshot is the precomputed pair (signature index, adjacency graph)
//! together with the fingerprint of the word list it was built from. This
//! module encodes snapshots in several formats, with optional gzip
//! compression; [`GraphCache`](crate::cache::GraphCache) decides where the
//! bytes live.
//!
//! # Example
//!
//! ```rust,ignore
//! use word_ladder::prelude::*;
//! use word_ladder::serialization::{BincodeSerializer, GraphSerializer, SnapshotRef};
//!
//! let words = WordList::from_words(["lead", "lad"], &NormalizationConfig::default())?;
//! let graph = WordGraph::build(&words);
//!
//! let mut buffer = Vec::new();
//! BincodeSerializer::serialize(&graph.snapshot(), &mut buffer)?;
//! let restored = BincodeSerializer::deserialize(&buffer[..])?;
//! assert_eq!(restored.graph, *graph.graph());
//! ```

use std::io::{Read, Write};

use serde::{Deserialize, Serialize};

use crate::dictionary::Fingerprint;
use crate::graph::AdjacencyGraph;
use crate::signature::SignatureIndex;

mod bincode_impl;
mod json_impl;

#[cfg(feature = "compression")]
mod compression_impl;

pub use self::bincode_impl::{BincodeSerializer, MAX_SNAPSHOT_BYTES};
pub use self::json_impl::JsonSerializer;

#[cfg(feature = "compression")]
pub use self::compression_impl::GzipSerializer;

/// Borrowed view of a snapshot, used for writing without cloning.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SnapshotRef<'a> {
    /// Fingerprint of the source word list
    pub fingerprint: &'a Fingerprint,
    /// Signature grouping
    pub index: &'a SignatureIndex,
    /// Adjacency over the index's signatures
    pub graph: &'a AdjacencyGraph,
}

/// Owned snapshot produced by deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GraphSnapshot {
    /// Fingerprint of the source word list
    pub fingerprint: Fingerprint,
    /// Signature grouping
    pub index: SignatureIndex,
    /// Adjacency over the index's signatures
    pub graph: AdjacencyGraph,
}

impl GraphSnapshot {
    /// Check whether the snapshot was built from the given source.
    pub fn matches(&self, fingerprint: &Fingerprint) -> bool {
        &self.fingerprint == fingerprint
    }

    /// Check that the index and graph agree with each other and with their
    /// own invariants.
    pub fn is_consistent(&self) -> bool {
        self.index.is_consistent() && self.graph.is_consistent(self.index.len())
    }
}

/// Trait for encoding and decoding graph snapshots.
pub trait GraphSerializer {
    /// Serialize a snapshot to a writer.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding or writing fails.
    fn serialize<W>(snapshot: &SnapshotRef<'_>, writer: W) -> Result<(), SerializationError>
    where
        W: Write;

    /// Deserialize a snapshot from a reader.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or decoding fails.
    fn deserialize<R>(reader: R) -> Result<GraphSnapshot, SerializationError>
    where
        R: Read;
}

/// Errors that can occur during serialization/deserialization.
#[derive(Debug, thiserror::Error)]
pub enum SerializationError {
    /// Error during bincode serialization
    #[error("Bincode error")]
    Bincode(#[from] bincode::Error),
    /// Error during JSON serialization
    #[error("JSON error")]
    Json(#[from] serde_json::Error),
    /// I/O error
    #[error("I/O error")]
    Io(#[from] std::io::Error),
}
