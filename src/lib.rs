//! # word-ladder
//!
//! Shortest word ladders where each step inserts or deletes one letter and
//! then rearranges the letters into another dictionary word.
//!
//! Words are grouped by their sorted-letter [`Signature`](signature::Signature);
//! signatures one letter apart are linked in an
//! [`AdjacencyGraph`](graph::AdjacencyGraph), and a breadth-first search over
//! that graph yields a minimum-step ladder. The graph for a word list can be
//! persisted in a [`GraphCache`](cache::GraphCache) so later runs skip the
//! build.
//!
//! ## Example
//!
//! ```rust,ignore
//! use word_ladder::prelude::*;
//!
//! let words = WordList::from_words(
//!     ["lead", "lad", "load", "old", "gold"],
//!     &NormalizationConfig::default(),
//! )?;
//! let graph = WordGraph::build(&words);
//!
//! if let SearchOutcome::Found { ladder, .. } = graph.search("lead", "gold")? {
//!     println!("{}", ladder); // lead -> lad -> load -> old -> gold
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod commands;
pub mod dictionary;
pub mod engine;
pub mod graph;
pub mod search;
pub mod signature;

#[cfg(feature = "serialization")]
pub mod serialization;

/// Persistent cache of the precomputed graph
#[cfg(feature = "serialization")]
pub mod cache;

/// CLI interface and utilities
#[cfg(feature = "cli")]
pub mod cli;

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::dictionary::{
        CaseFolding, Fingerprint, InvalidWordPolicy, NormalizationConfig, WordList, WordListError,
    };
    pub use crate::engine::{GraphSource, WordGraph};
    pub use crate::graph::{AdjacencyBuilder, AdjacencyGraph, ComponentCensus};
    pub use crate::search::{Ladder, LadderSearch, SearchError, SearchOutcome};
    pub use crate::signature::{Signature, SignatureId, SignatureIndex};

    #[cfg(feature = "serialization")]
    pub use crate::cache::{CacheError, GraphCache};

    #[cfg(feature = "serialization")]
    pub use crate::serialization::{
        BincodeSerializer, GraphSerializer, GraphSnapshot, JsonSerializer, SerializationError,
    };

    #[cfg(feature = "compression")]
    pub use crate::serialization::GzipSerializer;
}
