//! Breadth-first ladder search over the signature graph.
//!
//! The search runs over signatures, not words: every word sharing a
//! signature has the same neighbors, so a shortest signature path is a
//! shortest ladder. Words are chosen only after the path is known.
//!
//! # Word selection
//!
//! - The first word is the literal start word and the last is the literal
//!   goal word.
//! - Every intermediate signature shows its lexicographically smallest word.
//! - Distinct anagrams (same signature) produce the two-word ladder
//!   `[start, goal]` with no signature transitions.
//!
//! # Example
//!
//! ```rust,ignore
//! use word_ladder::prelude::*;
//!
//! let index = SignatureIndex::from_words(["lead", "lad", "load", "old", "gold"]);
//! let graph = AdjacencyBuilder::new(&index).build();
//!
//! match LadderSearch::new(&index, &graph).find("lead", "gold")? {
//!     SearchOutcome::Found { ladder, .. } => println!("{}", ladder),
//!     SearchOutcome::NoPath { .. } => println!("No path found"),
//! }
//! ```

use std::collections::VecDeque;

use tracing::debug;

use crate::dictionary::NormalizationConfig;
use crate::graph::AdjacencyGraph;
use crate::signature::{SignatureId, SignatureIndex};

/// Errors that abort a query.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// The start or goal word is not in the dictionary
    #[error("unknown word: {word}")]
    UnknownWord {
        /// The word as given by the caller
        word: String,
    },
}

/// An ordered sequence of words, each one insertion or deletion plus an
/// anagram away from the previous one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ladder {
    words: Vec<String>,
}

impl Ladder {
    pub(crate) fn new(words: Vec<String>) -> Self {
        debug_assert!(!words.is_empty(), "ladders hold at least one word");
        Self { words }
    }

    /// The words, first to last.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of words, always at least one.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of steps between consecutive words.
    pub fn steps(&self) -> usize {
        self.words.len().saturating_sub(1)
    }

    /// First word.
    pub fn start(&self) -> &str {
        &self.words[0]
    }

    /// Last word.
    pub fn goal(&self) -> &str {
        &self.words[self.words.len() - 1]
    }

    /// Take the words.
    pub fn into_words(self) -> Vec<String> {
        self.words
    }
}

impl std::fmt::Display for Ladder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.words.join(" -> "))
    }
}

/// Result of a query that named two known words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// A shortest ladder was found
    Found {
        /// The ladder
        ladder: Ladder,
        /// Signatures dequeued before the goal was reached
        visited: usize,
    },
    /// The goal is not reachable from the start
    NoPath {
        /// Signatures in the start's component
        visited: usize,
    },
}

impl SearchOutcome {
    /// The ladder, if one was found.
    pub fn ladder(&self) -> Option<&Ladder> {
        match self {
            Self::Found { ladder, .. } => Some(ladder),
            Self::NoPath { .. } => None,
        }
    }

    /// Consume the outcome, returning the ladder if one was found.
    pub fn into_ladder(self) -> Option<Ladder> {
        match self {
            Self::Found { ladder, .. } => Some(ladder),
            Self::NoPath { .. } => None,
        }
    }

    /// Number of signatures the search dequeued.
    pub fn visited(&self) -> usize {
        match self {
            Self::Found { visited, .. } | Self::NoPath { visited } => *visited,
        }
    }
}

/// Shortest-ladder queries against a read-only index and graph.
pub struct LadderSearch<'a> {
    index: &'a SignatureIndex,
    graph: &'a AdjacencyGraph,
    normalization: Option<NormalizationConfig>,
}

impl<'a> LadderSearch<'a> {
    /// Search with literal query words.
    pub fn new(index: &'a SignatureIndex, graph: &'a AdjacencyGraph) -> Self {
        Self {
            index,
            graph,
            normalization: None,
        }
    }

    /// Normalize query words the same way the word list was normalized.
    pub fn with_normalization(mut self, config: NormalizationConfig) -> Self {
        self.normalization = Some(config);
        self
    }

    fn resolve(&self, raw: &str) -> Result<(String, SignatureId), SearchError> {
        let unknown = || SearchError::UnknownWord {
            word: raw.to_string(),
        };
        let word = match &self.normalization {
            Some(config) => config.normalize(raw).ok_or_else(unknown)?,
            None => raw.to_string(),
        };
        let id = self.index.id_of_word(&word).ok_or_else(unknown)?;
        Ok((word, id))
    }

    /// Find a shortest ladder from `start` to `goal`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::UnknownWord`] if either word is not in the
    /// dictionary; no search is performed in that case.
    pub fn find(&self, start: &str, goal: &str) -> Result<SearchOutcome, SearchError> {
        let (start, from) = self.resolve(start)?;
        let (goal, to) = self.resolve(goal)?;

        if from == to {
            let words = if start == goal {
                vec![start]
            } else {
                vec![start, goal]
            };
            return Ok(SearchOutcome::Found {
                ladder: Ladder::new(words),
                visited: 0,
            });
        }

        let (path, visited) = shortest_path(self.graph, from, to);
        debug!(%start, %goal, visited, found = path.is_some(), "ladder search finished");

        let Some(path) = path else {
            return Ok(SearchOutcome::NoPath { visited });
        };

        let last = path.len() - 1;
        let words = path
            .iter()
            .enumerate()
            .map(|(i, &id)| match i {
                0 => start.clone(),
                i if i == last => goal.clone(),
                _ => self.index.representative(id).to_string(),
            })
            .collect();

        Ok(SearchOutcome::Found {
            ladder: Ladder::new(words),
            visited,
        })
    }
}

/// Breadth-first shortest path between two signatures.
///
/// Returns the path (both endpoints included) and the number of signatures
/// dequeued. The goal is accepted as soon as it is discovered.
pub(crate) fn shortest_path(
    graph: &AdjacencyGraph,
    from: SignatureId,
    to: SignatureId,
) -> (Option<Vec<SignatureId>>, usize) {
    if from == to {
        return (Some(vec![from]), 0);
    }

    let mut came_from: Vec<Option<SignatureId>> = vec![None; graph.len()];
    let mut seen = vec![false; graph.len()];
    let mut queue = VecDeque::from([from]);
    seen[from.index()] = true;
    let mut visited = 0;

    while let Some(current) = queue.pop_front() {
        visited += 1;
        for &next in graph.neighbors(current) {
            if seen[next.index()] {
                continue;
            }
            seen[next.index()] = true;
            came_from[next.index()] = Some(current);
            if next == to {
                return (Some(walk_back(&came_from, from, to)), visited);
            }
            queue.push_back(next);
        }
    }

    (None, visited)
}

fn walk_back(
    came_from: &[Option<SignatureId>],
    from: SignatureId,
    to: SignatureId,
) -> Vec<SignatureId> {
    let mut path = vec![to];
    let mut current = to;
    while current != from {
        match came_from[current.index()] {
            Some(prev) => {
                path.push(prev);
                current = prev;
            }
            None => break,
        }
    }
    path.reverse();
    path
}

/// Breadth-first distances from `from` to every reachable signature.
pub(crate) fn distances_from(graph: &AdjacencyGraph, from: SignatureId) -> Vec<Option<u32>> {
    let mut dist: Vec<Option<u32>> = vec![None; graph.len()];
    let mut queue = VecDeque::from([from]);
    dist[from.index()] = Some(0);

    while let Some(current) = queue.pop_front() {
        let d = dist[current.index()].unwrap_or_default();
        for &next in graph.neighbors(current) {
            if dist[next.index()].is_none() {
                dist[next.index()] = Some(d + 1);
                queue.push_back(next);
            }
        }
    }
    dist
}
