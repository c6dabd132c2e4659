//! Connected components and longest ladders.

use std::collections::{BTreeMap, VecDeque};

use tracing::info;

use super::AdjacencyGraph;
use crate::search::{distances_from, shortest_path, Ladder, SearchError};
use crate::signature::{SignatureId, SignatureIndex};

/// One connected component of the signature graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentSummary {
    /// Smallest signature id in the component
    pub root: SignatureId,
    /// Number of signatures
    pub signatures: usize,
    /// Number of words across those signatures
    pub words: usize,
}

/// Census of all connected components.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentCensus {
    /// Components ordered by their root id
    pub components: Vec<ComponentSummary>,
}

impl ComponentCensus {
    /// Walk the whole graph and summarize every component.
    pub fn compute(index: &SignatureIndex, graph: &AdjacencyGraph) -> Self {
        let mut seen = vec![false; graph.len()];
        let mut components = Vec::new();

        for root in index.ids() {
            if seen[root.index()] {
                continue;
            }
            seen[root.index()] = true;

            let mut queue = VecDeque::from([root]);
            let mut signatures = 0;
            let mut words = 0;
            while let Some(id) = queue.pop_front() {
                signatures += 1;
                words += index.words(id).len();
                for &next in graph.neighbors(id) {
                    if !seen[next.index()] {
                        seen[next.index()] = true;
                        queue.push_back(next);
                    }
                }
            }

            components.push(ComponentSummary {
                root,
                signatures,
                words,
            });
        }

        info!(components = components.len(), "component census complete");
        Self { components }
    }

    /// Number of components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Check whether the graph had no vertices.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Map of component size in words to the number of such components.
    pub fn histogram(&self) -> BTreeMap<usize, usize> {
        let mut counts = BTreeMap::new();
        for component in &self.components {
            *counts.entry(component.words).or_insert(0) += 1;
        }
        counts
    }

    /// The component with the most words, ties going to the smallest root.
    pub fn largest(&self) -> Option<&ComponentSummary> {
        self.components
            .iter()
            .max_by(|a, b| a.words.cmp(&b.words).then(b.root.cmp(&a.root)))
    }
}

/// Longest shortest ladder inside the component containing `word`.
///
/// Every signature of the component is used as a BFS source; the pair with
/// the greatest distance wins, the first pair found breaking ties. The
/// ladder shows representative words at both ends, except that `word`
/// itself is shown when its signature is an endpoint.
///
/// This is quadratic in the component size.
///
/// # Errors
///
/// Returns [`SearchError::UnknownWord`] if `word` is not in the dictionary.
pub fn longest_ladder(
    index: &SignatureIndex,
    graph: &AdjacencyGraph,
    word: &str,
) -> Result<Ladder, SearchError> {
    let origin = index
        .id_of_word(word)
        .ok_or_else(|| SearchError::UnknownWord {
            word: word.to_string(),
        })?;

    let members: Vec<SignatureId> = distances_from(graph, origin)
        .iter()
        .enumerate()
        .filter(|(_, d)| d.is_some())
        .map(|(i, _)| SignatureId::new(i))
        .collect();
    let total = members.len();
    let step = (total / 10).max(1);
    info!(word, signatures = total, "searching longest ladder");

    let (mut best_from, mut best_to, mut best_len) = (origin, origin, 0u32);
    for (checked, &from) in members.iter().enumerate() {
        if checked > 0 && checked % step == 0 {
            info!(checked, total, longest = best_len, "longest ladder progress");
        }
        let dist = distances_from(graph, from);
        for &to in &members {
            if let Some(d) = dist[to.index()] {
                if d > best_len {
                    (best_from, best_to, best_len) = (from, to, d);
                }
            }
        }
    }

    let (path, _) = shortest_path(graph, best_from, best_to);
    let path = path.unwrap_or_else(|| vec![best_from]);
    let pick = |id: SignatureId| {
        if id == origin {
            word.to_string()
        } else {
            index.representative(id).to_string()
        }
    };

    let words = path
        .iter()
        .enumerate()
        .map(|(i, &id)| {
            if i == 0 || i == path.len() - 1 {
                pick(id)
            } else {
                index.representative(id).to_string()
            }
        })
        .collect();

    info!(length = best_len, "longest ladder found");
    Ok(Ladder::new(words))
}
