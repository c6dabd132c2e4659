//! Property-based tests for the signature graph and ladder search
//!
//! The adjacency builder only probes deletions of each signature, so these
//! tests compare it against a brute-force all-pairs construction and check
//! that search results are minimal.

use std::collections::VecDeque;

use proptest::prelude::*;
use word_ladder::prelude::*;

// Small alphabet keeps random dictionaries densely connected
fn word_strategy() -> impl Strategy<Value = String> {
    "[a-e]{1,5}"
}

fn dict_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(word_strategy(), 1..40)
}

fn build(words: &[String]) -> WordGraph {
    let list = WordList::from_words(words, &NormalizationConfig::default()).unwrap();
    WordGraph::build(&list)
}

// Helper: reference adjacency by comparing every pair of signatures
fn naive_adjacency(index: &SignatureIndex) -> Vec<Vec<usize>> {
    let sigs: Vec<&Signature> = index.iter().map(|(_, s)| s).collect();
    let mut adj = vec![Vec::new(); sigs.len()];
    for i in 0..sigs.len() {
        for j in 0..sigs.len() {
            if sigs[i].is_single_deletion_of(sigs[j]) || sigs[j].is_single_deletion_of(sigs[i]) {
                adj[i].push(j);
            }
        }
    }
    adj
}

// Helper: BFS distance over the reference adjacency
fn naive_distance(adj: &[Vec<usize>], from: usize, to: usize) -> Option<usize> {
    let mut dist = vec![None; adj.len()];
    dist[from] = Some(0);
    let mut queue = VecDeque::from([from]);
    while let Some(v) = queue.pop_front() {
        let d = dist[v].unwrap();
        for &n in &adj[v] {
            if dist[n].is_none() {
                dist[n] = Some(d + 1);
                queue.push_back(n);
            }
        }
    }
    dist[to]
}

proptest! {
    #[test]
    fn prop_graph_is_symmetric_without_self_loops(words in dict_strategy()) {
        let graph = build(&words);
        prop_assert!(graph.graph().is_symmetric());
        prop_assert!(!graph.graph().has_self_loops());
        prop_assert!(graph.graph().is_consistent(graph.index().len()));
        prop_assert!(graph.index().is_consistent());
    }

    #[test]
    fn prop_edges_match_brute_force(words in dict_strategy()) {
        let graph = build(&words);
        let naive = naive_adjacency(graph.index());

        for (id, neighbors) in graph.graph().iter() {
            let got: Vec<usize> = neighbors.iter().map(|n| n.index()).collect();
            prop_assert_eq!(&got, &naive[id.index()]);
        }
    }

    #[test]
    fn prop_edges_differ_by_one_letter(words in dict_strategy()) {
        let graph = build(&words);
        let index = graph.index();
        for (id, neighbors) in graph.graph().iter() {
            for &n in neighbors {
                let a = index.signature(id);
                let b = index.signature(n);
                prop_assert_eq!(a.len().abs_diff(b.len()), 1);
            }
        }
    }

    #[test]
    fn prop_ladders_are_minimal_and_valid(
        words in dict_strategy(),
        i in any::<prop::sample::Index>(),
        j in any::<prop::sample::Index>(),
    ) {
        let graph = build(&words);
        let start = &words[i.index(words.len())];
        let goal = &words[j.index(words.len())];

        let outcome = graph.search(start, goal).unwrap();
        let index = graph.index();
        let from = index.id_of_word(start).unwrap();
        let to = index.id_of_word(goal).unwrap();
        let expected = naive_distance(&naive_adjacency(index), from.index(), to.index());

        match outcome {
            SearchOutcome::Found { ladder, .. } => {
                prop_assert_eq!(ladder.start(), start.as_str());
                prop_assert_eq!(ladder.goal(), goal.as_str());
                if start == goal {
                    prop_assert_eq!(ladder.len(), 1);
                } else if from == to {
                    prop_assert_eq!(ladder.len(), 2);
                } else {
                    prop_assert_eq!(Some(ladder.steps()), expected);
                }
                for pair in ladder.words().windows(2) {
                    let (a, b) = (Signature::of(&pair[0]), Signature::of(&pair[1]));
                    prop_assert!(
                        a == b || a.is_single_deletion_of(&b) || b.is_single_deletion_of(&a)
                    );
                    prop_assert!(index.contains_word(&pair[0]));
                }
            }
            SearchOutcome::NoPath { .. } => {
                prop_assert_eq!(expected, None);
            }
        }
    }

    #[test]
    fn prop_census_partitions_all_words(words in dict_strategy()) {
        let graph = build(&words);
        let census = graph.census();

        let total_words: usize = census.components.iter().map(|c| c.words).sum();
        let total_sigs: usize = census.components.iter().map(|c| c.signatures).sum();
        prop_assert_eq!(total_words, graph.index().word_count());
        prop_assert_eq!(total_sigs, graph.index().len());

        let hist_total: usize = census.histogram().values().sum();
        prop_assert_eq!(hist_total, census.len());
    }

    #[test]
    fn prop_deletions_are_distinct_and_shorter(word in "[a-e]{0,8}") {
        let sig = Signature::of(&word);
        let dels = sig.deletions();
        for d in &dels {
            prop_assert_eq!(d.len() + 1, sig.len());
            prop_assert!(sig.is_single_deletion_of(d));
        }
        let mut sorted = dels.clone();
        sorted.sort();
        sorted.dedup();
        prop_assert_eq!(sorted.len(), dels.len());
    }
}
