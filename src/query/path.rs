//! Weighted shortest-path query (Dijkstra)

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use tracing::trace;

use super::types::{require_endpoints, ShortestPath};
use crate::graph::{LexisError, LexisResult, Word, WordGraph};

/// Query for the lowest-total-weight path between two words
#[derive(Debug, Clone)]
pub struct PathQuery {
    from: Word,
    to: Word,
}

/// Heap entry for the priority queue
///
/// Ordered by cost reversed (std's BinaryHeap is a max-heap), with the
/// label as tie-breaker so ordering stays total.
#[derive(Copy, Clone, PartialEq, Eq)]
struct State<'a> {
    cost: u64,
    word: &'a str,
}

impl Ord for State<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.word.cmp(self.word))
    }
}

impl PartialOrd for State<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PathQuery {
    /// Create a path query between two words
    pub fn between(from: impl Into<Word>, to: impl Into<Word>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Execute the query against a graph
    ///
    /// Each node keeps a single predecessor, set by strict improvement;
    /// when several shortest paths tie, which one is reported is
    /// implementation-defined. The returned total weight is recomputed
    /// from the reconstructed path as a consistency cross-check.
    pub fn execute(&self, graph: &WordGraph) -> LexisResult<ShortestPath> {
        let (from, to) = require_endpoints(graph, self.from.as_str(), self.to.as_str())?;

        if from == to {
            return Ok(ShortestPath {
                words: vec![from],
                total_weight: 0,
            });
        }

        // Unvisited nodes are implicitly at infinity
        let mut dist: HashMap<&str, u64> = HashMap::new();
        let mut prev: HashMap<&str, &str> = HashMap::new();
        let mut heap = BinaryHeap::new();

        dist.insert(from.as_str(), 0);
        heap.push(State {
            cost: 0,
            word: from.as_str(),
        });

        while let Some(State { cost, word }) = heap.pop() {
            // Stale entry: a shorter route to this node was already settled
            if cost > *dist.get(word).unwrap_or(&u64::MAX) {
                continue;
            }

            for (next, weight) in graph.successors(word) {
                let candidate = cost + u64::from(weight);
                if candidate < *dist.get(next.as_str()).unwrap_or(&u64::MAX) {
                    dist.insert(next.as_str(), candidate);
                    prev.insert(next.as_str(), word);
                    heap.push(State {
                        cost: candidate,
                        word: next.as_str(),
                    });
                }
            }
        }

        trace!(settled = dist.len(), source = %from, "dijkstra frontier exhausted");

        if !dist.contains_key(to.as_str()) {
            return Err(LexisError::Unreachable(from, to));
        }

        // Walk predecessors back from the destination, then reverse
        let mut labels = vec![to.as_str()];
        let mut current = to.as_str();
        while let Some(&predecessor) = prev.get(current) {
            labels.push(predecessor);
            current = predecessor;
        }
        labels.reverse();

        let total_weight = labels
            .windows(2)
            .map(|pair| u64::from(graph.weight(pair[0], pair[1]).expect("edge on reconstructed path")))
            .sum();

        Ok(ShortestPath {
            words: labels.into_iter().map(Word::from).collect(),
            total_weight,
        })
    }
}
