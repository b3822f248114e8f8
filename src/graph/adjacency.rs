//! WordGraph: the owned weighted adjacency structure

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::word::Word;

/// A weighted directed graph over word labels
///
/// Maps each word to its successors, each carrying the number of times the
/// ordered pair occurred in ingested text. Every word that appears as a
/// destination is also a top-level key (possibly with no successors), so
/// lookups never miss for a word the graph has seen.
///
/// Words and successors iterate in insertion order. Bridge enumeration and
/// the DOT description rely on that order being stable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WordGraph {
    adjacency: IndexMap<Word, IndexMap<Word, u32>>,
}

impl WordGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self {
            adjacency: IndexMap::new(),
        }
    }

    /// Ensure a word exists as a node, with no successors if new
    pub fn insert_word(&mut self, word: impl Into<Word>) {
        self.adjacency.entry(word.into()).or_default();
    }

    /// Record one occurrence of the ordered pair `from` → `to`
    ///
    /// Creates the edge at weight 1 or increments an existing one. Both
    /// endpoints are materialized as nodes. A word followed by itself
    /// produces a self-loop edge like any other pair.
    pub fn link(&mut self, from: impl Into<Word>, to: impl Into<Word>) {
        let to = to.into();
        self.insert_word(to.clone());
        *self
            .adjacency
            .entry(from.into())
            .or_default()
            .entry(to)
            .or_insert(0) += 1;
    }

    /// Check whether a word is in the graph
    pub fn contains(&self, word: &str) -> bool {
        self.adjacency.contains_key(word)
    }

    /// Weight of the edge `from` → `to`, if it exists
    pub fn weight(&self, from: &str, to: &str) -> Option<u32> {
        self.adjacency.get(from)?.get(to).copied()
    }

    /// Successors of a word with their edge weights, in insertion order
    ///
    /// Empty for unknown words as well as for words with no outgoing edges.
    pub fn successors(&self, word: &str) -> impl Iterator<Item = (&Word, u32)> {
        self.adjacency
            .get(word)
            .into_iter()
            .flatten()
            .map(|(to, weight)| (to, *weight))
    }

    /// All words in insertion order
    pub fn words(&self) -> impl Iterator<Item = &Word> {
        self.adjacency.keys()
    }

    /// All edges as (from, to, weight), in insertion order
    pub fn edges(&self) -> impl Iterator<Item = (&Word, &Word, u32)> {
        self.adjacency.iter().flat_map(|(from, successors)| {
            successors.iter().map(move |(to, weight)| (from, to, *weight))
        })
    }

    /// Number of words
    pub fn word_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of distinct directed edges
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(IndexMap::len).sum()
    }

    /// Whether the graph has no words at all
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Words `m` such that both `from` → `m` and `m` → `to` exist
    ///
    /// The raw two-hop scan shared by the bridge query and the text
    /// generator: unknown endpoints yield an empty set rather than an
    /// error. Candidates come back in insertion order.
    pub fn bridges(&self, from: &str, to: &str) -> Vec<Word> {
        self.successors(from)
            .filter(|(middle, _)| self.weight(middle.as_str(), to).is_some())
            .map(|(middle, _)| middle.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_word_is_idempotent() {
        let mut graph = WordGraph::new();
        graph.insert_word("the");
        graph.insert_word("the");
        assert_eq!(graph.word_count(), 1);
    }

    #[test]
    fn link_creates_then_increments() {
        let mut graph = WordGraph::new();
        graph.link("a", "b");
        assert_eq!(graph.weight("a", "b"), Some(1));
        graph.link("a", "b");
        assert_eq!(graph.weight("a", "b"), Some(2));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn link_materializes_destination_as_node() {
        let mut graph = WordGraph::new();
        graph.link("a", "b");
        assert!(graph.contains("b"));
        assert_eq!(graph.successors("b").count(), 0);
    }

    #[test]
    fn repeated_word_forms_self_loop() {
        let mut graph = WordGraph::new();
        graph.link("buffalo", "buffalo");
        assert_eq!(graph.weight("buffalo", "buffalo"), Some(1));
        assert_eq!(graph.word_count(), 1);
    }

    #[test]
    fn bridges_returns_two_hop_intermediaries_in_insertion_order() {
        let mut graph = WordGraph::new();
        graph.link("a", "m1");
        graph.link("a", "m2");
        graph.link("a", "x");
        graph.link("m1", "b");
        graph.link("m2", "b");

        let bridges = graph.bridges("a", "b");
        assert_eq!(bridges, vec![Word::from("m1"), Word::from("m2")]);
    }

    #[test]
    fn bridges_of_unknown_word_is_empty() {
        let mut graph = WordGraph::new();
        graph.link("a", "b");
        assert!(graph.bridges("nope", "b").is_empty());
        assert!(graph.bridges("a", "nope").is_empty());
    }

    #[test]
    fn self_loop_bridges_word_to_itself() {
        let mut graph = WordGraph::new();
        graph.link("echo", "echo");
        assert_eq!(graph.bridges("echo", "echo"), vec![Word::from("echo")]);
    }
}
