//! LexisEngine: the main entry point for the word graph

use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;

use super::adjacency::WordGraph;
use super::word::Word;
use crate::export::DotExport;
use crate::query::{random_walk, BridgeQuery, PathQuery, ShortestPath};
use crate::{generate, ingest};

/// Negative outcomes of graph queries
///
/// Every variant is locally recoverable: queries return these instead of
/// panicking, and the presentation layer decides how to phrase them. The
/// derived messages are a convenience, not the contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexisError {
    #[error("'{0}' is not in the graph")]
    WordMissing(Word),

    #[error("neither '{0}' nor '{1}' is in the graph")]
    WordsMissing(Word, Word),

    #[error("no bridge words from '{0}' to '{1}'")]
    NoBridges(Word, Word),

    #[error("no path from '{0}' to '{1}'")]
    Unreachable(Word, Word),

    #[error("the graph has no words")]
    EmptyGraph,
}

/// Result type for Lexis operations
pub type LexisResult<T> = Result<T, LexisError>;

/// The main Lexis engine
///
/// Owns one word graph and the random source used by text generation and
/// random walks. An engine is a plain value: tests and embedders can hold
/// as many independent graphs as they like, and a seeded engine replays
/// its random choices deterministically.
#[derive(Debug)]
pub struct LexisEngine {
    graph: WordGraph,
    rng: StdRng,
}

impl Default for LexisEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl LexisEngine {
    /// Create an engine with an empty graph and an entropy-seeded RNG
    pub fn new() -> Self {
        Self {
            graph: WordGraph::new(),
            rng: StdRng::from_entropy(),
        }
    }

    /// Create an engine whose random choices are reproducible
    pub fn with_seed(seed: u64) -> Self {
        Self {
            graph: WordGraph::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Ingest text lines into the graph
    ///
    /// Tokenizes, then links consecutive tokens. Repeated calls accumulate
    /// into the same graph, further incrementing existing edge weights.
    pub fn ingest<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        ingest::ingest_lines(&mut self.graph, lines);
    }

    /// Read access to the underlying graph
    pub fn graph(&self) -> &WordGraph {
        &self.graph
    }

    /// Bridge words between two queried words
    pub fn bridge_words(&self, from: &str, to: &str) -> LexisResult<Vec<Word>> {
        BridgeQuery::between(from, to).execute(&self.graph)
    }

    /// Enrich input text by inserting bridge words between adjacent pairs
    pub fn generate_text(&mut self, text: &str) -> String {
        generate::generate_text(&self.graph, &mut self.rng, text)
    }

    /// Weighted shortest path between two queried words
    pub fn shortest_path(&self, from: &str, to: &str) -> LexisResult<ShortestPath> {
        PathQuery::between(from, to).execute(&self.graph)
    }

    /// Random traversal from a random start word
    pub fn random_walk(&mut self) -> LexisResult<Vec<Word>> {
        random_walk(&self.graph, &mut self.rng)
    }

    /// DOT description of the graph for an external layout renderer
    ///
    /// With a highlight, the path's edges are emphasized and the caption
    /// carries the path length.
    pub fn dot_description(&self, highlight: Option<&ShortestPath>) -> String {
        let export = DotExport::new(&self.graph);
        match highlight {
            Some(path) => export.highlight(path).render(),
            None => export.render(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_engine_is_empty() {
        let engine = LexisEngine::new();
        assert!(engine.graph().is_empty());
    }

    #[test]
    fn ingest_accumulates_across_calls() {
        let mut engine = LexisEngine::new();
        engine.ingest(["a b"]);
        engine.ingest(["a b"]);
        assert_eq!(engine.graph().weight("a", "b"), Some(2));
    }

    #[test]
    fn seeded_engines_replay_identically() {
        let mut first = LexisEngine::with_seed(7);
        let mut second = LexisEngine::with_seed(7);
        for engine in [&mut first, &mut second] {
            engine.ingest(["the quick fox and the lazy fox and the dog"]);
        }
        assert_eq!(first.random_walk(), second.random_walk());
        assert_eq!(
            first.generate_text("the fox and dog"),
            second.generate_text("the fox and dog")
        );
    }

    #[test]
    fn engines_are_independent() {
        let mut one = LexisEngine::new();
        let two = LexisEngine::new();
        one.ingest(["hello world"]);
        assert_eq!(one.graph().word_count(), 2);
        assert!(two.graph().is_empty());
    }
}
