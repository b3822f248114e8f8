//! Query result types

use serde::{Deserialize, Serialize};

use crate::graph::{LexisError, LexisResult, Word, WordGraph};

/// Result of a shortest-path query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortestPath {
    /// Words on the path from source to destination, inclusive
    ///
    /// A single word when source and destination coincide, otherwise at
    /// least two.
    pub words: Vec<Word>,
    /// Sum of edge weights along consecutive path pairs
    pub total_weight: u64,
}

impl ShortestPath {
    /// Number of edges on the path
    pub fn hops(&self) -> usize {
        self.words.len().saturating_sub(1)
    }
}

/// Fold two query arguments to label form and require both in the graph
///
/// Names whichever endpoint is absent, or both.
pub(crate) fn require_endpoints(
    graph: &WordGraph,
    from: &str,
    to: &str,
) -> LexisResult<(Word, Word)> {
    let from = Word::normalize(from);
    let to = Word::normalize(to);
    match (graph.contains(from.as_str()), graph.contains(to.as_str())) {
        (true, true) => Ok((from, to)),
        (false, true) => Err(LexisError::WordMissing(from)),
        (true, false) => Err(LexisError::WordMissing(to)),
        (false, false) => Err(LexisError::WordsMissing(from, to)),
    }
}
