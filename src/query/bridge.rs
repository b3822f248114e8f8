//! Bridge-word query: single-hop intermediaries between two words

use super::types::require_endpoints;
use crate::graph::{LexisError, LexisResult, Word, WordGraph};

/// Query for the words bridging an ordered pair
///
/// A word `m` bridges `from` to `to` when both edges `from` → `m` and
/// `m` → `to` exist.
#[derive(Debug, Clone)]
pub struct BridgeQuery {
    from: Word,
    to: Word,
}

impl BridgeQuery {
    /// Create a bridge query between two words
    pub fn between(from: impl Into<Word>, to: impl Into<Word>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Execute the query against a graph
    ///
    /// Bridges are reported in graph insertion order, so the answer is
    /// stable for a given graph state.
    pub fn execute(&self, graph: &WordGraph) -> LexisResult<Vec<Word>> {
        let (from, to) = require_endpoints(graph, self.from.as_str(), self.to.as_str())?;

        let bridges = graph.bridges(from.as_str(), to.as_str());
        if bridges.is_empty() {
            return Err(LexisError::NoBridges(from, to));
        }
        Ok(bridges)
    }
}
