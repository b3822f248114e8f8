//! Ingestion: folding tokenized text into the word graph

mod tokenize;

pub use tokenize::{fold_and_split, tokenize_lines};

use tracing::debug;

use crate::graph::WordGraph;

/// Tokenize lines and fold them into the graph
///
/// Walks the token stream with a previous-token cursor: every token is
/// ensured as a node, and each consecutive pair increments the edge from
/// the previous token to the current one. The cursor starts empty on each
/// call, so separate ingestion passes do not link across their boundary,
/// but weights from all passes accumulate in the same graph.
pub fn ingest_lines<I, S>(graph: &mut WordGraph, lines: I)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let tokens = tokenize_lines(lines);
    let folded = tokens.len();

    let mut previous: Option<String> = None;
    for token in tokens {
        graph.insert_word(token.clone());
        if let Some(prev) = previous {
            graph.link(prev, token.clone());
        }
        previous = Some(token);
    }

    debug!(
        tokens = folded,
        words = graph.word_count(),
        edges = graph.edge_count(),
        "ingested text into graph"
    );
}
