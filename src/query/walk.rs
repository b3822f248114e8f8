//! Random traversal over the graph

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::trace;

use crate::graph::{LexisError, LexisResult, Word, WordGraph};

/// Walk the graph from a uniformly random start word
///
/// From each word one successor is drawn uniformly among its distinct
/// destinations — edge weights never bias the draw. The walk halts on a
/// dead end, or when the drawn edge was already traversed in this walk
/// (the repeated edge is not taken). The visited sequence is therefore
/// bounded by the number of distinct edges plus one and never repeats a
/// directed edge.
///
/// Candidates are collected into their stable graph order before the
/// draw, so a seeded RNG replays the same walk on the same graph.
pub fn random_walk(graph: &WordGraph, rng: &mut impl Rng) -> LexisResult<Vec<Word>> {
    let words: Vec<&Word> = graph.words().collect();
    let Some(&start) = words.choose(rng) else {
        return Err(LexisError::EmptyGraph);
    };

    let mut traversed: HashSet<(&Word, &Word)> = HashSet::new();
    let mut walk = vec![start.clone()];
    let mut current = start;

    loop {
        let successors: Vec<&Word> = graph
            .successors(current.as_str())
            .map(|(next, _)| next)
            .collect();

        let Some(&next) = successors.choose(rng) else {
            break; // dead end
        };

        if !traversed.insert((current, next)) {
            break; // this directed edge was already walked
        }

        walk.push(next.clone());
        current = next;
    }

    trace!(start = %start, steps = walk.len() - 1, "random walk finished");
    Ok(walk)
}
