//! DOT graph description for an external layout renderer
//!
//! The engine never invokes a renderer itself; this text is the only
//! artifact that crosses that boundary.

use std::collections::HashSet;
use std::fmt::Write;

use crate::graph::WordGraph;
use crate::query::ShortestPath;

/// Builder for the DOT description of a graph
///
/// Declares every word as a node and every edge with its integer weight
/// label, in graph insertion order. With a highlight, the edges along the
/// path's consecutive pairs are emphasized and the graph caption carries
/// the path length.
#[derive(Debug, Clone)]
pub struct DotExport<'a> {
    graph: &'a WordGraph,
    highlight: Option<&'a ShortestPath>,
}

impl<'a> DotExport<'a> {
    /// Create an export of the whole graph with no highlight
    pub fn new(graph: &'a WordGraph) -> Self {
        Self {
            graph,
            highlight: None,
        }
    }

    /// Emphasize the edges along a shortest path
    pub fn highlight(mut self, path: &'a ShortestPath) -> Self {
        self.highlight = Some(path);
        self
    }

    /// Render the description
    pub fn render(&self) -> String {
        let highlighted: HashSet<(&str, &str)> = self
            .highlight
            .map(|path| {
                path.words
                    .windows(2)
                    .map(|pair| (pair[0].as_str(), pair[1].as_str()))
                    .collect()
            })
            .unwrap_or_default();

        let mut out = String::from("digraph G {\n");

        for word in self.graph.words() {
            let _ = writeln!(out, "\"{word}\";");
        }

        for (from, to, weight) in self.graph.edges() {
            if highlighted.contains(&(from.as_str(), to.as_str())) {
                let _ = writeln!(
                    out,
                    "\"{from}\" -> \"{to}\" [label=\"{weight}\", color=\"red\", penwidth=2.0];"
                );
            } else {
                let _ = writeln!(out, "\"{from}\" -> \"{to}\" [label=\"{weight}\"];");
            }
        }

        if let Some(path) = self.highlight {
            let _ = writeln!(out, "label=\"Shortest Path Length: {}\";", path.total_weight);
        }
        out.push_str("}\n");
        out
    }
}
