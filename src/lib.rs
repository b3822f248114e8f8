//! Lexis: word-adjacency graph engine
//!
//! Turns free-form text into a weighted directed graph of adjacent words
//! and answers structural queries over it.
//!
//! # Core Concepts
//!
//! - **Words**: nodes identified by their normalized label
//! - **Edges**: occurrence counts of ordered word pairs in ingested text
//! - **Queries**: bridge words, bridge-enriched text generation, weighted
//!   shortest paths, and random walks — all reading one owned graph
//!
//! # Example
//!
//! ```
//! use lexis::LexisEngine;
//!
//! let mut engine = LexisEngine::with_seed(42);
//! engine.ingest(["the quick fox jumps over the lazy dog"]);
//!
//! let bridges = engine.bridge_words("fox", "over").unwrap();
//! assert_eq!(bridges[0].as_str(), "jumps");
//! ```

mod export;
mod generate;
mod graph;
pub mod ingest;
pub mod query;

pub use export::DotExport;
pub use generate::generate_text;
pub use graph::{LexisEngine, LexisError, LexisResult, Word, WordGraph};
pub use query::{random_walk, BridgeQuery, PathQuery, ShortestPath};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
