//! Query system for the word graph
//!
//! Provides bridge-word lookup, weighted shortest paths, and random
//! traversal. Queries read the graph and never mutate it.

mod bridge;
mod path;
mod types;
mod walk;

pub use bridge::BridgeQuery;
pub use path::PathQuery;
pub use types::ShortestPath;
pub use walk::random_walk;
