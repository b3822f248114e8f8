//! Core graph data structures

mod adjacency;
mod engine;
mod word;


pub use adjacency::WordGraph;
pub use engine::{LexisEngine, LexisError, LexisResult};
pub use word::Word;
