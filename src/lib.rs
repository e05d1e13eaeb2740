//! Lazy Dijkstra - Single-Source Shortest Paths
//!
//! This library implements Dijkstra's algorithm with a lazy-deletion frontier:
//! a plain binary heap that tolerates duplicate entries per vertex, with stale
//! entries discarded on extraction instead of being decreased in place.
//!
//! The engine works on directed graphs with real non-negative edge weights and
//! records a predecessor table alongside the distances, from which full paths
//! are reconstructed after the main computation.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    dijkstra::Dijkstra,
    path::{reconstruct_path, PathReconstruction},
    ShortestPathAlgorithm, ShortestPathResult,
};
/// Re-export main types for convenient use
pub use graph::directed::DirectedGraph;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("Source vertex not found in graph")]
    SourceNotFound,

    #[error("Edge from {from} to {to} references a vertex missing from the graph")]
    MissingVertex { from: usize, to: usize },

    #[error("Distance overflow while relaxing edge from {from} to {to}")]
    NumericOverflow { from: usize, to: usize },

    #[error("Predecessor table contains a cycle at vertex {0}")]
    CorruptPredecessors(usize),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
