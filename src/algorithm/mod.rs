pub mod dijkstra;
pub mod path;
pub mod traits;

pub use traits::{batch_shortest_paths, ShortestPathAlgorithm, ShortestPathResult};
